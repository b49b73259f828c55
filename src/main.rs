use clap::Parser;
use linkseal::cli::{commands, output, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Seal {
            ref plaintext,
            ref name,
            ref note,
            force,
        } => commands::seal::execute(&cli, plaintext, name.as_deref(), note.as_deref(), force),
        Commands::Open { ref blob, ref name } => {
            commands::open::execute(&cli, blob.as_deref(), name.as_deref())
        }
        Commands::Unlock { ref name, print } => commands::unlock::execute(&cli, name, print),
        Commands::List { ref format } => commands::list::execute(&cli, format),
        Commands::Remove { ref name, force } => commands::remove::execute(&cli, name, force),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
