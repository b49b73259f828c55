//! Project configuration (`.linkseal.toml`).

pub mod settings;

pub use settings::Settings;
