//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod list;
pub mod open;
pub mod remove;
pub mod seal;
pub mod unlock;
