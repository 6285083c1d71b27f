pub mod args;
pub mod exit;

pub use args::{Cli, Command};
pub use exit::ExitCode;
