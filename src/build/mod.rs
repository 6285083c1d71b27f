//! Build orchestration: resolve, generate, write, report

pub mod command;

pub use command::{execute_build, execute_inject, BuildResult};
