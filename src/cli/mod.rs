//! Command line interface

pub mod args;
mod execute;
pub mod options;

pub use args::{Cli, LogFormat};
pub use execute::execute;
