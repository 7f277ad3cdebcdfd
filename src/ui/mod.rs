//! Human-readable step log
//!
//! Plain line-oriented output meant for CI logs. Colors are applied by
//! `console`, which drops them when stdout is not a terminal.

mod output;

pub use output::{command, done, key_value, section, step_ok, step_warn};
