//! Output functions for consistent step log formatting

use console::style;

/// Display a section header
pub fn section(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
}

/// Display a success step
pub fn step_ok(message: &str) {
    println!("  {} {}", style("[OK]").green(), message);
}

/// Display a warning step
pub fn step_warn(message: &str) {
    println!("  {} {}", style("[WARN]").yellow(), message);
}

/// Display a final success line
pub fn done(message: &str) {
    println!("{}", style(message).green());
}

/// Echo a command line before running it
pub fn command(line: &str) {
    println!("{} {}", style("$").green().bold(), line);
    println!();
}

/// Print key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  - {}: {}", key, value);
}
