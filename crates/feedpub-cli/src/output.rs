//! Output formatting helpers.

use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a follow-up hint under an error.
pub fn hint(msg: &str) {
    eprintln!("  {}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print an error line followed by its hints.
pub fn report(msg: &str, hints: &[String]) {
    error(msg);
    for line in hints {
        hint(line);
    }
}
