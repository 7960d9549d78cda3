//! Colored console output for the CLI. The core modules never print.
use colored::Colorize;

pub fn info(msg: impl AsRef<str>) {
    println!("{} {}", "ℹ".cyan(), msg.as_ref());
}

pub fn success(msg: impl AsRef<str>) {
    println!("{} {}", "✔".green(), msg.as_ref());
}

pub fn step(msg: impl AsRef<str>) {
    println!("{} {}", "→".blue(), msg.as_ref());
}

pub fn warn(msg: impl AsRef<str>) {
    println!("{} {}", "⚠".yellow(), msg.as_ref());
}

pub fn error(msg: impl AsRef<str>) {
    eprintln!("{} {}", "✖".red(), msg.as_ref());
}

/// Only printed with `--verbose`.
pub fn debug(msg: impl AsRef<str>, verbose: bool) {
    if verbose {
        println!("{} {}", "[debug]".dimmed(), msg.as_ref());
    }
}
