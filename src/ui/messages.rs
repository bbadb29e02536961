//! User-facing console messages on stdout, with icons and colours.
//!
//! Diagnostics go through `tracing`; these are for the person at the terminal.

use std::fmt;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{FG_GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{FG_YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// Rewrite the current terminal line in place (live status display).
pub fn status_line<T: fmt::Display>(msg: T) {
    print!("\r\x1b[2K{msg}");
    io::stdout().flush().ok();
}
