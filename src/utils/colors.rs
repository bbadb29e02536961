//! ANSI color helper utilities for terminal output.
use crate::models::session_status::SessionStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// working → green
/// on break → yellow
/// clocked out → grey
pub fn color_for_status(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Working => GREEN,
        SessionStatus::OnBreak => YELLOW,
        SessionStatus::ClockedOut => GREY,
    }
}

/// Returns the value wrapped in GREY when it is empty or "--", unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: SessionStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
