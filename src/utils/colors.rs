/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const BOLD: &str = "\x1b[1m";

/// Grey for zero durations (`00:00`), red for negative ones (`-01:30`),
/// unchanged otherwise.
pub fn colorize_duration(value: &str) -> String {
    let v = value.trim();
    if v.starts_with('-') {
        format!("{RED}{value}{RESET}")
    } else if v == "00:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn bold(value: &str) -> String {
    format!("{BOLD}{value}{RESET}")
}
