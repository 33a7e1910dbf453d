/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// IN in green, OUT in red.
pub fn colorize_punch(value: &str, is_in: bool) -> String {
    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Green when inside a geofence, grey otherwise.
pub fn colorize_membership(inside: bool) -> String {
    if inside {
        format!("{GREEN}inside{RESET}")
    } else {
        format!("{GREY}outside{RESET}")
    }
}

/// Grey out placeholders such as "-" or "0h0m".
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "0h0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
