//! ANSI escape sequences for terminal output

pub const RESET: &str = "\x1b[0m";

pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const WHITE: &str = "\x1b[37m";
pub const GREEN: &str = "\x1b[32m";

/// Wraps `text` in the given sequences, or returns it as is when color is off
pub fn paint(text: &str, codes: &[&str], color: bool) -> String {
    if !color || codes.is_empty() {
        return text.to_string();
    }
    format!("{}{}{}", codes.concat(), text, RESET)
}
