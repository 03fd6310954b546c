use terminal_size::{Width, terminal_size};

/// Get the current terminal width, defaulting to 80 if unable to detect
pub fn terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        80
    }
}

/// Horizontal rule sized to the terminal, capped at 120 columns
pub fn separator(width: usize) -> String {
    "─".repeat(width.min(120))
}

/// First `max_lines` non-blank lines of an entry body, and whether more
/// content was cut off
pub fn preview_lines(text: &str, max_lines: usize) -> (Vec<&str>, bool) {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let shown: Vec<&str> = lines.by_ref().take(max_lines).collect();
    let truncated = lines.next().is_some();
    (shown, truncated)
}

/// Shorten a line to `width` characters, marking the cut with an ellipsis
pub fn clip(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let kept: String = line.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
