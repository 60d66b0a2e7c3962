//! Line numbers for the gutter beside the text area.

use std::fmt::Write;

/// Number of lines in `text`: line breaks plus one.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Render `1..=N` joined by newlines, where N is [`line_count`].
pub fn render(text: &str) -> String {
    let lines = line_count(text);
    let mut out = String::with_capacity(lines * (digits(lines) + 1));
    for n in 1..=lines {
        if n > 1 {
            out.push('\n');
        }
        let _ = write!(out, "{}", n);
    }
    out
}

/// Width in characters of the widest number in a gutter of `lines` lines.
pub fn digits(lines: usize) -> usize {
    let mut n = lines.max(1);
    let mut width = 0;
    while n > 0 {
        n /= 10;
        width += 1;
    }
    width
}
