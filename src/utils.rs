use once_cell::sync::Lazy;
use regex::Regex;

static SGR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Valid SGR sequence regex"));

/// Removes every ANSI SGR (color/style) sequence from `text`.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    SGR.replace_all(text, "").into_owned()
}

/// Converts a 1-based line and column into a byte offset into `source`.
/// Columns are counted in characters. Positions past the end of a line or of
/// the source are clamped, so the result is always a valid char boundary.
pub fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    let mut line_start = 0;
    if line > 1 {
        for (i, c) in source.char_indices() {
            if c == '\n' {
                current_line += 1;
                if current_line == line {
                    line_start = i + 1;
                    break;
                }
            }
        }
        if current_line < line {
            return source.len();
        }
    }

    let line_text = &source[line_start..];
    let line_end = line_text.find('\n').unwrap_or(line_text.len());
    let skip = column.saturating_sub(1);
    let within = line_text[..line_end]
        .char_indices()
        .nth(skip)
        .map_or(line_end, |(i, _)| i);
    line_start + within
}
