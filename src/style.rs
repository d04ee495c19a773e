//! Color renderers: functions that wrap a piece of text in terminal color
//! control sequences.

use std::io;
use std::sync::Arc;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Wraps a span of text in color markers.
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A renderer that returns its input unchanged.
#[must_use]
pub fn identity() -> ColorFn {
    Arc::new(|text: &str| text.to_string())
}

/// A renderer that emits the ANSI sequence for `spec`, the text, then a reset.
#[must_use]
pub fn ansi(spec: &ColorSpec) -> ColorFn {
    let open = escape(|w| w.set_color(spec));
    let close = escape(|w| w.reset());
    if open.is_empty() {
        return identity();
    }
    Arc::new(move |text: &str| {
        let mut out = String::with_capacity(open.len() + text.len() + close.len());
        out.push_str(&open);
        out.push_str(text);
        out.push_str(&close);
        out
    })
}

/// Shorthand for a foreground-only [`ansi`] renderer.
#[must_use]
pub fn fg(color: Color) -> ColorFn {
    ansi(ColorSpec::new().set_fg(Some(color)))
}

fn escape(write: impl FnOnce(&mut Ansi<Vec<u8>>) -> io::Result<()>) -> String {
    let mut ansi = Ansi::new(Vec::new());
    match write(&mut ansi) {
        Ok(()) => String::from_utf8_lossy(&ansi.into_inner()).into_owned(),
        Err(err) => {
            log::warn!("failed to render color sequence: {err}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::strip_ansi;

    #[test]
    fn test_identity_is_a_no_op() {
        let f = identity();
        assert_eq!(f("(+ 1 2)"), "(+ 1 2)");
        assert_eq!(f(""), "");
    }

    #[test]
    fn test_fg_wraps_and_resets() {
        let f = fg(Color::Green);
        let out = f("\"hi\"");
        assert!(out.contains("\x1b[32m"));
        assert!(out.ends_with("\x1b[0m"));
        assert_eq!(strip_ansi(&out), "\"hi\"");
    }

    #[test]
    fn test_bold_spec_is_rendered() {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Ansi256(208))).set_bold(true);
        let out = ansi(&spec)("42");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[38;5;208m"));
        assert_eq!(strip_ansi(&out), "42");
    }
}
