//! The precedence chain.
//!
//! Categories are tried in priority order. When a category matches, its span is
//! claimed and colored as a unit, and the text on either side is searched again
//! for the same category. When a category does not occur in a fragment, the
//! fragment moves on to the next category and never comes back: a substring of
//! a fragment without category `i` cannot contain category `i` either.
//!
//! The chain runs on an explicit work stack, so the depth of the native call
//! stack does not depend on the number of matches in the input.

use crate::category::Category;
use crate::colorscheme::{self, Colorscheme};
use crate::matcher::{ClojurePatterns, Matcher};
use std::ops::Range;

/// One segment of classified source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range into the source.
    pub range: Range<usize>,
    /// The category that claimed the range, `None` for unclaimed text.
    pub category: Option<Category>,
}

impl Span {
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

enum Task {
    Scan { range: Range<usize>, category: Category },
    Claim(Range<usize>, Category),
}

/// Runs the precedence chain with a [`Matcher`] and an optional colorscheme.
///
/// Without a colorscheme the default one is used. A colorscheme given here
/// replaces the default for every category; categories it leaves out are not
/// colored.
#[derive(Debug, Clone, Default)]
pub struct Highlighter<M = ClojurePatterns> {
    matcher: M,
    colorscheme: Option<Colorscheme>,
}

impl Highlighter<ClojurePatterns> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: Matcher> Highlighter<M> {
    /// A highlighter that recognises categories with `matcher`.
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            colorscheme: None,
        }
    }

    #[must_use]
    pub fn with_colorscheme(mut self, colorscheme: Colorscheme) -> Self {
        self.colorscheme = Some(colorscheme);
        self
    }

    /// The colorscheme `highlight` renders with.
    pub fn colorscheme(&self) -> &Colorscheme {
        colorscheme::resolve(self.colorscheme.as_ref())
    }

    /// Colors `source` with this highlighter's colorscheme.
    pub fn highlight(&self, source: &str) -> String {
        self.highlight_with(source, self.colorscheme())
    }

    /// Colors `source` with `colorscheme`, ignoring the one configured on the
    /// highlighter.
    pub fn highlight_with(&self, source: &str, colorscheme: &Colorscheme) -> String {
        let spans = self.classify(source);
        log::debug!(
            "highlighting {} bytes: {} spans, {} claimed",
            source.len(),
            spans.len(),
            spans.iter().filter(|s| s.category.is_some()).count()
        );
        render(source, &spans, colorscheme)
    }

    /// Splits `source` into spans, in source order. The spans cover the whole
    /// input without gaps or overlaps, and adjacent unclaimed text is merged.
    pub fn classify(&self, source: &str) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        let mut stack = vec![Task::Scan {
            range: 0..source.len(),
            category: Category::ALL[0],
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Claim(range, category) => {
                    log::trace!("{category} claims {range:?}");
                    spans.push(Span {
                        range,
                        category: Some(category),
                    });
                }
                Task::Scan { range, category } => {
                    if range.is_empty() {
                        continue;
                    }
                    match self.find(category, &source[range.clone()]) {
                        Some(found) => {
                            let start = range.start + found.start;
                            let end = range.start + found.end;
                            // Popped in reverse: prefix, claimed span, suffix.
                            stack.push(Task::Scan {
                                range: end..range.end,
                                category,
                            });
                            stack.push(Task::Claim(start..end, category));
                            stack.push(Task::Scan {
                                range: range.start..start,
                                category,
                            });
                        }
                        None => match category.next() {
                            Some(next) => stack.push(Task::Scan {
                                range,
                                category: next,
                            }),
                            None => push_unclaimed(&mut spans, range),
                        },
                    }
                }
            }
        }
        spans
    }

    /// Asks the matcher for `category`, discarding ranges that would make the
    /// chain loop forever or slice through a character.
    fn find(&self, category: Category, fragment: &str) -> Option<Range<usize>> {
        let found = self.matcher.find(category, fragment)?;
        let valid = found.start < found.end
            && found.end <= fragment.len()
            && fragment.is_char_boundary(found.start)
            && fragment.is_char_boundary(found.end);
        if !valid {
            log::warn!(
                "ignoring {category} match {found:?} in a fragment of {} bytes",
                fragment.len()
            );
            return None;
        }
        Some(found)
    }
}

fn push_unclaimed(spans: &mut Vec<Span>, range: Range<usize>) {
    if let Some(last) = spans.last_mut() {
        if last.category.is_none() && last.range.end == range.start {
            last.range.end = range.end;
            return;
        }
    }
    spans.push(Span {
        range,
        category: None,
    });
}

/// Concatenates `spans`, coloring every claimed one with `colorscheme`.
pub fn render(source: &str, spans: &[Span], colorscheme: &Colorscheme) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for span in spans {
        let text = span.text(source);
        match span.category {
            Some(category) => out.push_str(&colorscheme.colorize(text, category)),
            None => out.push_str(text),
        }
    }
    out
}

/// Colors Clojure `source` with the default colorscheme.
#[must_use]
pub fn highlight(source: &str) -> String {
    Highlighter::new().highlight(source)
}

/// Colors Clojure `source` with `colorscheme` in place of the default one.
#[must_use]
pub fn highlight_with(source: &str, colorscheme: &Colorscheme) -> String {
    Highlighter::new().highlight_with(source, colorscheme)
}
