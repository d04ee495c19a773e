//! Recognisers for each category.
//!
//! A [`Matcher`] answers one question: where is the leftmost occurrence of a
//! category in a piece of text? The highlighter does the rest.

use crate::category::Category;
use crate::tables;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Finds the leftmost occurrence of a category in `text`.
///
/// Ranges are byte offsets into `text`. Returning `None` is the normal way of
/// saying the category does not occur; it is not an error.
pub trait Matcher {
    fn find(&self, category: Category, text: &str) -> Option<Range<usize>>;
}

impl<F> Matcher for F
where
    F: Fn(Category, &str) -> Option<Range<usize>>,
{
    fn find(&self, category: Category, text: &str) -> Option<Range<usize>> {
        self(category, text)
    }
}

/// The built-in Clojure patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClojurePatterns;

impl Matcher for ClojurePatterns {
    fn find(&self, category: Category, text: &str) -> Option<Range<usize>> {
        let captures = PATTERNS[category.index()].captures(text)?;
        captures.get(1).map(|m| m.range())
    }
}

/// Characters that terminate a symbol.
const DELIMITERS: &str = r#"[\s,()\[\]{}";'`~@^]"#;

static PATTERNS: Lazy<[Regex; 17]> = Lazy::new(|| Category::ALL.map(compile));

fn compile(category: Category) -> Regex {
    let pattern = match category {
        Category::Regex => token(r#"#"(?:[^"\\]|\\.)*""#),
        Category::String => token(
            r#""(?:[^"\\]|\\.)*"|\\(?:newline|space|tab|formfeed|backspace|return|u[0-9a-fA-F]{4}|o[0-7]{1,3}|.)"#,
        ),
        Category::Comment => token(r"(?:;|#!)[^\n]*"),
        Category::Keyword => token(r#"::?[^\s,()\[\]{}";'`~@^\\:][^\s,()\[\]{}";'`~@^\\]*"#),
        Category::SExpression => token(r"#\{|[()\[\]{}]"),
        Category::Nil => symbol(&["nil"]),
        Category::Boolean => symbol(&["true", "false"]),
        Category::Number => bounded(
            r"##(?:Inf|-Inf|NaN)|[+-]?(?:0[xX][0-9a-fA-F]+N?|[0-9]+[rR][0-9a-zA-Z]+|[0-9]+/[0-9]+|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?[NM]?)",
        ),
        Category::Macro => symbol(tables::MACROS),
        Category::SpecialForm => symbol(tables::SPECIAL_FORMS),
        Category::ReaderChar => token(r"#\?@|#\?|#_|#'|#\^|#|~@|[~'`@^]"),
        Category::Definition => symbol(tables::DEFINITIONS),
        Category::CoreFn => symbol(tables::CORE_FNS),
        Category::Variable => symbol(tables::VARIABLES),
        Category::Conditional => symbol(tables::CONDITIONALS),
        Category::Repeat => symbol(tables::REPEATS),
        Category::Exception => symbol(tables::EXCEPTIONS),
    };
    Regex::new(&pattern).expect("Valid category regex")
}

fn token(inner: &str) -> String {
    format!("(?s)({inner})")
}

/// Wraps `inner` so it only matches a whole symbol: preceded by the start of
/// the text or a delimiter, followed by the end of the text or a delimiter.
fn bounded(inner: &str) -> String {
    format!("(?:^|{DELIMITERS})({inner})(?:$|{DELIMITERS})")
}

fn symbol(names: &[&str]) -> String {
    let mut names = names.to_vec();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternatives = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    bounded(&alternatives)
}
