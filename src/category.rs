use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The lexical categories the highlighter knows about.
///
/// Declaration order is the matching priority: a category earlier in this list
/// claims text before any category after it gets to look at it. The derived
/// `Ord` follows the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// A regex literal: `#"..."`.
    Regex,
    /// A string literal, or a character literal such as `\newline`.
    String,
    /// A line comment starting with `;`.
    Comment,
    /// A keyword such as `:name` or `::ns/name`.
    Keyword,
    /// An opening or closing bracket of a form.
    SExpression,
    /// The `nil` literal.
    Nil,
    /// `true` or `false`.
    Boolean,
    /// A numeric literal.
    Number,
    /// A name from the core macro table.
    Macro,
    /// A name from the special form table.
    SpecialForm,
    /// A reader macro character: `'`, `` ` ``, `~`, `@`, `^`, `#_`, ...
    ReaderChar,
    /// A defining form: `defn`, `defmacro`, `ns`, ...
    Definition,
    /// A name from the core function table.
    CoreFn,
    /// A dynamic var such as `*out*`.
    Variable,
    /// A conditional form: `cond`, `when`, `if-let`, ...
    Conditional,
    /// A looping form: `doseq`, `dotimes`, `for`, `while`.
    Repeat,
    /// An exception-handling form: `catch`, `finally`.
    Exception,
}

impl Category {
    /// Every category, highest priority first.
    pub const ALL: [Category; 17] = [
        Category::Regex,
        Category::String,
        Category::Comment,
        Category::Keyword,
        Category::SExpression,
        Category::Nil,
        Category::Boolean,
        Category::Number,
        Category::Macro,
        Category::SpecialForm,
        Category::ReaderChar,
        Category::Definition,
        Category::CoreFn,
        Category::Variable,
        Category::Conditional,
        Category::Repeat,
        Category::Exception,
    ];

    /// Position of this category in the priority order, `0` being the highest.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The category at `index` in the priority order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// The next lower-priority category, or `None` for the last one.
    #[must_use]
    pub fn next(self) -> Option<Category> {
        Self::from_index(self.index() + 1)
    }

    /// The kebab-case tag used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Regex => "regex",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Keyword => "keyword",
            Category::SExpression => "s-expression",
            Category::Nil => "nil",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::Macro => "macro",
            Category::SpecialForm => "special-form",
            Category::ReaderChar => "reader-char",
            Category::Definition => "definition",
            Category::CoreFn => "core-fn",
            Category::Variable => "variable",
            Category::Conditional => "conditional",
            Category::Repeat => "repeat",
            Category::Exception => "exception",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| ConfigError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn test_priority_order_matches_index() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(Category::ALL.len()), None);
    }

    #[test]
    fn test_ord_follows_priority() {
        assert!(Category::Regex < Category::String);
        assert!(Category::String < Category::Comment);
        assert!(Category::Number < Category::Macro);
        assert!(Category::Repeat < Category::Exception);
    }

    #[test]
    fn test_next_walks_the_chain() {
        assert_eq!(Category::Regex.next(), Some(Category::String));
        assert_eq!(Category::Number.next(), Some(Category::Macro));
        assert_eq!(Category::Exception.next(), None);
    }

    #[test]
    fn test_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!("operator".parse::<Category>().is_err());
        assert!("S-Expression".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::SpecialForm).unwrap();
        assert_eq!(json, "\"special-form\"");
        let parsed: Category = serde_json::from_str("\"core-fn\"").unwrap();
        assert_eq!(parsed, Category::CoreFn);
    }
}
