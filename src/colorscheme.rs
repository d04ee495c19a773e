use crate::category::Category;
use crate::style::{self, ColorFn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Debug;
use termcolor::{Color, ColorSpec};

/// Maps categories to the renderer used to color their spans.
///
/// A category without an entry is rendered with the identity function. A
/// colorscheme handed to [`resolve`] replaces the default one entirely; it is
/// never merged with it.
#[derive(Clone, Default)]
pub struct Colorscheme {
    entries: HashMap<Category, ColorFn>,
}

static DEFAULT_COLORSCHEME: Lazy<Colorscheme> = Lazy::new(Colorscheme::ansi_default);

/// The built-in ANSI colorscheme.
#[must_use]
pub fn default_colorscheme() -> &'static Colorscheme {
    &DEFAULT_COLORSCHEME
}

/// Picks the colorscheme for one highlighting call: the override when given,
/// otherwise the default.
#[must_use]
pub fn resolve(colorscheme: Option<&Colorscheme>) -> &Colorscheme {
    colorscheme.unwrap_or_else(|| default_colorscheme())
}

impl Colorscheme {
    /// A colorscheme that colors nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn ansi_default() -> Self {
        let mut scheme = Self::empty();
        for category in Category::ALL {
            scheme.set(category, style::ansi(&default_style(category)));
        }
        scheme
    }

    /// Builder form of [`Colorscheme::set`].
    #[must_use]
    pub fn with(mut self, category: Category, color: ColorFn) -> Self {
        self.set(category, color);
        self
    }

    /// Builder that registers an ANSI renderer for `spec`.
    #[must_use]
    pub fn with_style(self, category: Category, spec: &ColorSpec) -> Self {
        self.with(category, style::ansi(spec))
    }

    pub fn set(&mut self, category: Category, color: ColorFn) {
        self.entries.insert(category, color);
    }

    pub fn remove(&mut self, category: Category) -> Option<ColorFn> {
        self.entries.remove(&category)
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Categories that have a renderer, in priority order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Copies every entry of `other` over this colorscheme.
    pub fn extend(&mut self, other: &Colorscheme) {
        for (category, color) in &other.entries {
            self.entries.insert(*category, color.clone());
        }
    }

    /// Wraps `text` with the renderer registered for `category`.
    #[must_use]
    pub fn colorize(&self, text: &str, category: Category) -> String {
        match self.entries.get(&category) {
            Some(color) => color(text),
            None => text.to_string(),
        }
    }

    /// Like [`Colorscheme::colorize`], keyed by category tag. Unknown tags
    /// leave the text unchanged.
    #[must_use]
    pub fn colorize_named(&self, text: &str, name: &str) -> String {
        match name.parse::<Category>() {
            Ok(category) => self.colorize(text, category),
            Err(_) => text.to_string(),
        }
    }
}

impl Debug for Colorscheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.categories()).finish()
    }
}

fn default_style(category: Category) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match category {
        Category::Regex => spec.set_fg(Some(Color::Magenta)).set_intense(true),
        Category::String => spec.set_fg(Some(Color::Green)),
        Category::Comment => spec.set_fg(Some(Color::Ansi256(244))).set_italic(true),
        Category::Keyword => spec.set_fg(Some(Color::Blue)).set_intense(true),
        Category::SExpression => spec.set_fg(Some(Color::Ansi256(246))),
        Category::Nil => spec.set_fg(Some(Color::Red)),
        Category::Boolean => spec.set_fg(Some(Color::Red)).set_intense(true),
        Category::Number => spec.set_fg(Some(Color::Ansi256(208))),
        Category::Macro => spec.set_fg(Some(Color::Cyan)),
        Category::SpecialForm => spec.set_fg(Some(Color::Magenta)).set_bold(true),
        Category::ReaderChar => spec.set_fg(Some(Color::Yellow)),
        Category::Definition => spec.set_fg(Some(Color::Blue)).set_bold(true),
        Category::CoreFn => spec.set_fg(Some(Color::Cyan)).set_intense(true),
        Category::Variable => spec.set_fg(Some(Color::Yellow)).set_intense(true),
        Category::Conditional => spec.set_fg(Some(Color::Magenta)),
        Category::Repeat => spec.set_fg(Some(Color::Magenta)),
        Category::Exception => spec.set_fg(Some(Color::Red)).set_bold(true),
    };
    spec
}
