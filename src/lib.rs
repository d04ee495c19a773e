pub mod category;
pub mod cli;
pub mod colorscheme;
pub mod config;
pub mod error;
pub mod highlighter;
pub mod matcher;
pub mod style;
pub mod tables;
pub mod utils;

pub use category::Category;
pub use colorscheme::Colorscheme;
pub use highlighter::{highlight, highlight_with, Highlighter, Span};
pub use matcher::{ClojurePatterns, Matcher};
