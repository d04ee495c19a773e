use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for everything outside the highlighting core.
///
/// Highlighting itself is total and never fails; only loading a colorscheme
/// and the command-line surface produce errors.
#[derive(Error, Debug, Diagnostic)]
pub enum ChromaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(chroma::io), help("Check that the file exists and is readable."))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ConfigError {
    #[error("Invalid JSON colorscheme: {message}")]
    #[diagnostic(
        code(config::json),
        help("A colorscheme is an object mapping category names to style objects.")
    )]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("Invalid YAML colorscheme: {message}")]
    #[diagnostic(
        code(config::yaml),
        help("A colorscheme is a mapping from category names to style mappings.")
    )]
    Yaml {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("Unknown category `{name}`")]
    #[diagnostic(
        code(config::unknown_category),
        help("Valid categories are: regex, string, comment, keyword, s-expression, nil, boolean, number, macro, special-form, reader-char, definition, core-fn, variable, conditional, repeat, exception.")
    )]
    UnknownCategory { name: String },

    #[error("Invalid color `{value}` for category `{category}`: {reason}")]
    #[diagnostic(
        code(config::invalid_color),
        help("Use a color name (red, green, ...), an ANSI-256 index (0-255) or an `r,g,b` triple.")
    )]
    InvalidColor {
        category: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported colorscheme format: {}", path.display())]
    #[diagnostic(
        code(config::unsupported_format),
        help("Colorschemes must have a .json, .yaml or .yml extension.")
    )]
    UnsupportedFormat { path: PathBuf },
}
