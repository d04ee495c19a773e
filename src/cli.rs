//! Command-line surface of the `clj-chroma` binary.

use crate::colorscheme::{default_colorscheme, Colorscheme};
use crate::config;
use crate::error::ChromaError;
use crate::highlighter::Highlighter;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "clj-chroma",
    version,
    about = "Prints Clojure source with ANSI syntax highlighting."
)]
pub struct ChromaArgs {
    /// The Clojure file to highlight. Reads stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// A JSON or YAML colorscheme. Categories it does not list stay uncolored.
    #[arg(long, value_name = "PATH")]
    pub colorscheme: Option<PathBuf>,

    /// Fill categories missing from --colorscheme with the default colors.
    #[arg(long, requires = "colorscheme")]
    pub merge: bool,

    /// When to emit color.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}

impl ChromaArgs {
    /// Resolves the colorscheme these arguments ask for.
    pub fn colorscheme(&self) -> Result<Colorscheme, ChromaError> {
        if !self.color.enabled() {
            return Ok(Colorscheme::empty());
        }
        let Some(path) = &self.colorscheme else {
            return Ok(default_colorscheme().clone());
        };
        let config = config::load(path)?;
        let scheme = if self.merge {
            config.merged_with_default()?
        } else {
            config.to_colorscheme()?
        };
        Ok(scheme)
    }

    /// Reads the source text from the file argument or stdin.
    pub fn read_source(&self) -> Result<String, ChromaError> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read_to_string(path).map_err(|source| ChromaError::Io {
                    path: path.clone(),
                    source,
                })
            }
            _ => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .map_err(|source| ChromaError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(source)
            }
        }
    }
}

/// Highlights the requested input and returns the rendered text.
pub fn run(args: &ChromaArgs) -> Result<String, ChromaError> {
    let highlighter = Highlighter::new().with_colorscheme(args.colorscheme()?);
    let source = args.read_source()?;
    Ok(highlighter.highlight(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use std::io::Write;

    fn args(argv: &[&str]) -> ChromaArgs {
        ChromaArgs::try_parse_from(std::iter::once("clj-chroma").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&[]);
        assert_eq!(parsed.file, None);
        assert_eq!(parsed.color, ColorMode::Auto);
        assert!(!parsed.merge);
    }

    #[test]
    fn test_merge_requires_colorscheme() {
        assert!(ChromaArgs::try_parse_from(["clj-chroma", "--merge"]).is_err());
    }

    #[test]
    fn test_never_disables_color() {
        let scheme = args(&["--color", "never"]).colorscheme().unwrap();
        assert_eq!(scheme.categories().count(), 0);
    }

    #[test]
    fn test_always_uses_default() {
        let scheme = args(&["--color", "always"]).colorscheme().unwrap();
        assert_eq!(scheme.categories().count(), Category::ALL.len());
    }

    #[test]
    fn test_run_on_file() {
        let mut file = tempfile::Builder::new().suffix(".clj").tempfile().unwrap();
        write!(file, "(inc 1)").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let out = run(&args(&["--color", "never", path.as_str()])).unwrap();
        assert_eq!(out, "(inc 1)");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = run(&args(&["--color", "never", "/no/such/file.clj"]));
        assert!(matches!(result, Err(ChromaError::Io { .. })));
    }
}
