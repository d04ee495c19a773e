//! Colorschemes loaded from JSON or YAML files.
//!
//! ```yaml
//! string: { fg: green }
//! comment: { fg: "244", italic: true }
//! number: { fg: "255,128,0", bold: true }
//! ```

use crate::category::Category;
use crate::colorscheme::{self, Colorscheme};
use crate::error::{ChromaError, ConfigError};
use crate::utils::offset_of;
use miette::NamedSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use termcolor::{Color, ColorSpec};

/// The style of one category, as written in a colorscheme file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub intense: bool,
    pub dimmed: bool,
}

impl StyleConfig {
    /// Builds the `ColorSpec` for this style. `category` is only used in errors.
    pub fn to_color_spec(&self, category: &str) -> Result<ColorSpec, ConfigError> {
        let mut spec = ColorSpec::new();
        spec.set_fg(parse_color(category, self.fg.as_deref())?)
            .set_bg(parse_color(category, self.bg.as_deref())?)
            .set_bold(self.bold)
            .set_italic(self.italic)
            .set_underline(self.underline)
            .set_intense(self.intense)
            .set_dimmed(self.dimmed);
        Ok(spec)
    }
}

fn parse_color(category: &str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    value
        .parse::<Color>()
        .map(Some)
        .map_err(|err| ConfigError::InvalidColor {
            category: category.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// A colorscheme file: category tags mapped to styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorschemeConfig {
    pub styles: BTreeMap<String, StyleConfig>,
}

impl ColorschemeConfig {
    /// Parses a JSON colorscheme. `name` labels the source in diagnostics.
    pub fn from_json(source: &str, name: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|err| {
            let offset = offset_of(source, err.line(), err.column());
            ConfigError::Json {
                src: NamedSource::new(name, source.to_string()),
                span: (offset, 0).into(),
                message: err.to_string(),
            }
        })
    }

    /// Parses a YAML colorscheme. `name` labels the source in diagnostics.
    pub fn from_yaml(source: &str, name: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|err| ConfigError::Yaml {
            span: err.location().map(|loc| (loc.index(), 0).into()),
            src: NamedSource::new(name, source.to_string()),
            message: err.to_string(),
        })
    }

    /// Builds a colorscheme holding exactly the listed categories. Every other
    /// category is left uncolored.
    pub fn to_colorscheme(&self) -> Result<Colorscheme, ConfigError> {
        let mut scheme = Colorscheme::empty();
        for (name, style) in &self.styles {
            let category: Category = name.parse()?;
            let spec = style.to_color_spec(name)?;
            scheme = scheme.with_style(category, &spec);
        }
        log::debug!("loaded colorscheme with {} categories", self.styles.len());
        Ok(scheme)
    }

    /// Builds a colorscheme from the default one with the listed categories
    /// replaced.
    pub fn merged_with_default(&self) -> Result<Colorscheme, ConfigError> {
        let mut scheme = colorscheme::default_colorscheme().clone();
        scheme.extend(&self.to_colorscheme()?);
        Ok(scheme)
    }
}

/// Reads a colorscheme file, choosing the format by extension.
pub fn load(path: &Path) -> Result<ColorschemeConfig, ChromaError> {
    let source = std::fs::read_to_string(path).map_err(|source| ChromaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ColorschemeConfig::from_json(&source, &name)?,
        Some("yaml" | "yml") => ColorschemeConfig::from_yaml(&source, &name)?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into())
        }
    };
    log::debug!("read colorscheme from {name}");
    Ok(config)
}
