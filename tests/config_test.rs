// Colorscheme loading from disk, including the error paths.
use clj_chroma::config::load;
use clj_chroma::error::{ChromaError, ConfigError};
use clj_chroma::{highlight_with, Category};
use std::io::Write;
use tempfile::NamedTempFile;

fn scheme_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml() {
    let file = scheme_file(".yaml", "string: { fg: green }\nnil: { fg: red, bold: true }\n");
    let scheme = load(file.path()).unwrap().to_colorscheme().unwrap();
    assert!(scheme.contains(Category::String));
    assert!(scheme.contains(Category::Nil));
    assert!(!scheme.contains(Category::Number));
}

#[test]
fn test_load_yml_extension() {
    let file = scheme_file(".yml", "number: { fg: \"208\" }\n");
    assert!(load(file.path()).is_ok());
}

#[test]
fn test_load_json() {
    let file = scheme_file(".json", r#"{"keyword": {"fg": "blue", "intense": true}}"#);
    let scheme = load(file.path()).unwrap().to_colorscheme().unwrap();
    assert_eq!(scheme.categories().collect::<Vec<_>>(), vec![Category::Keyword]);
}

#[test]
fn test_loaded_scheme_leaves_other_categories_plain() {
    let file = scheme_file(".yaml", "number: { fg: red }\n");
    let scheme = load(file.path()).unwrap().to_colorscheme().unwrap();
    let out = highlight_with("(str \"s\" 1)", &scheme);
    assert!(out.starts_with("(str \"s\" "));
    assert_ne!(out, "(str \"s\" 1)");
}

#[test]
fn test_unsupported_extension() {
    let file = scheme_file(".toml", "string = 'green'");
    match load(file.path()) {
        Err(ChromaError::Config(ConfigError::UnsupportedFormat { .. })) => {}
        other => panic!("Expected unsupported format error, got {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    match load(std::path::Path::new("/definitely/not/here.yaml")) {
        Err(ChromaError::Io { .. }) => {}
        other => panic!("Expected io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json() {
    let file = scheme_file(".json", "{ \"string\": ");
    match load(file.path()) {
        Err(ChromaError::Config(ConfigError::Json { .. })) => {}
        other => panic!("Expected JSON error, got {other:?}"),
    }
}

#[test]
fn test_malformed_yaml() {
    let file = scheme_file(".yaml", "string: [unclosed\n");
    match load(file.path()) {
        Err(ChromaError::Config(ConfigError::Yaml { .. })) => {}
        other => panic!("Expected YAML error, got {other:?}"),
    }
}

#[test]
fn test_errors_render_as_diagnostics() {
    let file = scheme_file(".json", "{ \"string\": ");
    let err = load(file.path()).unwrap_err();
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("config::json"));
}
