//! Configuration discovery and its effect on ordering.

use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tailsort::{Error, FormatOptions, Formatter};
use tempfile::TempDir;

const LINE_CLAMP_TOML: &str = indoc! {r#"
    [theme.extend.colors]
    tomato = "tomato"

    [[plugins]]
    name = "line-clamp"
    classes = ["line-clamp-none"]

    [[plugins.utilities]]
    root = "line-clamp"
    values = ["1", "2", "3"]
"#};

const LINE_CLAMP_JSON: &str = indoc! {r#"
    {
      "theme": { "extend": { "colors": { "tomato": "tomato" } } },
      "plugins": [
        {
          "name": "line-clamp",
          "classes": ["line-clamp-none"],
          "utilities": [{ "root": "line-clamp", "values": ["1", "2", "3"] }]
        }
      ]
    }
"#};

const PLUGIN_INPUT: &str = r#"<div class="sm:line-clamp-2 line-clamp-1 uppercase"></div>"#;
const PLUGIN_OUTPUT: &str = r#"<div class="uppercase line-clamp-1 sm:line-clamp-2"></div>"#;
const COLOR_INPUT: &str = r#"<div class="sm:bg-tomato bg-red-500"></div>"#;
const COLOR_OUTPUT: &str = r#"<div class="bg-red-500 sm:bg-tomato"></div>"#;

fn write(root: &Path, relative: &str, contents: &str) -> std::path::PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn format(formatter: &Formatter, source: &str, file: &Path) -> String {
    formatter.format_source(source, "html", file).unwrap()
}

#[test]
fn test_inferred_toml_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tailwind.config.toml", LINE_CLAMP_TOML);
    let file = dir.path().join("src/pages/index.html");

    let formatter = Formatter::default();
    assert_eq!(format(&formatter, PLUGIN_INPUT, &file), PLUGIN_OUTPUT);
    assert_eq!(format(&formatter, COLOR_INPUT, &file), COLOR_OUTPUT);
}

#[test]
fn test_inferred_json_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tailwind.config.json", LINE_CLAMP_JSON);
    let file = dir.path().join("index.html");

    let formatter = Formatter::default();
    assert_eq!(format(&formatter, PLUGIN_INPUT, &file), PLUGIN_OUTPUT);
    assert_eq!(format(&formatter, COLOR_INPUT, &file), COLOR_OUTPUT);
}

#[test]
fn test_toml_wins_over_json_in_the_same_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tailwind.config.toml", LINE_CLAMP_TOML);
    write(dir.path(), "tailwind.config.json", "{ \"prefix\": \"tw-\" }");

    let formatter = Formatter::default();
    assert_eq!(
        format(&formatter, PLUGIN_INPUT, &dir.path().join("index.html")),
        PLUGIN_OUTPUT
    );
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "configs/custom.toml", LINE_CLAMP_TOML);
    let file = dir.path().join("app/index.html");

    let formatter = Formatter::new(FormatOptions {
        tailwind_config: Some(config),
    });
    assert_eq!(format(&formatter, PLUGIN_INPUT, &file), PLUGIN_OUTPUT);
}

#[test]
fn test_without_config_plugin_classes_keep_their_order() {
    let dir = TempDir::new().unwrap();
    let formatter = Formatter::default();
    assert_eq!(
        format(&formatter, PLUGIN_INPUT, &dir.path().join("index.html")),
        r#"<div class="sm:line-clamp-2 line-clamp-1 uppercase"></div>"#
    );
}

#[test]
fn test_nearest_config_governs_each_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tailwind.config.toml", "");
    write(dir.path(), "plugin/tailwind.config.toml", LINE_CLAMP_TOML);

    let formatter = Formatter::default();
    assert_eq!(
        format(&formatter, PLUGIN_INPUT, &dir.path().join("plugin/a.html")),
        PLUGIN_OUTPUT
    );
    assert_ne!(
        format(&formatter, PLUGIN_INPUT, &dir.path().join("site/a.html")),
        PLUGIN_OUTPUT
    );
    assert_eq!(formatter.cache().resolutions(), 2);
}

#[test]
fn test_broken_inferred_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "tailwind.config.toml", "prefix = ");

    let err = Formatter::default()
        .format_source(PLUGIN_INPUT, "html", &dir.path().join("index.html"))
        .unwrap_err();
    match err {
        Error::ConfigParse { path, .. } => assert_eq!(path, config),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let formatter = Formatter::new(FormatOptions {
        tailwind_config: Some(dir.path().join("nope.toml")),
    });
    let err = formatter
        .format_source(PLUGIN_INPUT, "html", &dir.path().join("index.html"))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
    assert!(err.is_user_fixable());
}
