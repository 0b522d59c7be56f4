use std::fs;
use tempfile::TempDir;
use tintlog::{ColorConsole, ColorMode, Config, Error, PayloadStyle};

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.diagnostics);
    assert_eq!(config.parse_color_mode(), ColorMode::Auto);
    assert_eq!(config.parse_payload_style(), PayloadStyle::Pretty { indent: 2 });
}

#[test]
fn empty_file_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.terminal.colors, "auto");
    assert_eq!(config.payload.indent, 2);
}

#[test]
fn parses_all_sections() {
    let config = Config::parse(
        r#"
[general]
diagnostics = true

[terminal]
colors = "never"

[payload]
style = "pretty"
indent = 4
"#,
    )
    .unwrap();

    assert!(config.general.diagnostics);
    assert_eq!(config.parse_color_mode(), ColorMode::Never);
    assert_eq!(config.parse_payload_style(), PayloadStyle::Pretty { indent: 4 });
}

#[test]
fn compact_style_and_color_aliases() {
    let config = Config::parse(
        r#"
[terminal]
colors = "Always"

[payload]
style = "compact"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_color_mode(), ColorMode::Always);
    assert_eq!(config.parse_payload_style(), PayloadStyle::Compact);
}

#[test]
fn unknown_values_fall_back() {
    let config = Config::parse(
        r#"
[terminal]
colors = "rainbow"

[payload]
style = "yaml"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_color_mode(), ColorMode::Auto);
    assert_eq!(config.parse_payload_style(), PayloadStyle::Pretty { indent: 2 });
}

#[test]
fn invalid_toml_is_an_error() {
    let result = Config::parse("[terminal\ncolors = ");
    assert!(matches!(result, Err(Error::ConfigParse(_))));

    let result = Config::parse("[payload]\nindent = \"two\"");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[terminal]\ncolors = \"never\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_color_mode(), ColorMode::Never);
}

#[test]
fn load_from_missing_file_is_default() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("missing.toml")).unwrap();
    assert_eq!(config.terminal.colors, "auto");
}

#[test]
fn console_from_config() {
    let config = Config::parse("[terminal]\ncolors = \"always\"\n[payload]\nstyle = \"compact\"\n")
        .unwrap();
    let console = ColorConsole::from_config(&config);
    assert_eq!(console.color_mode(), ColorMode::Always);
    assert_eq!(console.payload_style(), PayloadStyle::Compact);
}

#[test]
fn config_path_ends_with_file_name() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("config.toml"));
    }
}
