//! YAML configuration files

use std::io::Write;

use depgraph_parser::{parse, ConfigError, ParseOptions, Preset};
use pretty_assertions::assert_eq;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_drives_parse() {
    let file = write_config("version: 1\npreset: strict\noptions:\n  require_async: false\n");
    let options = ParseOptions::from_yaml(file.path().to_str().unwrap()).unwrap();

    assert_eq!(
        options,
        ParseOptions::preset(Preset::Strict).require_async(false)
    );
    assert!(parse("a.js", "require();", &options).is_err());
    assert!(parse("a.js", "require.async();", &options).unwrap().is_empty());
}

#[test]
fn test_exported_config_reloads() {
    let options = ParseOptions::preset(Preset::Lenient).comment_require(false);
    let file = write_config(&options.to_yaml().unwrap());

    let reloaded = ParseOptions::from_yaml(file.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded, options);
}

#[test]
fn test_missing_config_file() {
    let err = ParseOptions::from_yaml("/no/such/depgraph.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "{err:?}");
}

#[test]
fn test_unknown_option_rejected() {
    let file = write_config("version: 1\noptions:\n  require_everything: true\n");
    let err = ParseOptions::from_yaml(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)), "{err:?}");
}
