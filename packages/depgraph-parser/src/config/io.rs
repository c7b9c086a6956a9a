//! Configuration I/O (YAML schema types)

use serde::{Deserialize, Serialize};

use super::parse_options::ParseOptions;

/// Schema versions `ParseOptions::from_yaml` accepts
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Per-option overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ParseOptionsOverrides>,
}

/// Partial `ParseOptions`: only the fields that are set override the base
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseOptionsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_require: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resolve: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_async: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_require_length: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_non_literal_require: Option<bool>,
}

impl ParseOptionsOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, base: ParseOptions) -> ParseOptions {
        ParseOptions {
            comment_require: self.comment_require.unwrap_or(base.comment_require),
            require_resolve: self.require_resolve.unwrap_or(base.require_resolve),
            require_async: self.require_async.unwrap_or(base.require_async),
            check_require_length: self
                .check_require_length
                .unwrap_or(base.check_require_length),
            allow_non_literal_require: self
                .allow_non_literal_require
                .unwrap_or(base.allow_non_literal_require),
        }
    }
}

impl From<ParseOptions> for ParseOptionsOverrides {
    fn from(options: ParseOptions) -> Self {
        Self {
            comment_require: Some(options.comment_require),
            require_resolve: Some(options.require_resolve),
            require_async: Some(options.require_async),
            check_require_length: Some(options.check_require_length),
            allow_non_literal_require: Some(options.allow_non_literal_require),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = Preset::Strict.options();
        let overrides = ParseOptionsOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(base), base);
    }

    #[test]
    fn test_overrides_only_touch_set_fields() {
        let overrides = ParseOptionsOverrides {
            allow_non_literal_require: Some(true),
            ..Default::default()
        };
        let applied = overrides.apply(Preset::Strict.options());
        assert!(applied.allow_non_literal_require);
        assert!(applied.check_require_length);
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let yaml_content = r#"
version: 1
preset: minimal
options:
  comment_require: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();
        let path = temp_file.path().to_str().unwrap();

        let options = ParseOptions::from_yaml(path).unwrap();
        assert!(options.comment_require);
        assert!(!options.require_resolve);
    }

    #[test]
    fn test_yaml_unknown_override_rejected() {
        let yaml = "version: 1\noptions:\n  strict_mode: true\n";
        assert!(ParseOptions::from_yaml_str(yaml).is_err());
    }
}
