//! Parse options
//!
//! The five switches that govern which dependency forms are recognized and
//! whether misuse of a recognized call is an error or silently tolerated.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, ParseOptionsOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;

/// Options for a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Scan comments for `@require(...)` style annotation tags
    pub comment_require: bool,

    /// Recognize `require.resolve(...)`, in code and in comments
    pub require_resolve: bool,

    /// Recognize `require.async(...)`, in code and in comments
    pub require_async: bool,

    /// Arity misuse (`require()`, `require('a', 'b')`) fails the parse
    pub check_require_length: bool,

    /// Non-literal arguments (`require(name)`) are skipped instead of failing the parse
    pub allow_non_literal_require: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Preset::default().options()
    }
}

impl ParseOptions {
    pub fn preset(preset: Preset) -> Self {
        preset.options()
    }

    pub fn comment_require(mut self, enabled: bool) -> Self {
        self.comment_require = enabled;
        self
    }

    pub fn require_resolve(mut self, enabled: bool) -> Self {
        self.require_resolve = enabled;
        self
    }

    pub fn require_async(mut self, enabled: bool) -> Self {
        self.require_async = enabled;
        self
    }

    pub fn check_require_length(mut self, enabled: bool) -> Self {
        self.check_require_length = enabled;
        self
    }

    pub fn allow_non_literal_require(mut self, enabled: bool) -> Self {
        self.allow_non_literal_require = enabled;
        self
    }

    /// Load options from a YAML file
    ///
    /// ```yaml
    /// version: 1
    /// preset: strict
    /// options:
    ///   require_async: false
    /// ```
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match file.preset {
            Some(name) => Preset::from_str(&name).map_err(|_| ConfigError::UnknownPreset(name))?,
            None => Preset::default(),
        };

        let options = preset.options();
        Ok(match file.options {
            Some(overrides) => overrides.apply(options),
            None => options,
        })
    }

    /// Export as a version 1 YAML document with every option spelled out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            preset: None,
            options: Some(ParseOptionsOverrides::from(*self)),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}
