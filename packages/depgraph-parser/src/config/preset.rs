//! Preset configurations
//!
//! Presets provide complete option sets for common use cases.

use super::parse_options::ParseOptions;
use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every dependency form recognized, every misuse is an error
    Strict,

    /// Every dependency form recognized; arity misuse is tolerated,
    /// non-literal arguments are errors
    Standard,

    /// Every dependency form recognized, nothing is an error
    Lenient,

    /// Plain `require('x')` calls in code only
    Minimal,
}

impl Preset {
    /// Complete option set for this preset
    pub fn options(&self) -> ParseOptions {
        match self {
            Self::Strict => ParseOptions {
                comment_require: true,
                require_resolve: true,
                require_async: true,
                check_require_length: true,
                allow_non_literal_require: false,
            },
            Self::Standard => ParseOptions {
                comment_require: true,
                require_resolve: true,
                require_async: true,
                check_require_length: false,
                allow_non_literal_require: false,
            },
            Self::Lenient => ParseOptions {
                comment_require: true,
                require_resolve: true,
                require_async: true,
                check_require_length: false,
                allow_non_literal_require: true,
            },
            Self::Minimal => ParseOptions {
                comment_require: false,
                require_resolve: false,
                require_async: false,
                check_require_length: false,
                allow_non_literal_require: false,
            },
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "standard" => Ok(Self::Standard),
            "lenient" => Ok(Self::Lenient),
            "minimal" => Ok(Self::Minimal),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: strict, standard, lenient, minimal",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Standard => "standard",
            Self::Lenient => "lenient",
            Self::Minimal => "minimal",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Standard
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("strict").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("STRICT").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("standard").unwrap(), Preset::Standard);
        assert_eq!(Preset::from_str("lenient").unwrap(), Preset::Lenient);
        assert_eq!(Preset::from_str("minimal").unwrap(), Preset::Minimal);
        assert!(Preset::from_str("invalid").is_err());
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Strict.to_string(), "strict");
        assert_eq!(Preset::Minimal.to_string(), "minimal");
    }

    #[test]
    fn test_default_preset_matches_default_options() {
        assert_eq!(Preset::default(), Preset::Standard);
        assert_eq!(Preset::default().options(), ParseOptions::default());
    }

    #[test]
    fn test_strictness_flags() {
        assert!(Preset::Strict.options().check_require_length);
        assert!(!Preset::Strict.options().allow_non_literal_require);
        assert!(Preset::Lenient.options().allow_non_literal_require);
        assert!(!Preset::Minimal.options().comment_require);
    }
}
