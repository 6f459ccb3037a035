//! Locale configuration.
//!
//! [`define_i18n_config`] turns an [`I18nConfigInput`] (usually authored in
//! code or read from an `i18n.toml`) into an immutable [`I18nConfig`] with a
//! few derived helpers: the ordered locale keys, a membership test, and
//! per-locale metadata lookup.
//!
//! `default_locale` and `fallback_locale` aren't checked against the declared
//! locales when building. Call [`I18nConfig::validate`] to opt into that.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interpolate::InterpolationFormat;
use crate::I18nError;

/// Text direction of a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Display metadata for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<TextDirection>,
    #[serde(default, alias = "date_format", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl LocaleConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: None,
            date_format: None,
        }
    }

    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}

/// Input to [`define_i18n_config`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfigInput {
    #[serde(alias = "default_locale")]
    pub default_locale: String,
    #[serde(default, alias = "fallback_locale", skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<String>,
    #[serde(
        default,
        alias = "interpolation_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpolation_format: Option<InterpolationFormat>,
    // Last so TOML output puts the `[locales.*]` tables after the scalars.
    pub locales: IndexMap<String, LocaleConfig>,
}

impl I18nConfigInput {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            locales: IndexMap::new(),
            default_locale: default_locale.into(),
            fallback_locale: None,
            interpolation_format: None,
        }
    }

    pub fn locale(mut self, key: impl Into<String>, config: LocaleConfig) -> Self {
        self.locales.insert(key.into(), config);
        self
    }

    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn interpolation_format(mut self, format: InterpolationFormat) -> Self {
        self.interpolation_format = Some(format);
        self
    }
}

/// Process-wide, read-only i18n configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct I18nConfig {
    locales: IndexMap<String, LocaleConfig>,
    locale_keys: Vec<String>,
    default_locale: String,
    fallback_locale: Option<String>,
    interpolation_format: InterpolationFormat,
}

/// Build an [`I18nConfig`]. Fills in the default interpolation format and
/// derives the locale key list; does not validate locale membership.
pub fn define_i18n_config(input: I18nConfigInput) -> I18nConfig {
    let I18nConfigInput {
        locales,
        default_locale,
        fallback_locale,
        interpolation_format,
    } = input;

    let locale_keys: Vec<String> = locales.keys().cloned().collect();
    let interpolation_format = interpolation_format.unwrap_or_default();
    debug!(
        locales = ?locale_keys,
        default = %default_locale,
        format = %interpolation_format,
        "defined i18n config"
    );

    I18nConfig {
        locales,
        locale_keys,
        default_locale,
        fallback_locale,
        interpolation_format,
    }
}

impl I18nConfig {
    /// Parse and define a config from `i18n.toml` contents.
    pub fn from_toml_str(src: &str) -> Result<Self, I18nError> {
        let input: I18nConfigInput = toml::from_str(src)?;
        Ok(define_i18n_config(input))
    }

    /// Load a config file (looks for `i18n.toml` when given a directory).
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let config_path = if path.is_dir() {
            path.join("i18n.toml")
        } else {
            path.to_path_buf()
        };
        let src = fs::read_to_string(&config_path).map_err(|source| I18nError::Io {
            path: config_path.clone(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn locales(&self) -> &IndexMap<String, LocaleConfig> {
        &self.locales
    }

    /// Declared locale keys, in declaration order.
    pub fn locale_keys(&self) -> &[String] {
        &self.locale_keys
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }

    pub fn interpolation_format(&self) -> InterpolationFormat {
        self.interpolation_format
    }

    pub fn is_valid_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Membership test for untyped input (route params, JSON bodies, ...).
    /// Anything that isn't a string is rejected.
    pub fn is_valid_locale_value(&self, value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(|s| self.is_valid_locale(s))
    }

    /// Metadata for a declared locale; `None` for anything else.
    pub fn get_locale_config(&self, locale: &str) -> Option<&LocaleConfig> {
        self.locales.get(locale)
    }

    /// Opt-in check that `default_locale` and `fallback_locale` are declared.
    pub fn validate(&self) -> Result<(), I18nError> {
        if !self.is_valid_locale(&self.default_locale) {
            return Err(I18nError::UndeclaredLocale {
                field: "defaultLocale",
                locale: self.default_locale.clone(),
            });
        }
        if let Some(fallback) = &self.fallback_locale {
            if !self.is_valid_locale(fallback) {
                return Err(I18nError::UndeclaredLocale {
                    field: "fallbackLocale",
                    locale: fallback.clone(),
                });
            }
        }
        Ok(())
    }

    /// Convert back to an input value, e.g. to write it out as TOML.
    pub fn to_input(&self) -> I18nConfigInput {
        I18nConfigInput {
            locales: self.locales.clone(),
            default_locale: self.default_locale.clone(),
            fallback_locale: self.fallback_locale.clone(),
            interpolation_format: Some(self.interpolation_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn en_ja() -> I18nConfig {
        define_i18n_config(
            I18nConfigInput::new("en")
                .locale("en", LocaleConfig::new("English"))
                .locale("ja", LocaleConfig::new("Japanese").direction(TextDirection::Ltr)),
        )
    }

    #[test]
    fn defaults_and_key_order() {
        let config = en_ja();
        assert_eq!(config.default_locale(), "en");
        assert_eq!(config.locale_keys(), ["en", "ja"]);
        assert_eq!(config.interpolation_format(), InterpolationFormat::Legacy);
        assert_eq!(config.fallback_locale(), None);
    }

    #[test]
    fn membership() {
        let config = en_ja();
        assert!(config.is_valid_locale("en"));
        assert!(config.is_valid_locale("ja"));
        assert!(!config.is_valid_locale("fr"));
        assert!(!config.is_valid_locale("EN"));

        assert!(config.is_valid_locale_value(&json!("ja")));
        assert!(!config.is_valid_locale_value(&json!(123)));
        assert!(!config.is_valid_locale_value(&json!(null)));
        assert!(!config.is_valid_locale_value(&json!(["en"])));
    }

    #[test]
    fn locale_config_lookup() {
        let config = define_i18n_config(
            I18nConfigInput::new("en")
                .locale("en", LocaleConfig::new("English").direction(TextDirection::Ltr))
                .locale("ja", LocaleConfig::new("Japanese")),
        );
        assert_eq!(
            config.get_locale_config("en"),
            Some(&LocaleConfig {
                name: "English".to_string(),
                direction: Some(TextDirection::Ltr),
                date_format: None,
            })
        );
        assert_eq!(config.get_locale_config("ja"), Some(&LocaleConfig::new("Japanese")));
        assert_eq!(config.get_locale_config("fr"), None);
    }

    #[test]
    fn custom_interpolation_format() {
        let config = define_i18n_config(
            I18nConfigInput::new("en")
                .locale("en", LocaleConfig::new("English"))
                .interpolation_format(InterpolationFormat::Intl),
        );
        assert_eq!(config.interpolation_format(), InterpolationFormat::Intl);
    }

    #[test]
    fn undeclared_default_is_accepted_until_validated() {
        let config = define_i18n_config(
            I18nConfigInput::new("fr")
                .locale("en", LocaleConfig::new("English"))
                .fallback_locale("de"),
        );
        assert_eq!(config.default_locale(), "fr");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            I18nError::UndeclaredLocale { field: "defaultLocale", ref locale } if locale == "fr"
        ));
    }

    #[test]
    fn validate_checks_fallback() {
        let config = define_i18n_config(
            I18nConfigInput::new("en")
                .locale("en", LocaleConfig::new("English"))
                .fallback_locale("de"),
        );
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            I18nError::UndeclaredLocale { field: "fallbackLocale", .. }
        ));

        assert!(en_ja().validate().is_ok());
    }

    #[test]
    fn toml_keeps_declaration_order() {
        let src = r#"
defaultLocale = "ja-JP"
interpolationFormat = "double"

[locales.zh-CN]
name = "中文"

[locales.en-US]
name = "English"
dateFormat = "MM/DD/YYYY"

[locales.ja-JP]
name = "日本語"
direction = "ltr"
"#;
        let config = I18nConfig::from_toml_str(src).unwrap();
        assert_eq!(config.locale_keys(), ["zh-CN", "en-US", "ja-JP"]);
        assert_eq!(config.interpolation_format(), InterpolationFormat::Double);
        assert_eq!(
            config.get_locale_config("en-US").and_then(|c| c.date_format.as_deref()),
            Some("MM/DD/YYYY")
        );
    }

    #[test]
    fn toml_accepts_snake_case_keys() {
        let src = r#"
default_locale = "en"
fallback_locale = "en"

[locales.en]
name = "English"
date_format = "YYYY-MM-DD"
"#;
        let config = I18nConfig::from_toml_str(src).unwrap();
        assert_eq!(config.fallback_locale(), Some("en"));
        assert_eq!(config.interpolation_format(), InterpolationFormat::Legacy);
        assert_eq!(
            config.get_locale_config("en").unwrap().date_format.as_deref(),
            Some("YYYY-MM-DD")
        );
    }

    #[test]
    fn toml_rejects_unknown_format() {
        let src = r#"
defaultLocale = "en"
interpolationFormat = "icu"

[locales.en]
name = "English"
"#;
        assert!(matches!(
            I18nConfig::from_toml_str(src),
            Err(I18nError::Toml(_))
        ));
    }

    #[test]
    fn to_input_round_trips_through_toml() {
        let config = en_ja();
        let text = toml::to_string(&config.to_input()).unwrap();
        assert_eq!(I18nConfig::from_toml_str(&text).unwrap(), config);
    }
}
