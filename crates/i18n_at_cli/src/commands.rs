//! Subcommand implementations. Each returns its output as a string so it can
//! be tested without capturing stdout.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use i18n_at::{I18n, I18nConfig, InterpolationFormat, MessageTable, Params};
use tracing::{info, warn};

pub fn load_config(path: &Path) -> Result<I18nConfig> {
    let config = I18nConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!(locales = config.locale_keys().len(), "loaded config");
    Ok(config)
}

pub fn load_messages(path: &Path) -> Result<MessageTable> {
    MessageTable::load(path)
        .with_context(|| format!("Failed to load messages from {}", path.display()))
}

pub fn locales(config: &I18nConfig) -> String {
    let mut out = String::new();
    for (key, locale) in config.locales() {
        let mut flags = Vec::new();
        if key == config.default_locale() {
            flags.push("default");
        }
        if config.fallback_locale() == Some(key.as_str()) {
            flags.push("fallback");
        }
        if let Some(dir) = locale.direction {
            flags.push(match dir {
                i18n_at::TextDirection::Ltr => "ltr",
                i18n_at::TextDirection::Rtl => "rtl",
            });
        }

        let _ = write!(out, "{key}\t{}", locale.name);
        if !flags.is_empty() {
            let _ = write!(out, "\t({})", flags.join(", "));
        }
        out.push('\n');
    }
    out
}

pub struct TranslateArgs<'a> {
    pub key: &'a str,
    pub locale: Option<&'a str>,
    pub format: Option<InterpolationFormat>,
    pub params: &'a [(String, String)],
}

pub fn translate(config: &I18nConfig, table: &MessageTable, args: &TranslateArgs<'_>) -> String {
    let locale = args.locale.unwrap_or(config.default_locale());
    if !config.is_valid_locale(locale) {
        warn!(locale, "locale is not declared in the config");
    }

    let mut i18n = I18n::from_config(table, locale, config);
    if let Some(format) = args.format {
        i18n = i18n.with_format(format);
    }

    let params: Params = args
        .params
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    i18n.t_with(args.key, &params)
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub problems: Vec<String>,
    pub checked_locales: usize,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for p in &self.problems {
            let _ = writeln!(out, "error: {p}");
        }
        if self.is_ok() {
            let _ = writeln!(out, "ok: {} locale(s) checked", self.checked_locales);
        }
        out
    }
}

/// Opt-in config validation plus key coverage against the default locale.
pub fn check(config: &I18nConfig, table: &MessageTable) -> CheckReport {
    let mut report = CheckReport {
        checked_locales: table.len(),
        ..Default::default()
    };

    if let Err(e) = config.validate() {
        report.problems.push(e.to_string());
    }

    for locale in config.locale_keys() {
        if table.get(locale).is_none() {
            report
                .problems
                .push(format!("locale `{locale}` has no messages"));
        }
    }
    for locale in table.locales() {
        if !config.is_valid_locale(locale) {
            report
                .problems
                .push(format!("messages for undeclared locale `{locale}`"));
        }
    }

    match table.coverage(config.default_locale()) {
        Some(coverage) => {
            for c in coverage {
                for path in &c.missing {
                    report
                        .problems
                        .push(format!("`{}` is missing `{path}`", c.locale));
                }
                for path in &c.extra {
                    report.problems.push(format!(
                        "`{}` has `{path}`, which `{}` doesn't",
                        c.locale,
                        config.default_locale()
                    ));
                }
            }
        }
        None => warn!(
            locale = config.default_locale(),
            "default locale has no messages, skipping coverage"
        ),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_at::{define_i18n_config, messages, I18nConfigInput, LocaleConfig, TextDirection};
    use pretty_assertions::assert_eq;

    fn config() -> I18nConfig {
        define_i18n_config(
            I18nConfigInput::new("en-US")
                .locale("en-US", LocaleConfig::new("English"))
                .locale("ar", LocaleConfig::new("العربية").direction(TextDirection::Rtl))
                .locale("ja-JP", LocaleConfig::new("日本語"))
                .fallback_locale("en-US"),
        )
    }

    fn table() -> MessageTable {
        messages! {
            "en-US": { dashboard: { title: "Dashboard", welcome: "Welcome, {name}!" }, bye: "Bye" },
            ar: { dashboard: { title: "لوحة القيادة", welcome: "مرحبا {name}" }, bye: "مع السلامة" },
            "ja-JP": { dashboard: { title: "ダッシュボード", welcome: "{name} さん、ようこそ！" } },
        }
    }

    #[test]
    fn locales_lists_in_order_with_flags() {
        assert_eq!(
            locales(&config()),
            "en-US\tEnglish\t(default, fallback)\nar\tالعربية\t(rtl)\nja-JP\t日本語\n"
        );
    }

    #[test]
    fn translate_uses_default_locale_and_params() {
        let params = vec![("name".to_string(), "Bob".to_string())];
        let args = TranslateArgs {
            key: "dashboard.welcome",
            locale: None,
            format: None,
            params: &params,
        };
        assert_eq!(translate(&config(), &table(), &args), "Welcome, Bob!");

        let args = TranslateArgs {
            locale: Some("ja-JP"),
            ..args
        };
        assert_eq!(translate(&config(), &table(), &args), "Bob さん、ようこそ！");
    }

    #[test]
    fn translate_falls_back_to_config_fallback_then_key() {
        let args = TranslateArgs {
            key: "bye",
            locale: Some("ja-JP"),
            format: None,
            params: &[],
        };
        assert_eq!(translate(&config(), &table(), &args), "Bye");

        let args = TranslateArgs {
            key: "nope.nothing",
            ..args
        };
        assert_eq!(translate(&config(), &table(), &args), "nope.nothing");
    }

    #[test]
    fn translate_format_override() {
        let params = vec![("name".to_string(), "Bob".to_string())];
        let args = TranslateArgs {
            key: "dashboard.welcome",
            locale: Some("en-US"),
            format: Some(InterpolationFormat::None),
            params: &params,
        };
        assert_eq!(translate(&config(), &table(), &args), "Welcome, {name}!");
    }

    #[test]
    fn check_reports_drift() {
        let report = check(&config(), &table());
        assert!(!report.is_ok());
        assert_eq!(report.problems, vec!["`ja-JP` is missing `bye`".to_string()]);
        assert!(report.render().starts_with("error: "));
    }

    #[test]
    fn check_reports_undeclared_locales() {
        let config = define_i18n_config(
            I18nConfigInput::new("fr").locale("en", LocaleConfig::new("English")),
        );
        let table = messages! { en: { a: "A" }, de: { a: "A" } };
        let report = check(&config, &table);
        assert_eq!(
            report.problems,
            vec![
                "defaultLocale `fr` is not one of the declared locales".to_string(),
                "messages for undeclared locale `de`".to_string(),
            ]
        );
    }

    #[test]
    fn check_passes_for_consistent_catalog() {
        let config = define_i18n_config(
            I18nConfigInput::new("en")
                .locale("en", LocaleConfig::new("English"))
                .locale("ja", LocaleConfig::new("日本語")),
        );
        let table = messages! { en: { a: { b: "B" } }, ja: { a: { b: "び" } } };
        let report = check(&config, &table);
        assert!(report.is_ok());
        assert_eq!(report.render(), "ok: 2 locale(s) checked\n");
    }
}
