//! Client-side translator.
//!
//! The active locale lives in a [`LocaleScope`] that is threaded through the
//! render path by the caller. An [`I18nClientProvider`] establishes a scope
//! for a body; [`use_locale`] and [`use_i18n`] read it back and fail with
//! [`I18nError::MissingLocaleScope`] when called with a scope no provider set,
//! or one whose provider was given an empty locale.
//!
//! Scopes are plain values, so concurrent renders never observe each other's
//! locale.
//!
//! ```
//! use i18n_at::{messages, params, use_i18n, I18nClientProvider};
//!
//! let table = messages! { en: { hi: "Hi {name}" } };
//! let out = I18nClientProvider::new("en").render(|scope| {
//!     let i18n = use_i18n(scope, &table, None)?;
//!     Ok::<_, i18n_at::I18nError>(i18n.t_with("hi", &params!(name: "Bob")))
//! });
//! assert_eq!(out.unwrap(), "Hi Bob");
//! ```

use std::sync::Arc;

use tracing::trace;

use crate::interpolate::InterpolationFormat;
use crate::message::MessageTable;
use crate::translator::I18n;
use crate::I18nError;

/// The render context a provider writes the active locale into.
///
/// `LocaleScope::default()` is the context outside of any provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleScope {
    locale: Option<Arc<str>>,
}

impl LocaleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

/// Establishes the active locale for everything rendered inside it.
#[derive(Clone, Debug)]
pub struct I18nClientProvider {
    locale: Arc<str>,
}

impl I18nClientProvider {
    pub fn new(locale: impl Into<Arc<str>>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The scope this provider establishes. Nested providers simply create
    /// their own scope; the inner one wins for its body.
    pub fn scope(&self) -> LocaleScope {
        LocaleScope {
            locale: Some(Arc::clone(&self.locale)),
        }
    }

    /// Run `body` inside this provider's scope.
    pub fn render<R>(&self, body: impl FnOnce(&LocaleScope) -> R) -> R {
        trace!(locale = %self.locale, "entering locale scope");
        let scope = self.scope();
        body(&scope)
    }
}

/// The active locale of `scope`. A provider with an empty locale counts as
/// no provider.
pub fn use_locale(scope: &LocaleScope) -> Result<&str, I18nError> {
    scope
        .locale()
        .filter(|locale| !locale.is_empty())
        .ok_or(I18nError::MissingLocaleScope)
}

/// A translator for the active locale of `scope`. `format` defaults to
/// [`InterpolationFormat::Legacy`].
pub fn use_i18n<'a>(
    scope: &'a LocaleScope,
    messages: &'a MessageTable,
    format: Option<InterpolationFormat>,
) -> Result<I18n<'a>, I18nError> {
    let locale = use_locale(scope)?;
    Ok(I18n::new(messages, locale, format.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use pretty_assertions::assert_eq;

    fn table() -> MessageTable {
        crate::messages! {
            en: { common: { save: "Save", welcome: "Welcome, {{name}}!" } },
            ja: { common: { save: "保存", welcome: "ようこそ、{{name}}！" } },
        }
    }

    #[test]
    fn locale_outside_provider_is_usage_error() {
        let scope = LocaleScope::new();
        assert!(matches!(
            use_locale(&scope),
            Err(I18nError::MissingLocaleScope)
        ));
        assert!(matches!(
            use_i18n(&scope, &table(), None),
            Err(I18nError::MissingLocaleScope)
        ));
    }

    #[test]
    fn empty_provider_locale_is_usage_error() {
        let scope = I18nClientProvider::new("").scope();
        assert!(matches!(
            use_locale(&scope),
            Err(I18nError::MissingLocaleScope)
        ));
        assert!(use_i18n(&scope, &table(), None).is_err());
    }

    #[test]
    fn provider_sets_locale() {
        let locale = I18nClientProvider::new("ja").render(|scope| {
            use_locale(scope).map(str::to_string)
        });
        assert_eq!(locale.unwrap(), "ja");
    }

    #[test]
    fn translator_reads_scope_locale() {
        let table = table();
        let provider = I18nClientProvider::new("ja");
        let scope = provider.scope();
        let i18n = use_i18n(&scope, &table, Some(InterpolationFormat::Double)).unwrap();
        assert_eq!(i18n.locale(), "ja");
        assert_eq!(i18n.t("common.save"), "保存");
        assert_eq!(
            i18n.t_with("common.welcome", &params!(name: "Client User")),
            "ようこそ、Client User！"
        );
    }

    #[test]
    fn nested_provider_wins_inside_its_body() {
        let table = table();
        let out = I18nClientProvider::new("en").render(|outer| {
            let inner_text = I18nClientProvider::new("ja").render(|inner| {
                use_i18n(inner, &table, None).map(|i| i.t("common.save"))
            });
            let outer_text = use_i18n(outer, &table, None).map(|i| i.t("common.save"));
            (outer_text.unwrap(), inner_text.unwrap())
        });
        assert_eq!(out, ("Save".to_string(), "保存".to_string()));
    }

    #[test]
    fn scopes_are_independent_across_threads() {
        let table = Arc::new(table());
        let handles: Vec<_> = ["en", "ja", "en", "ja"]
            .into_iter()
            .map(|locale| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    I18nClientProvider::new(locale).render(|scope| {
                        use_i18n(scope, &table, None)
                            .map(|i| i.t("common.save"))
                            .unwrap()
                    })
                })
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["Save", "保存", "Save", "保存"]);
    }
}
