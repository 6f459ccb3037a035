use std::borrow::Cow;

use tracing::trace;

use crate::config::I18nConfig;
use crate::interpolate::{interpolate, InterpolationFormat};
use crate::key::KeyPath;
use crate::message::{at, MessageTable};
use crate::params::Params;
use crate::path::resolve;

/// A translator bound to one message table and one active locale.
///
/// Returned by [`get_i18n`](crate::get_i18n) and
/// [`use_i18n`](crate::use_i18n). `t` never fails: a key that doesn't resolve
/// to a template in the active locale comes back unchanged.
#[derive(Clone, Debug)]
pub struct I18n<'a> {
    messages: &'a MessageTable,
    locale: Cow<'a, str>,
    format: InterpolationFormat,
    fallback_locale: Option<Cow<'a, str>>,
}

impl<'a> I18n<'a> {
    pub fn new(
        messages: &'a MessageTable,
        locale: impl Into<Cow<'a, str>>,
        format: InterpolationFormat,
    ) -> Self {
        Self {
            messages,
            locale: locale.into(),
            format,
            fallback_locale: None,
        }
    }

    /// A translator using the config's interpolation format and fallback locale.
    pub fn from_config(
        messages: &'a MessageTable,
        locale: impl Into<Cow<'a, str>>,
        config: &'a I18nConfig,
    ) -> Self {
        let mut i18n = Self::new(messages, locale, config.interpolation_format());
        if let Some(fallback) = config.fallback_locale() {
            i18n = i18n.with_fallback_locale(fallback);
        }
        i18n
    }

    /// Try `locale` before giving up and returning the raw key.
    pub fn with_fallback_locale(mut self, locale: impl Into<Cow<'a, str>>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn with_format(mut self, format: InterpolationFormat) -> Self {
        self.format = format;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn format(&self) -> InterpolationFormat {
        self.format
    }

    /// The root key anchor (`m`).
    pub fn m(&self) -> KeyPath {
        KeyPath::root()
    }

    /// The raw template for `key`, without interpolation.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        resolve(at(&self.locale, self.messages), key).or_else(|| {
            let fallback = self.fallback_locale.as_deref()?;
            resolve(at(fallback, self.messages), key)
        })
    }

    pub fn t(&self, key: impl AsRef<str>) -> String {
        self.translate(key.as_ref(), None)
    }

    pub fn t_with(&self, key: impl AsRef<str>, params: &Params) -> String {
        self.translate(key.as_ref(), Some(params))
    }

    pub fn translate(&self, key: &str, params: Option<&Params>) -> String {
        match self.lookup(key) {
            Some(template) => interpolate(template, params, self.format),
            None => {
                trace!(locale = %self.locale, key, "no translation, using key");
                key.to_string()
            }
        }
    }
}
