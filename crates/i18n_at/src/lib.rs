//! i18n-at: small, type-anchored internationalization helpers
//!
//! - [`define_i18n_config`]: locale table + default locale + interpolation format
//! - [`MessageTable`] / [`messages!`]: nested per-locale message trees
//! - [`resolve`]: dotted key path -> template
//! - [`interpolate`]: `{name}`, `{$name}` or `{{name}}` placeholders
//! - [`get_i18n`] (server) and [`use_i18n`] / [`use_locale`] (client): the `t`
//!   function, which falls back to the raw key when nothing resolves
//!
//! Everything here is synchronous and pure over immutable data; configs and
//! tables can be shared across threads as-is.

mod catalog;
mod config;
mod error;
mod interpolate;
mod key;
mod message;
mod params;
mod path;
mod translator;

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "server")]
mod server;

pub use config::{define_i18n_config, I18nConfig, I18nConfigInput, LocaleConfig, TextDirection};
pub use error::I18nError;
pub use interpolate::{interpolate, InterpolationFormat, UnknownFormat};
pub use key::KeyPath;
pub use message::{
    at, define_messages, DefinedMessages, LocaleCoverage, MessageNode, MessageTable, MessageValue,
};
pub use params::{ArgValue, Params};
pub use path::resolve;
pub use translator::I18n;

#[cfg(feature = "client")]
pub use client::{use_i18n, use_locale, I18nClientProvider, LocaleScope};
#[cfg(feature = "server")]
pub use server::get_i18n;
