//! Server-side translator: the locale is an explicit argument, typically taken
//! from the route (`/[locale]/...`) of the request being rendered.

use std::borrow::Cow;

use crate::interpolate::InterpolationFormat;
use crate::message::MessageTable;
use crate::translator::I18n;

/// Build a translator for `locale`. `format` defaults to
/// [`InterpolationFormat::Legacy`].
pub fn get_i18n<'a>(
    messages: &'a MessageTable,
    locale: impl Into<Cow<'a, str>>,
    format: Option<InterpolationFormat>,
) -> I18n<'a> {
    I18n::new(messages, locale, format.unwrap_or_default())
}
