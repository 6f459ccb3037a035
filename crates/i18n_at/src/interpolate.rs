//! Placeholder substitution.
//!
//! | format   | placeholder |
//! |----------|-------------|
//! | `none`   | no substitution |
//! | `legacy` | `{name}` (default) |
//! | `intl`   | `{$name}` |
//! | `double` | `{{name}}` |
//!
//! Substitution is literal and runs once per parameter, in the parameter
//! order. Text inserted for an earlier parameter is visible to later ones,
//! so a value that itself looks like a placeholder can be expanded again.
//! Placeholders without a matching parameter stay in the output verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Placeholder syntax used by [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFormat {
    None,
    Intl,
    #[default]
    Legacy,
    Double,
}

impl InterpolationFormat {
    pub const ALL: [InterpolationFormat; 4] = [Self::None, Self::Intl, Self::Legacy, Self::Double];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Intl => "intl",
            Self::Legacy => "legacy",
            Self::Double => "double",
        }
    }

    /// The literal placeholder for `name`, or `None` for [`InterpolationFormat::None`].
    pub fn placeholder(self, name: &str) -> Option<String> {
        self.placeholder_fn().map(|placeholder| placeholder(name))
    }

    fn placeholder_fn(self) -> Option<fn(&str) -> String> {
        let placeholder: fn(&str) -> String = match self {
            Self::None => return None,
            Self::Legacy => |name| format!("{{{name}}}"),
            Self::Intl => |name| format!("{{${name}}}"),
            Self::Double => |name| format!("{{{{{name}}}}}"),
        };
        Some(placeholder)
    }
}

impl fmt::Display for InterpolationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interpolation format `{0}` (expected none, intl, legacy or double)")]
pub struct UnknownFormat(pub String);

impl FromStr for InterpolationFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Substitute `params` into `template` under `format`.
///
/// `None` params behave like an empty set.
pub fn interpolate(template: &str, params: Option<&Params>, format: InterpolationFormat) -> String {
    let (Some(placeholder), Some(params)) = (format.placeholder_fn(), params) else {
        return template.to_string();
    };

    let mut text = template.to_string();
    for (name, value) in params.iter() {
        let pattern = placeholder(name);
        if text.contains(&pattern) {
            text = text.replace(&pattern, &value.to_string());
        }
    }
    text
}
