use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The active locale was read outside of any provider scope.
    #[error("use_locale must be used inside I18nClientProvider")]
    MissingLocaleScope,

    /// Opt-in config validation found a locale that isn't declared.
    #[error("{field} `{locale}` is not one of the declared locales")]
    UndeclaredLocale { field: &'static str, locale: String },

    #[error("invalid message catalog at `{path}`: {msg}")]
    InvalidCatalog { path: String, msg: String },

    #[error("unsupported catalog extension for {}", .0.display())]
    UnsupportedCatalog(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "yaml")]
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
