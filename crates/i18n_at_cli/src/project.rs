//! `i18n-at init` scaffolding

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use i18n_at::{define_i18n_config, I18nConfigInput, InterpolationFormat, LocaleConfig};
use tracing::debug;

const MESSAGES_TEMPLATE: &str = include_str!("../../../demos/messages.yaml");

fn config_template() -> Result<String> {
    let config = define_i18n_config(
        I18nConfigInput::new("en-US")
            .locale("en-US", LocaleConfig::new("English"))
            .locale("ja-JP", LocaleConfig::new("日本語"))
            .locale("zh-CN", LocaleConfig::new("中文"))
            .interpolation_format(InterpolationFormat::Legacy),
    );
    toml::to_string_pretty(&config.to_input()).context("Failed to serialize config")
}

/// Write `i18n.toml` and `messages.yaml` into `path`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    let config_path = path.join("i18n.toml");
    let messages_path = path.join("messages.yaml");

    if !force {
        for p in [&config_path, &messages_path] {
            if p.exists() {
                anyhow::bail!("{} already exists (use --force to overwrite)", p.display());
            }
        }
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&config_path, config_template()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    fs::write(&messages_path, MESSAGES_TEMPLATE)
        .with_context(|| format!("Failed to write {}", messages_path.display()))?;

    debug!(path = %path.display(), "scaffolded i18n project");
    Ok(())
}
