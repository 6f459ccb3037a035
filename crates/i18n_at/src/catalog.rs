//! Catalog files: YAML or JSON documents of `locale -> nested messages`.
//!
//! A document is parsed into the format's generic value tree first and then
//! walked, so a bad entry is reported by its dotted path (`en.errors.count`)
//! rather than by a line in the middle of a locale. Scalar keys such as
//! `404:` are read as strings.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::message::{MessageNode, MessageTable, MessageValue};
use crate::I18nError;

/// Path reported for problems with the document itself.
const DOCUMENT: &str = "<document>";

fn invalid(path: &str, msg: impl Into<String>) -> I18nError {
    I18nError::InvalidCatalog {
        path: path.to_string(),
        msg: msg.into(),
    }
}

fn entry_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

impl MessageTable {
    /// Parse a JSON catalog: `{ "<locale>": { <nested messages> }, ... }`.
    pub fn from_json_str(src: &str) -> Result<Self, I18nError> {
        let doc: serde_json::Value = serde_json::from_str(src)?;
        let table = json::table(doc)?;
        table.report_loaded("json");
        Ok(table)
    }

    /// Parse a YAML catalog with the same shape as the JSON one.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(src: &str) -> Result<Self, I18nError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(src)?;
        let table = yaml::table(doc)?;
        table.report_loaded("yaml");
        Ok(table)
    }

    /// Load a catalog file, picking the parser from its extension.
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let src = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&src),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::from_yaml_str(&src),
            _ => Err(I18nError::UnsupportedCatalog(path.to_path_buf())),
        }
    }

    fn report_loaded(&self, format: &str) {
        debug!(format, locales = self.len(), "loaded message table");
        for locale in self.locales() {
            if let Some(root) = self.get(locale) {
                warn_unreachable_keys(locale, root, "");
            }
        }
    }
}

/// Keys containing `.` can never be reached by a dotted path.
fn warn_unreachable_keys(locale: &str, node: &MessageNode, prefix: &str) {
    for (key, value) in node.iter() {
        if key.contains('.') {
            warn!(
                locale = %locale,
                key = %format!("{prefix}{key}"),
                "message key contains `.` and cannot be addressed by a dotted path"
            );
        }
        if let MessageValue::Group(child) = value {
            warn_unreachable_keys(locale, child, &format!("{prefix}{key}."));
        }
    }
}

mod json {
    use serde_json::Value;

    use super::{entry_path, invalid, DOCUMENT};
    use crate::message::{MessageNode, MessageTable, MessageValue};
    use crate::I18nError;

    pub(super) fn table(doc: Value) -> Result<MessageTable, I18nError> {
        let locales = match doc {
            Value::Object(map) => map,
            other => {
                return Err(invalid(
                    DOCUMENT,
                    format!("expected a mapping of locales, found {}", kind(&other)),
                ))
            }
        };
        locales
            .into_iter()
            .map(|(locale, root)| parse_node(&locale, root).map(|node| (locale, node)))
            .collect()
    }

    fn parse_node(path: &str, value: Value) -> Result<MessageNode, I18nError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(invalid(
                    path,
                    format!("expected a mapping, found {}", kind(&other)),
                ))
            }
        };
        let mut node = MessageNode::new();
        for (key, value) in map {
            let entry = entry_path(path, &key);
            let value = match value {
                Value::String(text) => MessageValue::Text(text),
                group @ Value::Object(_) => MessageValue::Group(parse_node(&entry, group)?),
                other => {
                    return Err(invalid(
                        &entry,
                        format!("expected a string or a mapping, found {}", kind(&other)),
                    ))
                }
            };
            node.insert(key, value);
        }
        Ok(node)
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "a list",
            Value::Object(_) => "a mapping",
        }
    }
}

#[cfg(feature = "yaml")]
mod yaml {
    use serde_yaml::Value;

    use super::{entry_path, invalid, DOCUMENT};
    use crate::message::{MessageNode, MessageTable, MessageValue};
    use crate::I18nError;

    pub(super) fn table(doc: Value) -> Result<MessageTable, I18nError> {
        let locales = match doc {
            Value::Mapping(map) => map,
            // An empty document.
            Value::Null => return Ok(MessageTable::new()),
            other => {
                return Err(invalid(
                    DOCUMENT,
                    format!("expected a mapping of locales, found {}", kind(&other)),
                ))
            }
        };
        let mut table = MessageTable::new();
        for (key, root) in locales {
            let locale = key_string(DOCUMENT, &key)?;
            let node = parse_node(&locale, root)?;
            table.insert(locale, node);
        }
        Ok(table)
    }

    fn parse_node(path: &str, value: Value) -> Result<MessageNode, I18nError> {
        let map = match value {
            Value::Mapping(map) => map,
            other => {
                return Err(invalid(
                    path,
                    format!("expected a mapping, found {}", kind(&other)),
                ))
            }
        };
        let mut node = MessageNode::new();
        for (key, value) in map {
            let key = key_string(path, &key)?;
            let entry = entry_path(path, &key);
            let value = match value {
                Value::String(text) => MessageValue::Text(text),
                group @ Value::Mapping(_) => MessageValue::Group(parse_node(&entry, group)?),
                other => {
                    return Err(invalid(
                        &entry,
                        format!("expected a string or a mapping, found {}", kind(&other)),
                    ))
                }
            };
            node.insert(key, value);
        }
        Ok(node)
    }

    fn key_string(parent: &str, key: &Value) -> Result<String, I18nError> {
        match key {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(invalid(
                parent,
                format!("keys must be strings or numbers, found {}", kind(other)),
            )),
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Sequence(_) => "a list",
            Value::Mapping(_) => "a mapping",
            Value::Tagged(_) => "a tagged value",
        }
    }
}
