//! Message trees and multi-locale message tables.
//!
//! A [`MessageNode`] is one locale's translatable content: a mapping of keys to
//! either leaf templates or nested groups. A [`MessageTable`] maps each locale
//! to its root node. Tables are authored once (in code via [`messages!`] or
//! loaded from a YAML/JSON catalog, see `MessageTable::load`) and never
//! mutated afterwards, so they can be shared freely across threads.
//!
//! All locales are expected to share one key structure, but nothing enforces
//! it; lookups for keys a locale is missing degrade to the raw key. Use
//! [`MessageTable::coverage`] to find structural drift.
//!
//! [`messages!`]: crate::messages

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

/// A value inside a [`MessageNode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// A translatable template.
    Text(String),
    /// A nested group of messages.
    Group(MessageNode),
}

impl MessageValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&MessageNode> {
        match self {
            Self::Text(_) => None,
            Self::Group(n) => Some(n),
        }
    }
}

impl From<&str> for MessageValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MessageValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<MessageNode> for MessageValue {
    fn from(n: MessageNode) -> Self {
        Self::Group(n)
    }
}

/// One locale's message tree. Keys keep their declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageNode {
    entries: IndexMap<String, MessageValue>,
}

impl MessageNode {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MessageValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MessageValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&MessageValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Dotted paths of every leaf template in this tree, in declaration order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaf_paths(self, "", &mut out);
        out
    }
}

fn collect_leaf_paths(node: &MessageNode, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in node.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            MessageValue::Text(_) => out.push(path),
            MessageValue::Group(child) => collect_leaf_paths(child, &path, out),
        }
    }
}

/// Locale identifier -> root message tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageTable {
    locales: IndexMap<String, MessageNode>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self {
            locales: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, locale: impl Into<String>, root: MessageNode) {
        self.locales.insert(locale.into(), root);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_locale(mut self, locale: impl Into<String>, root: MessageNode) -> Self {
        self.insert(locale, root);
        self
    }

    pub fn get(&self, locale: &str) -> Option<&MessageNode> {
        self.locales.get(locale)
    }

    /// Locale identifiers in declaration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Compare every locale's leaf paths against `reference`.
    ///
    /// Returns `None` if `reference` isn't in the table. Purely diagnostic:
    /// lookups are unaffected by gaps.
    pub fn coverage(&self, reference: &str) -> Option<Vec<LocaleCoverage>> {
        let expected: Vec<String> = self.get(reference)?.leaf_paths();
        let expected_set: BTreeSet<&str> = expected.iter().map(String::as_str).collect();

        let report = self
            .locales
            .iter()
            .filter(|(locale, _)| locale.as_str() != reference)
            .map(|(locale, root)| {
                let actual = root.leaf_paths();
                let actual_set: BTreeSet<&str> = actual.iter().map(String::as_str).collect();
                LocaleCoverage {
                    locale: locale.clone(),
                    missing: expected
                        .iter()
                        .filter(|p| !actual_set.contains(p.as_str()))
                        .cloned()
                        .collect(),
                    extra: actual
                        .iter()
                        .filter(|p| !expected_set.contains(p.as_str()))
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        Some(report)
    }
}

impl FromIterator<(String, MessageNode)> for MessageTable {
    fn from_iter<I: IntoIterator<Item = (String, MessageNode)>>(iter: I) -> Self {
        Self {
            locales: iter.into_iter().collect(),
        }
    }
}

/// Structural drift of one locale relative to a reference locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Leaf paths present in the reference but not in this locale.
    pub missing: Vec<String>,
    /// Leaf paths present in this locale but not in the reference.
    pub extra: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Result of [`define_messages`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinedMessages {
    pub messages: MessageTable,
}

/// Wrap a message table. Identity; exists so call sites read like the config
/// definition next to them.
pub fn define_messages(messages: MessageTable) -> DefinedMessages {
    DefinedMessages { messages }
}

/// The message subtree for `locale`, or `None` if the table doesn't have it.
pub fn at<'a>(locale: &str, messages: &'a MessageTable) -> Option<&'a MessageNode> {
    messages.get(locale)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

/// Build a [`MessageNode`] from nested `key: "template"` / `key: { ... }`
/// pairs. Keys are identifiers or string literals.
///
/// ```
/// let nav = i18n_at::node! {
///     home: "Home",
///     "sub-menu": { about: "About" },
/// };
/// assert_eq!(nav.leaf_paths(), ["home", "sub-menu.about"]);
/// ```
#[macro_export]
macro_rules! node {
    (@acc $n:ident;) => {};
    (@acc $n:ident; $key:tt : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $n.insert(
            $crate::__message_key!($key),
            $crate::MessageValue::Group($crate::node! { $($inner)* }),
        );
        $crate::node!(@acc $n; $($($rest)*)?);
    };
    (@acc $n:ident; $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $n.insert(
            $crate::__message_key!($key),
            $crate::MessageValue::Text(::std::string::String::from($value)),
        );
        $crate::node!(@acc $n; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut node = $crate::MessageNode::new();
        $crate::node!(@acc node; $($body)*);
        node
    }};
}

/// Build a [`MessageTable`]: `locale: { <node! body> }, ...`.
///
/// ```
/// let table = i18n_at::messages! {
///     en: { hello: "Hello" },
///     "ja-JP": { hello: "こんにちは" },
/// };
/// assert_eq!(table.locales().collect::<Vec<_>>(), ["en", "ja-JP"]);
/// ```
#[macro_export]
macro_rules! messages {
    ($($locale:tt : { $($body:tt)* }),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut table = $crate::MessageTable::new();
        $(
            table.insert($crate::__message_key!($locale), $crate::node! { $($body)* });
        )*
        table
    }};
}
