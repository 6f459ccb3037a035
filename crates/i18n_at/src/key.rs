use std::fmt;

/// A dotted message key built segment by segment.
///
/// This is the `m` anchor returned next to `t`: call sites write
/// `t(m.key("dashboard").key("title"))` (or `key!(dashboard.title)`) instead
/// of a bare string, which keeps keys greppable and composable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    path: String,
}

impl KeyPath {
    /// The empty root anchor.
    pub fn root() -> Self {
        Self::default()
    }

    /// Append one segment.
    pub fn key(&self, segment: &str) -> Self {
        let mut path = String::with_capacity(self.path.len() + segment.len() + 1);
        path.push_str(&self.path);
        if !self.path.is_empty() {
            path.push('.');
        }
        path.push_str(segment);
        Self { path }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.').filter(|s| !s.is_empty())
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl From<KeyPath> for String {
    fn from(k: KeyPath) -> Self {
        k.path
    }
}

/// Build a [`KeyPath`] from identifier segments: `key!(dashboard.title)`.
#[macro_export]
macro_rules! key {
    ($first:ident $(. $rest:ident)*) => {
        $crate::KeyPath::from(concat!(stringify!($first) $(, ".", stringify!($rest))*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_from_root() {
        let m = KeyPath::root();
        assert!(m.is_root());
        let title = m.key("dashboard").key("title");
        assert_eq!(title.as_str(), "dashboard.title");
        assert_eq!(title.to_string(), "dashboard.title");
        assert_eq!(title.segments().collect::<Vec<_>>(), vec!["dashboard", "title"]);
    }

    #[test]
    fn macro_matches_builder() {
        assert_eq!(
            crate::key!(common.loading),
            KeyPath::root().key("common").key("loading")
        );
        assert_eq!(crate::key!(hello).as_str(), "hello");
    }

    #[test]
    fn prefix_is_reusable() {
        let nav = KeyPath::root().key("navigation");
        assert_eq!(nav.key("home").as_str(), "navigation.home");
        assert_eq!(nav.key("about").as_str(), "navigation.about");
    }
}
