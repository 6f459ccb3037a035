use crate::message::{MessageNode, MessageValue};

/// Resolve a dotted `path` (`"nav.home"`) to a leaf template under `root`.
///
/// Returns `None` when `root` is absent, when a segment is missing, when a
/// leaf is reached with segments still left, or when the path ends on a nested
/// group. Segments are matched exactly.
pub fn resolve<'a>(root: Option<&'a MessageNode>, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = root?.get(first)?;

    for segment in segments {
        match current {
            MessageValue::Group(node) => current = node.get(segment)?,
            // A leaf can't be indexed further.
            MessageValue::Text(_) => return None,
        }
    }

    current.as_text()
}
