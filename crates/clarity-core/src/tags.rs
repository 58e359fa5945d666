//! Hierarchical tag expansion.

/// Leading character that marks a token as a tag.
pub const TAG_MARKER: char = '#';

/// Separator between levels of a hierarchical tag.
const HIERARCHY_SEPARATOR: char = '/';

/// Expands tag tokens so hierarchical tags also count towards their parent.
///
/// The original tags come first, in order. For every tag containing `/`, its
/// top-level name (the part before the first `/`, without the `#` marker) is
/// appended afterwards. Duplicates are kept as-is.
///
/// ```
/// use clarity_core::expand_tags;
///
/// assert_eq!(expand_tags(&["#a/b", "#c"]), vec!["#a/b", "#c", "a"]);
/// ```
pub fn expand_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let parents = tags.iter().filter_map(|tag| {
        let tag = tag.as_ref();
        tag.split_once(HIERARCHY_SEPARATOR)
            .map(|(parent, _)| parent.strip_prefix(TAG_MARKER).unwrap_or(parent))
    });

    tags.iter()
        .map(|tag| tag.as_ref())
        .chain(parents)
        .map(str::to_string)
        .collect()
}
