//! Path helpers used before glob matching

use path_clean::clean;
use std::borrow::Cow;
use std::path::Component;

/// Convert a platform-specific path into the forward-slash form glob
/// patterns expect.
///
/// On platforms whose separator is already `/` this is the identity. The
/// conversion is lossy on separator style: nothing turns the result back
/// into a backslash path.
pub fn to_posix_path(file_path: &str) -> Cow<'_, str> {
    if std::path::MAIN_SEPARATOR == '\\' && file_path.contains('\\') {
        Cow::Owned(file_path.replace('\\', "/"))
    } else {
        Cow::Borrowed(file_path)
    }
}

/// Strip a leading run of `../` segments.
///
/// Projects inside a monorepo can pull sources from parent directories, and
/// `**` in an ignore pattern should still reach `node_modules` found there.
pub fn strip_parent_prefix(file_path: &str) -> &str {
    let mut rest = file_path;
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    rest
}

/// Normalize `file_path` for matching against a single pattern
pub fn normalize_file_path(file_path: &str, strip_parent: bool) -> &str {
    if strip_parent {
        strip_parent_prefix(file_path)
    } else {
        file_path
    }
}

/// Returns true if `parent` is `child` itself or one of its ancestors.
///
/// Both sides are cleaned lexically first, so `build/./keep` and
/// `build/keep/` compare equal. An empty or `.` parent is the root and
/// contains every relative path that does not climb out of it.
pub fn is_sub_directory(parent: &str, child: &str) -> bool {
    let parent = clean(parent);
    let child = clean(child);

    let parent_components: Vec<Component<'_>> = parent
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if parent_components.is_empty() {
        return !child.is_absolute()
            && !matches!(child.components().next(), Some(Component::ParentDir));
    }

    let mut child_components = child
        .components()
        .filter(|c| !matches!(c, Component::CurDir));

    parent_components
        .iter()
        .all(|p| child_components.next().as_ref() == Some(p))
}
