//! Path helpers used when labelling and resolving source files

use std::path::Path;

/// Returns the directory that relative includes inside `path` are resolved
/// against
///
/// A bare file name has an empty parent, so joining onto it keeps the result
/// relative to the working directory, like the path it came from.
#[must_use]
pub fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Returns the last component of `path` for use in a section header
///
/// Non UTF-8 names are converted lossily. A path without a final component
/// (such as `/`) yields an empty label.
#[must_use]
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
