//! Canonical absolute paths and lexical normalization.
//!
//! These helpers resolve caller-supplied arguments against the process
//! working directory. [`normalize`] is purely lexical and never touches the
//! filesystem, so it also works on paths that don't exist yet.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::PathError;

/// Check whether a path exists, relative to the process working directory.
///
/// Never errors: an unreadable or missing path is simply `false`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Resolve a path to its canonical absolute form.
///
/// Relative paths are resolved against the process working directory and
/// symbolic links are followed. Returns [`PathError::NotFound`] if the path
/// does not exist.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf, PathError> {
    let path = path.as_ref();
    match std::fs::canonicalize(path) {
        Ok(abs) => Ok(abs),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(PathError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(PathError::Io(err)),
    }
}

/// Final path segment (name + extension) of the resolved absolute path.
///
/// The filesystem root has no final segment; that case yields an empty
/// string.
pub fn basename(path: impl AsRef<Path>) -> Result<String, PathError> {
    let abs = absolute(path)?;
    Ok(abs
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}

/// Collapse `.` and `..` segments without consulting the filesystem.
///
/// A `..` at the root stays at the root; leading `..` segments on a relative
/// path are preserved since there is nothing to pop. The result can be empty
/// (e.g. for `"a/.."`).
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
