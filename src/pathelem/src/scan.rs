//! Input file enumeration with extension filtering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PathError;
use crate::resolve;

/// Collect the input files named by a path argument.
///
/// A regular file resolves to a single-element list holding its absolute
/// path; the filter is ignored in that case. A directory yields the absolute
/// paths of its immediate non-directory entries, in no particular order and
/// without recursing.
///
/// `extension` filters directory entries and carries no dot (e.g. "txt" not
/// ".txt"); entries whose final segment lacks a dot, or whose suffix after
/// the last dot differs (case-sensitively) from the filter, are skipped. An
/// empty filter keeps every entry.
///
/// Returns [`PathError::NotFound`] if the argument does not exist.
pub fn extract_input_files(
    path: impl AsRef<Path>,
    extension: &str,
) -> Result<Vec<PathBuf>, PathError> {
    let abs_path = resolve::absolute(path)?;

    if !abs_path.is_dir() {
        return Ok(vec![abs_path]);
    }

    let mut input_files = Vec::new();
    for entry in fs::read_dir(&abs_path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            continue;
        }
        if !extension.is_empty() && !matches_extension(&entry.file_name(), extension) {
            continue;
        }
        input_files.push(entry_path);
    }
    Ok(input_files)
}

fn matches_extension(file_name: &std::ffi::OsStr, extension: &str) -> bool {
    let Some(name) = file_name.to_str() else {
        return false;
    };
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..] == extension,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canonicalized tempdir with a fixed population of entries.
    fn populated_dir() -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();

        fs::write(root.join("one.txt"), b"1").unwrap();
        fs::write(root.join("two.txt"), b"2").unwrap();
        fs::write(root.join("notes.TXT"), b"3").unwrap();
        fs::write(root.join("README"), b"4").unwrap();
        fs::write(root.join("graph.bin"), b"5").unwrap();
        fs::create_dir(root.join("nested.txt")).unwrap();

        (temp_dir, root)
    }

    fn sorted_names(files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_directory_filtered_by_extension() {
        let (_guard, root) = populated_dir();

        let files = extract_input_files(&root, "txt").unwrap();
        assert_eq!(sorted_names(&files), ["one.txt", "two.txt"]);
        for file in &files {
            assert!(file.is_absolute());
            assert_eq!(file.parent().unwrap(), root);
        }
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let (_guard, root) = populated_dir();

        let files = extract_input_files(&root, "TXT").unwrap();
        assert_eq!(sorted_names(&files), ["notes.TXT"]);
    }

    #[test]
    fn test_empty_filter_keeps_all_files() {
        let (_guard, root) = populated_dir();

        let files = extract_input_files(&root, "").unwrap();
        assert_eq!(
            sorted_names(&files),
            ["README", "graph.bin", "notes.TXT", "one.txt", "two.txt"]
        );
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let (_guard, root) = populated_dir();

        // nested.txt is a directory; the filter must not resurrect it
        let files = extract_input_files(&root, "txt").unwrap();
        assert!(sorted_names(&files).iter().all(|n| n != "nested.txt"));
    }

    #[test]
    fn test_regular_file_ignores_filter() {
        let (_guard, root) = populated_dir();
        let file_path = root.join("graph.bin");

        let files = extract_input_files(&file_path, "txt").unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let (_guard, root) = populated_dir();
        let missing = root.join("absent");

        match extract_input_files(&missing, "") {
            Err(PathError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
