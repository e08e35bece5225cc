//! Decomposition of a path into directory, stem and extension.
//!
//! Command-line tools use [`FileElem`] to derive generated file names from
//! their inputs: decompose the input path, optionally redirect the directory
//! and swap the extension, then reassemble with [`FileElem::get_fname`].

use std::path::{Path, PathBuf};

use crate::error::PathError;
use crate::resolve;

/// A path split into its directory, stem and extension.
///
/// Built once from an input path and never mutated afterward. The extension
/// runs from the final `.` of the final path segment to its end, leading dot
/// included; a segment without a dot has an empty extension.
///
/// # Example
///
/// ```
/// use pathelem::FileElem;
///
/// let elem = FileElem::new("data/./corpus/../input.tar.gz");
/// assert_eq!(elem.directory, "data");
/// assert_eq!(elem.stem, "input.tar");
/// assert_eq!(elem.extension, ".gz");
/// assert_eq!(elem.get_fname(), "data/input.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileElem {
    /// Directory portion; "." when the input has no directory component.
    pub directory: String,

    /// Final segment without its extension.
    pub stem: String,

    /// Extension with leading '.'; empty if the segment has none.
    pub extension: String,
}

impl FileElem {
    /// Decompose a raw path string.
    ///
    /// The path is normalized lexically first and need not exist.
    pub fn new(input: &str) -> Self {
        let normalized = resolve::normalize(input);

        let directory = normalized
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| ".".to_string());

        let segment = normalized
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (stem, extension) = match segment.rfind('.') {
            Some(dot) => (segment[..dot].to_string(), segment[dot..].to_string()),
            None => (segment, String::new()),
        };

        FileElem {
            directory,
            stem,
            extension,
        }
    }

    /// Decompose a raw path string, redirecting the result for output.
    ///
    /// A supplied output directory replaces the derived directory and must
    /// already exist; otherwise [`PathError::InvalidOutputDirectory`] is
    /// returned and the caller decides how to react. A trailing separator is
    /// stripped. A supplied non-empty extension replaces the derived one;
    /// its leading dot is optional.
    pub fn with_output(
        input: &str,
        out_dir: Option<&str>,
        new_ext: Option<&str>,
    ) -> Result<Self, PathError> {
        let mut elem = Self::new(input);

        if let Some(dir) = out_dir.filter(|d| !d.is_empty()) {
            if !Path::new(dir).exists() {
                return Err(PathError::InvalidOutputDirectory {
                    path: PathBuf::from(dir),
                });
            }
            elem.directory = dir.strip_suffix('/').unwrap_or(dir).to_string();
        }

        if let Some(ext) = new_ext.filter(|e| !e.is_empty()) {
            elem.extension = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            };
        }

        Ok(elem)
    }

    /// Reassemble `directory + "/" + stem + extension`.
    ///
    /// Pure; performs no filesystem access.
    pub fn get_fname(&self) -> String {
        format!("{}/{}{}", self.directory, self.stem, self.extension)
    }
}
