//! # pathelem
//!
//! Path normalization and decomposition for command-line tools.
//!
//! This library provides functionality to:
//! - Resolve file arguments to canonical absolute paths
//! - Split a path into directory, stem and extension
//! - Rewrite the output directory and extension for generated file names
//! - Enumerate the files in a directory, filtered by extension
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Every .txt file directly under the corpus directory
//! let inputs = pathelem::extract_input_files("corpus", "txt")?;
//!
//! for input in &inputs {
//!     // graph.txt -> out/graph.bin
//!     let elem = pathelem::FileElem::with_output(
//!         &input.to_string_lossy(),
//!         Some("out"),
//!         Some("bin"),
//!     )?;
//!     println!("{} -> {}", input.display(), elem.get_fname());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! All operations are synchronous and stateless; filesystem objects are
//! read-only inputs and are never mutated.

pub mod elem;
pub mod error;
pub mod resolve;
pub mod scan;

// Re-export commonly used items
#[doc(inline)]
pub use elem::FileElem;
#[doc(inline)]
pub use error::PathError;
#[doc(inline)]
pub use resolve::{absolute, basename, exists, normalize};
#[doc(inline)]
pub use scan::extract_input_files;
