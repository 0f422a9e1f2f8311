//! Diagnostic errors for stub generation.
//!
//! Every recognized failure skips the current file instead of aborting the
//! process: the command layer prints the diagnostic and carries on. The
//! messages here are the user-facing text, so each variant renders a complete,
//! distinct line.

use std::path::PathBuf;
use thiserror::Error;

/// Why stub generation was skipped for a source file.
#[derive(Debug, Error)]
pub enum StubError {
    /// The input is missing or not literally named `code.py`.
    #[error("🚫 Not a valid code.py file: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// No ancestor directory contains the `script-python` marker.
    #[error("❌ Could not determine source root from: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A marker directory exists, but the source file is not inside it.
    #[error("❌ Source file is not under the source root: {}", .0.display())]
    OutsideRoot(PathBuf),

    /// The file sits directly under the source root, so there is no parent
    /// directory to name the stub after.
    #[error("🚫 Not enough depth to determine stub name: {}", .0.display())]
    InsufficientDepth(PathBuf),

    /// The source did not parse as a Python module.
    #[error("⚠️ Syntax error in {}: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
