//! Source root discovery.
//!
//! Ignition projects keep user scripts under a `script-python` directory. The
//! directory that contains it is the project root, and stub paths are computed
//! relative to the marker itself.

use std::path::{Path, PathBuf};

use crate::errors::StubError;

/// Reserved directory name that marks an Ignition project's script tree.
pub const SOURCE_ROOT_MARKER: &str = "script-python";

/// Walk the ancestors of `path` and return the resolved path of the first
/// `script-python` marker directory found next to one of them.
///
/// Read-only probing; fails with [`StubError::RootNotFound`] when no ancestor
/// carries the marker.
pub fn find_source_root(path: &Path) -> Result<PathBuf, StubError> {
    for parent in path.ancestors().skip(1) {
        let candidate = parent.join(SOURCE_ROOT_MARKER);
        if candidate.is_dir() {
            return Ok(candidate.canonicalize()?);
        }
    }
    Err(StubError::RootNotFound(path.to_path_buf()))
}
