use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use log::warn;
use walkdir::WalkDir;

use crate::commands::generate;
use crate::generate::SOURCE_FILE_NAME;

/// Walk `workspace_root` for `code.py` files and generate a stub for each.
///
/// Traversal is sorted so repeated runs report files in a stable order.
/// Per-file failures are printed by the single-file path and do not stop the
/// batch.
pub fn run(workspace_root: &Path, stubs_root: &Path) -> Result<()> {
    let mut found = 0usize;

    for entry in WalkDir::new(workspace_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == OsStr::new(SOURCE_FILE_NAME) {
            found += 1;
            println!("▶ {}", entry.path().display());
            generate::run(entry.path(), stubs_root);
        }
    }

    if found == 0 {
        println!("ℹ️ No {SOURCE_FILE_NAME} files found");
    } else {
        println!("✅ Finished generating stubs for {found} file(s)");
    }
    Ok(())
}
