//! Stub generation pipeline for a single `code.py` file.
//!
//! Linear, no branching back: validate the file name, locate the source root,
//! check path depth, parse, render, write. Each early exit carries a distinct
//! [`StubError`] diagnostic and leaves no partial output behind.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rustpython_parser::{ast, parse, Mode};

use crate::errors::StubError;
use crate::roots::find_source_root;
use crate::stub::Declaration;

/// The only accepted input file name. Ignition stores every script as a
/// `code.py` under a directory named after the script itself.
pub const SOURCE_FILE_NAME: &str = "code.py";

/// Generate the stub for `src_path` under `stubs_root` and return the path of
/// the written `.pyi` file.
///
/// The stub lands at `<stubs_root>/<intermediate dirs>/<parent dir>.pyi`,
/// mirroring the file's directory chain relative to the discovered
/// `script-python` root, minus the last two segments; the parent directory of
/// `code.py` names the stub. Output is deterministic: identical source bytes
/// and root produce byte-identical stub text.
pub fn generate_stub(src_path: &Path, stubs_root: &Path) -> Result<PathBuf, StubError> {
    if !src_path.is_file() || src_path.file_name() != Some(OsStr::new(SOURCE_FILE_NAME)) {
        return Err(StubError::InvalidFileName(src_path.to_path_buf()));
    }

    // Resolve before the root walk: a relative invocation's ancestors never
    // reach the marker directory otherwise.
    let resolved = src_path.canonicalize()?;
    let source_root = find_source_root(&resolved)?;
    let rel_path = resolved
        .strip_prefix(&source_root)
        .map_err(|_| StubError::OutsideRoot(resolved.clone()))?
        .to_path_buf();

    let segments: Vec<&OsStr> = rel_path.iter().collect();
    if segments.len() < 2 {
        return Err(StubError::InsufficientDepth(rel_path.clone()));
    }
    let stub_name = segments[segments.len() - 2].to_string_lossy();
    let stub_dir = segments[..segments.len() - 2]
        .iter()
        .fold(stubs_root.to_path_buf(), |dir, part| dir.join(part));
    let stub_file = stub_dir.join(format!("{stub_name}.pyi"));
    fs::create_dir_all(&stub_dir)?;

    let source = fs::read_to_string(src_path)?;
    let module = parse(&source, Mode::Module, &src_path.display().to_string()).map_err(|e| {
        StubError::Syntax {
            path: src_path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let mut lines = collect_import_lines(&source);
    lines.push(format!("from typing import {}", crate::stub::ANY));
    lines.push(String::new());

    if let ast::Mod::Module(module) = &module {
        for stmt in &module.body {
            if let Some(decl) = Declaration::from_stmt(stmt, &source) {
                decl.render(0, &mut lines);
            }
        }
    }

    debug!("writing {} stub lines to {}", lines.len(), stub_file.display());
    fs::write(&stub_file, lines.join("\n") + "\n")?;
    Ok(stub_file)
}

/// Every raw source line starting with `import ` or `from `, verbatim and in
/// file order. A line-prefix match, not a tree walk; indented imports stay
/// out of the stub header.
fn collect_import_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| line.starts_with("import ") || line.starts_with("from "))
        .map(str::to_string)
        .collect()
}
