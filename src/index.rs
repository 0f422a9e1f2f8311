//! Symbol index over a generated stub tree.
//!
//! Walks every `.pyi` file under a stubs root and records each top-level
//! `class`/`def` name against the dotted module path derived from the file's
//! location. Editors use this to answer "which module exports `Foo`?" without
//! re-reading stub files on every keystroke.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(class|def)\s+([A-Za-z_][A-Za-z0-9_]*)\b").unwrap());

/// Map of top-level symbol name to the stub modules that export it.
#[derive(Debug, Default)]
pub struct StubIndex {
    symbols: BTreeMap<String, Vec<String>>,
}

impl StubIndex {
    /// Build an index from every `.pyi` file under `stubs_root`. A missing
    /// root yields an empty index rather than an error.
    pub fn build(stubs_root: &Path) -> Result<StubIndex> {
        let mut index = StubIndex::default();
        if !stubs_root.is_dir() {
            return Ok(index);
        }

        for entry in WalkDir::new(stubs_root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension() == Some("pyi".as_ref())
            {
                index.index_file(stubs_root, entry.path())?;
            }
        }
        Ok(index)
    }

    fn index_file(&mut self, root: &Path, file: &Path) -> Result<()> {
        let rel = file
            .strip_prefix(root)
            .with_context(|| format!("stub outside root: {}", file.display()))?;
        let module = module_path(rel);
        let contents =
            fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

        for line in contents.lines() {
            // Anchored match keeps indented (nested) definitions out.
            if let Some(caps) = SYMBOL_RE.captures(line) {
                self.symbols
                    .entry(caps[2].to_string())
                    .or_default()
                    .push(module.clone());
            }
        }
        Ok(())
    }

    /// Modules exporting exactly `name`.
    pub fn lookup(&self, name: &str) -> &[String] {
        self.symbols
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Case-insensitive prefix search. Prefixes shorter than `min_length`
    /// return nothing, keeping completion queries cheap.
    pub fn prefix_lookup(&self, prefix: &str, min_length: usize) -> BTreeMap<String, Vec<String>> {
        let mut results = BTreeMap::new();
        if prefix.chars().count() < min_length {
            return results;
        }
        let needle = prefix.to_lowercase();
        for (symbol, modules) in &self.symbols {
            if symbol.to_lowercase().starts_with(&needle) {
                results.insert(symbol.clone(), modules.clone());
            }
        }
        results
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Dotted module path for a stub file relative to the stubs root: strip the
/// `.pyi` extension and collapse a trailing `__init__` into its package.
fn module_path(rel: &Path) -> String {
    let mut parts: Vec<String> = rel
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();
    if let Some(last) = parts.last_mut() {
        if let Some(stem) = last.strip_suffix(".pyi") {
            *last = stem.to_string();
        }
    }
    if parts.last().map(|s| s == "__init__").unwrap_or(false) {
        parts.pop();
    }
    parts.join(".")
}
