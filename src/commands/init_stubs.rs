use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Hand-written stubs for the Java APIs reachable from Jython, shipped with
/// the binary. Relative destination path paired with file contents.
pub const BUILTIN_STUBS: &[(&str, &str)] = &[(
    "javax/imageio/__init__.py",
    include_str!("../../stubs/javax/imageio/__init__.py"),
)];

/// Copy the bundled stubs into `stubs_root`, creating directories as needed.
/// Existing files are never overwritten: user-generated stubs win.
pub fn run(stubs_root: &Path) -> Result<()> {
    for (rel, contents) in BUILTIN_STUBS {
        let dest = stubs_root.join(rel);
        if dest.exists() {
            println!("↷ Skipped (exists): {}", dest.display());
            continue;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&dest, contents).with_context(|| format!("writing {}", dest.display()))?;
        println!("Copied: {}", dest.display());
    }
    println!("✅ Ignition stubs initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn materializes_bundled_stubs() {
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();

        let imageio = dir.path().join("javax/imageio/__init__.py");
        let contents = fs::read_to_string(&imageio).unwrap();
        assert!(contents.contains("class ImageIO:"));
        assert!(contents.contains("getWriterFormatNames"));
    }

    #[test]
    fn never_overwrites_existing_files() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("javax/imageio/__init__.py");
        fs::create_dir_all(dest.parent().unwrap()).unwrap();
        fs::write(&dest, "# user edited\n").unwrap();

        run(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "# user edited\n");
    }
}
