use std::path::Path;

use crate::generate::generate_stub;

/// Run stub generation for one file, reporting the outcome on stdout.
///
/// All recognized failures are printed and swallowed; the process continues
/// (and exits zero) either way.
pub fn run(source: &Path, stubs_root: &Path) {
    match generate_stub(source, stubs_root) {
        Ok(stub_file) => println!("✅ Stub written to: {}", stub_file.display()),
        Err(err) => println!("{err}"),
    }
}
