use std::path::Path;

use anyhow::Result;

use crate::index::StubIndex;

/// Prefixes shorter than this match nothing, keeping completion-style
/// queries from dumping the whole index.
const PREFIX_MIN_LENGTH: usize = 3;

/// Print the stub modules that export `symbol`, one per line. With `prefix`,
/// match symbols by case-insensitive prefix and print each with its modules.
pub fn run(stubs_root: &Path, symbol: &str, prefix: bool) -> Result<()> {
    let index = StubIndex::build(stubs_root)?;

    if prefix {
        let matches = index.prefix_lookup(symbol, PREFIX_MIN_LENGTH);
        if matches.is_empty() {
            println!("ℹ️ No stub symbols match prefix {symbol}");
        } else {
            for (name, modules) in matches {
                println!("{name}: {}", modules.join(", "));
            }
        }
        return Ok(());
    }

    let modules = index.lookup(symbol);
    if modules.is_empty() {
        println!("ℹ️ No stub module exports {symbol}");
    } else {
        for module in modules {
            println!("{module}");
        }
    }
    Ok(())
}
