//! CLI command implementations.
//!
//! Each submodule handles one subcommand:
//! - **generate**: stub one `code.py` file
//! - **generate_all**: stub every `code.py` under a workspace
//! - **init_stubs**: materialize the bundled Ignition stubs
//! - **lookup**: query the stub symbol index
//!
//! Generation failures are diagnostics, not process errors: the commands print
//! them and return `Ok`, so a batch run never dies on one bad file.

pub mod generate;
pub mod generate_all;
pub mod init_stubs;
pub mod lookup;
