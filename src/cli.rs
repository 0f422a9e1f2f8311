//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ignition-sift",
    about = "Generate Python type stubs for Ignition script-python projects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a stub for a single code.py file
    Generate {
        /// Path to the code.py source file
        source: PathBuf,
        /// Directory the stub tree is mirrored under
        stubs_root: PathBuf,
    },
    /// Generate stubs for every code.py under a workspace
    GenerateAll {
        /// Workspace directory to scan
        workspace_root: PathBuf,
        /// Directory the stub tree is mirrored under
        stubs_root: PathBuf,
    },
    /// Copy the bundled Ignition stubs into a stubs root
    InitStubs {
        /// Directory the bundled stubs are copied into
        stubs_root: PathBuf,
    },
    /// List the stub modules that export a symbol
    Lookup {
        /// Directory containing generated .pyi stubs
        stubs_root: PathBuf,
        /// Symbol name to look up
        symbol: String,
        /// Match symbols by case-insensitive prefix instead of exact name
        #[arg(long)]
        prefix: bool,
    },
}
