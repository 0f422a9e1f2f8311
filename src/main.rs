use anyhow::Result;
use clap::Parser;
use ignition_sift::cli::{Cli, Commands};
use ignition_sift::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { source, stubs_root } => {
            commands::generate::run(&source, &stubs_root);
            Ok(())
        }
        Commands::GenerateAll {
            workspace_root,
            stubs_root,
        } => commands::generate_all::run(&workspace_root, &stubs_root),
        Commands::InitStubs { stubs_root } => commands::init_stubs::run(&stubs_root),
        Commands::Lookup {
            stubs_root,
            symbol,
            prefix,
        } => commands::lookup::run(&stubs_root, &symbol, prefix),
    }
}
