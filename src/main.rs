// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            file,
            mode,
            output,
            simple,
            dry_run,
        }) => commands::cmd_convert(&file, mode.into(), output, simple, dry_run),
        Some(Commands::Inspect { file, json }) => commands::cmd_inspect(&file, json),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sbshift", &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No command provided, show help pointer
            println!("sbshift v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'sbshift --help' for usage information");
            Ok(())
        }
    }
}
