use clap::Parser;
use ordename_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Run {
            dirs,
            names,
            suit,
            ext,
            dry_run,
            output,
            quiet,
        } => run::handle_run(dirs, names, suit, &ext, dry_run, output, quiet, use_color),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");

            // Determine exit code based on error type
            let message = format!("{e:#}");
            let exit_code = if message.contains("already exists") {
                1 // Collision
            } else if message.contains("not found") || message.contains("empty") {
                2 // Invalid input
            } else {
                3 // Internal error
            };

            process::exit(exit_code);
        },
    }
}

fn handle_version(output: OutputFormat) -> anyhow::Result<()> {
    let version_result = VersionResult {
        name: "ordename".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let formatted = match output {
        OutputFormat::Json => version_result.format_json(),
        OutputFormat::Summary => version_result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}
