use anyhow::Result;
use ordename_core::{run_operation, suit_rank_names, OutputFormatter};
use std::path::PathBuf;

use crate::cli::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_run(
    dirs: Vec<PathBuf>,
    names: Vec<String>,
    suit: Option<String>,
    ext: &str,
    dry_run: bool,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let targets = match suit {
        Some(prefix) => suit_rank_names(&prefix),
        None => names,
    };

    // JSON output owns stdout; progress lines would corrupt it
    let suppress_progress = quiet || output == OutputFormat::Json;

    let (result, notice) = run_operation(
        &dirs,
        &targets,
        ext,
        dry_run,
        suppress_progress,
        use_color,
    )?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !quiet {
                if let Some(notice) = notice {
                    println!("{notice}");
                }
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
