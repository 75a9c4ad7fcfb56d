use crate::apply::{apply_pairs, ApplyOptions};
use crate::error::Error;
use crate::listing::{list_matching, normalize_extension};
use crate::output::{DirOutcome, RunResult};
use crate::pairing::pair_by_order;
use anyhow::{Context, Result};
use nu_ansi_term::Color as AnsiColor;
use std::path::PathBuf;

/// Run operation - returns structured data
///
/// Lists, pairs, and renames each directory in order. Progress is printed
/// line-by-line as renames happen (suppressed by `quiet`); when more than one
/// directory is given, each line is prefixed with its directory. Errors abort
/// the run where they occur; renames already performed stay in place.
pub fn run_operation(
    dirs: &[PathBuf],
    target_names: &[String],
    extension: &str,
    dry_run: bool,
    quiet: bool,
    use_color: bool,
) -> Result<(RunResult, Option<String>)> {
    if target_names.is_empty() {
        return Err(Error::EmptyTargetList.into());
    }

    let extension = normalize_extension(extension);
    let annotate_dir = dirs.len() > 1;
    let apply_options = ApplyOptions { dry_run };

    let mut outcomes = Vec::with_capacity(dirs.len());
    let mut total_renamed = 0;

    for dir in dirs {
        let sorted_names = list_matching(dir, &extension)
            .with_context(|| format!("Failed to list {}", dir.display()))?;

        let pairs = pair_by_order(&sorted_names, target_names, &extension);

        let renamed = apply_pairs(dir, &pairs, &apply_options, |pair| {
            if quiet {
                return;
            }
            let line = if use_color {
                format!(
                    "{} -> {}",
                    AnsiColor::Red.paint(&pair.old_name),
                    AnsiColor::Green.paint(&pair.new_name)
                )
            } else {
                format!("{} -> {}", pair.old_name, pair.new_name)
            };
            if annotate_dir {
                println!("{}: {}", dir.display(), line);
            } else {
                println!("{line}");
            }
        })
        .with_context(|| format!("Failed to rename files in {}", dir.display()))?;

        total_renamed += renamed;
        outcomes.push(DirOutcome {
            directory: dir.clone(),
            matched: sorted_names.len(),
            renamed,
            unchanged: sorted_names.len() - renamed,
            pairs,
        });
    }

    let notice = if outcomes.iter().all(|o| o.matched == 0) {
        Some(format!("No files matching *.{extension} found"))
    } else {
        None
    };

    Ok((
        RunResult {
            extension,
            target_count: target_names.len(),
            renamed: total_renamed,
            dry_run,
            directories: outcomes,
        },
        notice,
    ))
}
