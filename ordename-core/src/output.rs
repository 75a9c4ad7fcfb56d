use crate::pairing::RenamePair;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Outcome for a single processed directory
#[derive(Debug, Serialize, Deserialize)]
pub struct DirOutcome {
    pub directory: PathBuf,
    /// Files matching the extension filter before renaming
    pub matched: usize,
    pub renamed: usize,
    /// Matching files left untouched (beyond the target list, or already named)
    pub unchanged: usize,
    pub pairs: Vec<RenamePair>,
}

/// Result of a run operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub extension: String,
    pub target_count: usize,
    pub renamed: usize,
    pub dry_run: bool,
    pub directories: Vec<DirOutcome>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "extension": self.extension,
            "dry_run": self.dry_run,
            "summary": {
                "directories": self.directories.len(),
                "target_count": self.target_count,
                "renamed": self.renamed,
            },
            "directories": self.directories,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for dir in &self.directories {
            writeln!(
                output,
                "{}: {} renamed, {} unchanged ({} matched *.{})",
                dir.directory.display(),
                dir.renamed,
                dir.unchanged,
                dir.matched,
                self.extension
            )
            .unwrap();
        }

        if self.dry_run {
            writeln!(
                output,
                "Dry run: {} renames planned, nothing changed",
                self.renamed
            )
            .unwrap();
        } else {
            writeln!(output, "Renamed {} files", self.renamed).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
