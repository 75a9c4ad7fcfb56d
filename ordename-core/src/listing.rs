use crate::error::{Error, Result};
use std::path::Path;

/// Strip a leading dot so `".png"` and `"png"` mean the same filter.
pub fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}

/// List regular files in `dir` whose name ends with `.{extension}`, sorted
/// lexicographically ascending by raw byte comparison.
///
/// Non-recursive: only direct children are considered, and subdirectories are
/// skipped even if their names match. The comparison is case-sensitive.
/// Filenames that are not valid UTF-8 are skipped. A missing or unreadable
/// directory is a [`Error::DirectoryNotFound`].
pub fn list_matching(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{extension}");

    let entries = std::fs::read_dir(dir).map_err(|source| Error::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(&suffix) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
