use serde::{Deserialize, Serialize};

/// A single old-name/new-name pairing within one directory.
///
/// Holds basenames only; the owning directory is supplied when the pair is
/// applied to the file system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

/// Pair sorted source filenames with target basenames by position.
///
/// The i-th entry of `sorted_names` pairs with the i-th entry of
/// `target_names`; the new filename is the target basename with `extension`
/// appended. Entries beyond the shorter of the two sequences produce no pair,
/// so the result always has `min(sorted_names.len(), target_names.len())`
/// elements. Pure function, no file-system access; callers are responsible
/// for `sorted_names` actually being in the order they want paired.
///
/// `extension` must already be normalized (no leading dot); see
/// [`crate::listing::normalize_extension`].
pub fn pair_by_order(
    sorted_names: &[String],
    target_names: &[String],
    extension: &str,
) -> Vec<RenamePair> {
    sorted_names
        .iter()
        .zip(target_names.iter())
        .map(|(old, target)| RenamePair {
            old_name: old.clone(),
            new_name: format!("{target}.{extension}"),
        })
        .collect()
}
