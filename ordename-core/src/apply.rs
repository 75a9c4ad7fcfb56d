use crate::error::{Error, Result};
use crate::pairing::RenamePair;
use std::path::Path;

/// Options for applying a set of rename pairs.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Report every pairing without touching the file system.
    pub dry_run: bool,
}

/// Apply rename pairs to `dir` in order, calling `report` once per rename.
///
/// Renames are performed sequentially via `std::fs::rename`; there is no
/// rollback, so a failure partway through leaves earlier renames in place.
/// A pair whose destination name is already occupied fails with
/// [`Error::Collision`] before the OS rename is attempted, so an existing
/// file is never overwritten. Pairs where the old and new name are equal are
/// skipped silently and do not count toward the returned total.
///
/// Returns the number of renames performed (or, in dry-run mode, that would
/// have been performed).
pub fn apply_pairs(
    dir: &Path,
    pairs: &[RenamePair],
    options: &ApplyOptions,
    mut report: impl FnMut(&RenamePair),
) -> Result<usize> {
    let mut performed = 0;

    for pair in pairs {
        if pair.old_name == pair.new_name {
            continue;
        }

        let old_path = dir.join(&pair.old_name);
        let new_path = dir.join(&pair.new_name);

        if new_path.exists() {
            return Err(Error::Collision {
                from: pair.old_name.clone(),
                to: pair.new_name.clone(),
            });
        }

        if !options.dry_run {
            std::fs::rename(&old_path, &new_path)?;
        }

        report(pair);
        performed += 1;
    }

    Ok(performed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn pair(old: &str, new: &str) -> RenamePair {
        RenamePair {
            old_name: old.to_string(),
            new_name: new.to_string(),
        }
    }

    #[test]
    fn renames_in_order_and_reports() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.png");
        touch(temp.path(), "b.png");

        let pairs = vec![pair("a.png", "X.png"), pair("b.png", "Y.png")];
        let mut reported = Vec::new();
        let performed = apply_pairs(temp.path(), &pairs, &ApplyOptions::default(), |p| {
            reported.push((p.old_name.clone(), p.new_name.clone()));
        })
        .unwrap();

        assert_eq!(performed, 2);
        assert_eq!(
            reported,
            vec![
                ("a.png".to_string(), "X.png".to_string()),
                ("b.png".to_string(), "Y.png".to_string()),
            ]
        );
        assert!(temp.path().join("X.png").exists());
        assert!(temp.path().join("Y.png").exists());
        assert!(!temp.path().join("a.png").exists());
    }

    #[test]
    fn collision_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.png");
        touch(temp.path(), "X.png");

        let pairs = vec![pair("a.png", "X.png")];
        let err = apply_pairs(temp.path(), &pairs, &ApplyOptions::default(), |_| {}).unwrap_err();

        assert!(matches!(err, Error::Collision { .. }));
        // Neither file was touched
        assert!(temp.path().join("a.png").exists());
        assert!(temp.path().join("X.png").exists());
    }

    #[test]
    fn failure_leaves_earlier_renames_in_place() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.png");
        touch(temp.path(), "b.png");
        touch(temp.path(), "Y.png");

        let pairs = vec![pair("a.png", "X.png"), pair("b.png", "Y.png")];
        let err = apply_pairs(temp.path(), &pairs, &ApplyOptions::default(), |_| {}).unwrap_err();

        assert!(matches!(err, Error::Collision { .. }));
        // No rollback: the first rename stays applied
        assert!(temp.path().join("X.png").exists());
        assert!(!temp.path().join("a.png").exists());
        assert!(temp.path().join("b.png").exists());
    }

    #[test]
    fn identity_pairs_are_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "X.png");

        let pairs = vec![pair("X.png", "X.png")];
        let mut reported = 0;
        let performed = apply_pairs(temp.path(), &pairs, &ApplyOptions::default(), |_| {
            reported += 1;
        })
        .unwrap();

        assert_eq!(performed, 0);
        assert_eq!(reported, 0);
        assert!(temp.path().join("X.png").exists());
    }

    #[test]
    fn dry_run_reports_without_renaming() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.png");

        let pairs = vec![pair("a.png", "X.png")];
        let options = ApplyOptions { dry_run: true };
        let mut reported = 0;
        let performed = apply_pairs(temp.path(), &pairs, &options, |_| {
            reported += 1;
        })
        .unwrap();

        assert_eq!(performed, 1);
        assert_eq!(reported, 1);
        assert!(temp.path().join("a.png").exists());
        assert!(!temp.path().join("X.png").exists());
    }

    #[test]
    fn missing_source_propagates_io_error() {
        let temp = TempDir::new().unwrap();

        let pairs = vec![pair("gone.png", "X.png")];
        let err = apply_pairs(temp.path(), &pairs, &ApplyOptions::default(), |_| {}).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
