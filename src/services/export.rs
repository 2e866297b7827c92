//! Writing CSV export artifacts to disk

use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// `<label>-<YYYY-MM-DD>.csv`
pub fn export_file_name(label: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", label, date.format("%Y-%m-%d"))
}

/// Write `bytes` as the export for `label` into `dir`, creating the
/// directory when needed. An export made on the same day replaces the
/// earlier one.
pub fn save_export(dir: &Path, label: &str, bytes: &[u8], date: NaiveDate) -> anyhow::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    }

    let path = dir.join(export_file_name(label, date));
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 29).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("api-logs", date()), "api-logs-2024-07-29.csv");
    }

    #[test]
    fn test_save_export_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");

        let path = save_export(&target, "payment-history", b"Date\n", date()).unwrap();

        assert_eq!(path, target.join("payment-history-2024-07-29.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Date\n");
    }

    #[test]
    fn test_same_day_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        save_export(dir.path(), "vehicle-details", b"old\n", date()).unwrap();
        let path = save_export(dir.path(), "vehicle-details", b"new\n", date()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new\n");
    }
}
