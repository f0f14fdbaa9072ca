//! Zip Archive Repository Implementation
//!
//! ArchiveRepositoryのzip実装

use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::archive_entry::ArchiveEntry;
use crate::domain::errors::ReportError;
use crate::domain::repositories::archive_repository::ArchiveRepository;

/// zipアーカイブを展開するリポジトリ
pub struct ZipArchiveRepository;

impl ZipArchiveRepository {
    pub fn new() -> Self {
        Self
    }

    fn archive_error(archive_path: &Path, message: String) -> ReportError {
        ReportError::Archive {
            path: archive_path.to_path_buf(),
            message,
        }
    }
}

impl ArchiveRepository for ZipArchiveRepository {
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<Vec<ArchiveEntry>> {
        let file = fs::File::open(archive_path)
            .map_err(|e| Self::archive_error(archive_path, format!("Failed to open: {e}")))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            Self::archive_error(archive_path, format!("Invalid or corrupt ZIP: {e}"))
        })?;

        fs::create_dir_all(dest_dir)
            .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| {
                Self::archive_error(archive_path, format!("Failed to read entry {i}: {e}"))
            })?;

            let relative_path: PathBuf = match entry.enclosed_name() {
                Some(p) => p.to_path_buf(),
                None => {
                    warn!("Skipping unsafe archive entry: {}", entry.name());
                    continue;
                }
            };

            let output_path = dest_dir.join(&relative_path);

            if entry.is_dir() {
                fs::create_dir_all(&output_path)
                    .with_context(|| format!("Failed to create {}", output_path.display()))?;
                continue;
            }

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let mut outfile = fs::File::create(&output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| {
                Self::archive_error(
                    archive_path,
                    format!("Failed to extract {}: {e}", relative_path.display()),
                )
            })?;

            entries.push(ArchiveEntry::new(relative_path, output_path));
        }

        Ok(entries)
    }
}

impl Default for ZipArchiveRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
        let zip_path = dir.join(name);
        let file = fs::File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        for (entry_name, content) in files {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        zip_path
    }

    #[test]
    fn test_extract_preserves_structure_and_order() {
        let dir = TempDir::new().unwrap();
        let zip_path = create_test_zip(
            dir.path(),
            "EU.zip",
            &[
                ("EU_Summary.csv", b"Region,iTunes Store Report\n"),
                ("reports/FR_report.txt.gz", b"gz"),
            ],
        );
        let dest = dir.path().join("cache/EU");

        let entries = ZipArchiveRepository::new().extract(&zip_path, &dest).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].relative_path, PathBuf::from("EU_Summary.csv"));
        assert_eq!(entries[1].extracted_path, dest.join("reports/FR_report.txt.gz"));
        assert_eq!(fs::read(dest.join("reports/FR_report.txt.gz")).unwrap(), b"gz");
    }

    #[test]
    fn test_extract_overwrites_on_rerun() {
        let dir = TempDir::new().unwrap();
        let zip_path = create_test_zip(dir.path(), "EU.zip", &[("a.txt", b"new")]);
        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("a.txt"), b"old contents").unwrap();

        let repo = ZipArchiveRepository::new();
        repo.extract(&zip_path, &dest).unwrap();
        repo.extract(&zip_path, &dest).unwrap();

        assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"new");
    }

    #[test]
    fn test_extract_corrupt_archive() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("broken.zip");
        fs::write(&zip_path, b"this is not a zip").unwrap();

        let err = ZipArchiveRepository::new()
            .extract(&zip_path, &dir.path().join("out"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Archive { .. })
        ));
    }

    #[test]
    fn test_extract_missing_archive() {
        let dir = TempDir::new().unwrap();
        let err = ZipArchiveRepository::new()
            .extract(&dir.path().join("missing.zip"), &dir.path().join("out"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Archive { .. })
        ));
    }

    #[test]
    fn test_extract_skips_escaping_entries_and_omits_directories() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("EU.zip");
        let file = fs::File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        writer.start_file("../evil.txt", options).unwrap();
        writer.write_all(b"outside").unwrap();
        writer.add_directory("reports/", options).unwrap();
        writer.start_file("EU_Summary.csv", options).unwrap();
        writer.write_all(b"Region,iTunes Store Report\n").unwrap();
        writer.finish().unwrap();

        let dest = dir.path().join("cache/EU");
        let entries = ZipArchiveRepository::new().extract(&zip_path, &dest).unwrap();

        assert_eq!(
            entries,
            vec![ArchiveEntry::new("EU_Summary.csv", dest.join("EU_Summary.csv"))]
        );
        assert!(dest.join("reports").is_dir());
        assert!(!dir.path().join("cache/evil.txt").exists());
        assert!(!dir.path().join("evil.txt").exists());
    }
}
