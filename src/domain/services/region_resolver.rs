//! # Region Resolver Service
//!
//! マニフェストに記載されたファイル名を展開済みファイルのパスに解決する

use std::path::{Path, PathBuf};

use crate::domain::entities::record::ManifestRecord;
use crate::domain::errors::ReportError;

/// レポートが存在しないリージョンを示すマニフェスト上の値
pub const NOT_FOUND_SENTINEL: &str = "not found";

pub const DEFAULT_REGION_COLUMN: &str = "Region";
pub const DEFAULT_FILE_NAME_COLUMN: &str = "iTunes Store Report";

/// リージョン解決サービス
#[derive(Debug, Clone)]
pub struct RegionResolver {
    region_column: String,
    file_name_column: String,
}

impl RegionResolver {
    pub fn new(region_column: impl Into<String>, file_name_column: impl Into<String>) -> Self {
        Self {
            region_column: region_column.into(),
            file_name_column: file_name_column.into(),
        }
    }

    pub fn region<'a>(&self, record: &'a ManifestRecord) -> Result<&'a str, ReportError> {
        column(record, &self.region_column)
    }

    pub fn file_name<'a>(&self, record: &'a ManifestRecord) -> Result<&'a str, ReportError> {
        column(record, &self.file_name_column)
    }

    /// レコードのファイル名をパスに解決する
    ///
    /// ファイル名がセンチネル `"not found"` なら `Ok(None)`。
    /// それ以外はファイル名の完全一致を優先し、無ければ部分文字列一致の先頭を返す。
    ///
    /// # Errors
    ///
    /// - 列が無い場合 `ReportError::MissingColumn`
    /// - ファイル名が空、または一致するパスが無い場合 `ReportError::ReportNotFound`
    pub fn resolve(
        &self,
        record: &ManifestRecord,
        paths: &[PathBuf],
    ) -> Result<Option<PathBuf>, ReportError> {
        let file_name = self.file_name(record)?;
        if file_name == NOT_FOUND_SENTINEL {
            return Ok(None);
        }

        // 空文字はどのパスにも部分一致してしまう
        let found = if file_name.trim().is_empty() {
            None
        } else {
            find_path(file_name, paths)
        };

        match found {
            Some(path) => Ok(Some(path.to_path_buf())),
            None => Err(ReportError::ReportNotFound {
                region: self.region(record)?.to_string(),
                file_name: file_name.to_string(),
            }),
        }
    }
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_COLUMN, DEFAULT_FILE_NAME_COLUMN)
    }
}

fn column<'a>(record: &'a ManifestRecord, name: &str) -> Result<&'a str, ReportError> {
    record.get(name).ok_or_else(|| ReportError::MissingColumn {
        column: name.to_string(),
    })
}

fn find_path<'a>(file_name: &str, paths: &'a [PathBuf]) -> Option<&'a Path> {
    // "FR.txt.gz" が "FR.txt.gz.old" に部分一致するのを避けるため完全一致が先
    let exact = paths.iter().find(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy() == file_name)
            .unwrap_or(false)
    });

    exact
        .or_else(|| {
            paths
                .iter()
                .find(|p| p.to_string_lossy().contains(file_name))
        })
        .map(|p| p.as_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, file_name: &str) -> ManifestRecord {
        ManifestRecord::zip(
            &[DEFAULT_REGION_COLUMN, DEFAULT_FILE_NAME_COLUMN],
            &[region, file_name],
        )
    }

    fn paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/cache/EU/EU_Summary.csv"),
            PathBuf::from("/cache/EU/FR_report.txt.gz"),
            PathBuf::from("/cache/EU/DE_report.txt.gz"),
        ]
    }

    #[test]
    fn test_sentinel_is_absent_not_error() {
        let resolver = RegionResolver::default();
        let result = resolver.resolve(&record("Andorra", "not found"), &paths());
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_resolve_exact_match() {
        let resolver = RegionResolver::default();
        let result = resolver
            .resolve(&record("France", "FR_report.txt.gz"), &paths())
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/cache/EU/FR_report.txt.gz")));
    }

    #[test]
    fn test_resolve_substring_match() {
        let resolver = RegionResolver::default();
        let result = resolver
            .resolve(&record("Germany", "DE_report"), &paths())
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/cache/EU/DE_report.txt.gz")));
    }

    #[test]
    fn test_exact_match_preferred_over_earlier_substring() {
        let paths = vec![
            PathBuf::from("/cache/EU/FR_report.txt.gz.bak"),
            PathBuf::from("/cache/EU/FR_report.txt.gz"),
        ];
        let resolver = RegionResolver::default();
        let result = resolver
            .resolve(&record("France", "FR_report.txt.gz"), &paths)
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/cache/EU/FR_report.txt.gz")));
    }

    #[test]
    fn test_missing_file_is_error() {
        let resolver = RegionResolver::default();
        let result = resolver.resolve(&record("Italy", "IT_report.txt.gz"), &paths());

        match result {
            Err(ReportError::ReportNotFound { region, file_name }) => {
                assert_eq!(region, "Italy");
                assert_eq!(file_name, "IT_report.txt.gz");
            }
            other => panic!("expected ReportNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_error() {
        let resolver = RegionResolver::new("Region", "Report File");
        let result = resolver.resolve(&record("France", "FR_report.txt.gz"), &paths());
        assert!(matches!(result, Err(ReportError::MissingColumn { .. })));
    }

    #[test]
    fn test_empty_file_name_is_not_found() {
        let resolver = RegionResolver::default();

        for file_name in ["", "  "] {
            let result = resolver.resolve(&record("France", file_name), &paths());
            assert!(
                matches!(result, Err(ReportError::ReportNotFound { ref region, .. }) if region == "France"),
                "unexpected result for {:?}: {:?}",
                file_name,
                result
            );
        }
    }
}
