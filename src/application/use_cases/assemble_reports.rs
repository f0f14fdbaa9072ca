//! # Assemble Reports Use Case
//!
//! マニフェストとリージョンレポートを組み合わせるユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::record::ManifestRecord;
use crate::domain::entities::region_result::RegionResult;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::services::region_resolver::RegionResolver;
use crate::domain::services::report_parser::ReportParser;

/// レポート組み立てユースケース
///
/// マニフェストの各レコードについてファイルを解決し、レポートをパースする。
/// どれか1つのリージョンでも失敗すれば全体を中断する（部分出力は無い）。
pub struct AssembleReportsUseCase<F: FileRepository> {
    file_repository: Arc<F>,
    resolver: RegionResolver,
}

impl<F: FileRepository> AssembleReportsUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - 展開済みファイルを読むリポジトリ
    /// * `resolver` - マニフェストの列名を知っているリゾルバ
    pub fn new(file_repository: Arc<F>, resolver: RegionResolver) -> Self {
        Self {
            file_repository,
            resolver,
        }
    }

    /// マニフェスト順にリージョン結果を組み立てる
    ///
    /// # Errors
    ///
    /// ファイルの解決・読み込み・パースに失敗した場合、対象リージョンを含むエラーを返す
    pub fn execute(
        &self,
        records: &[ManifestRecord],
        paths: &[PathBuf],
    ) -> Result<Vec<RegionResult>> {
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            results.push(self.assemble_region(record, paths)?);
        }

        let with_report = results.iter().filter(|r| r.has_report()).count();
        info!(
            "Assembled {} regions ({} with reports, {} without)",
            results.len(),
            with_report,
            results.len() - with_report
        );

        Ok(results)
    }

    fn assemble_region(&self, record: &ManifestRecord, paths: &[PathBuf]) -> Result<RegionResult> {
        let region = self.resolver.region(record)?;
        let file_name = self.resolver.file_name(record)?;

        let Some(path) = self.resolver.resolve(record, paths)? else {
            warn!("Couldn't find file for region: {}", region);
            return Ok(RegionResult::missing(region, file_name));
        };

        let raw = self.file_repository.read_bytes(&path)?;
        let report = ReportParser::parse(&raw).with_context(|| {
            format!(
                "Failed to parse report for region '{}' ({})",
                region,
                path.display()
            )
        })?;

        info!("Parsed {} rows for region {}", report.rows.len(), region);

        Ok(RegionResult::with_report(
            region,
            file_name,
            path.to_string_lossy(),
            report,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ReportError;
    use crate::domain::repositories::file_repository::MockFileRepository;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::Path;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    fn record(region: &str, file_name: &str) -> ManifestRecord {
        ManifestRecord::zip(&["Region", "iTunes Store Report"], &[region, file_name])
    }

    fn paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/cache/EU/EU_Summary.csv"),
            PathBuf::from("/cache/EU/FR_report.txt.gz"),
        ]
    }

    #[test]
    fn test_assemble_preserves_manifest_order() {
        let mut mock = MockFileRepository::new();
        mock.expect_read_bytes()
            .withf(|path| path == Path::new("/cache/EU/FR_report.txt.gz"))
            .times(1)
            .returning(|_| {
                Ok(gzip(
                    "Title\tUnits\nSong A\t5\nTotal\t5\nDate\t2024-01-01\nCurrency\tEUR\n",
                ))
            });

        let use_case = AssembleReportsUseCase::new(Arc::new(mock), RegionResolver::default());
        let records = vec![record("Andorra", "not found"), record("France", "FR_report.txt.gz")];

        let results = use_case.execute(&records, &paths()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].region, "Andorra");
        assert!(results[0].source_path.is_none());
        assert!(results[0].report.is_none());

        assert_eq!(results[1].region, "France");
        assert_eq!(
            results[1].source_path.as_deref(),
            Some("/cache/EU/FR_report.txt.gz")
        );
        let report = results[1].report.as_ref().unwrap();
        assert_eq!(report.rows[0].get("Title"), Some("Song A"));
        assert_eq!(report.totals.len(), 3);
    }

    #[test]
    fn test_missing_report_file_aborts() {
        let mut mock = MockFileRepository::new();
        mock.expect_read_bytes().times(0);

        let use_case = AssembleReportsUseCase::new(Arc::new(mock), RegionResolver::default());
        let records = vec![record("Italy", "IT_report.txt.gz")];

        let err = use_case.execute(&records, &paths()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::ReportNotFound { .. })
        ));
    }

    #[test]
    fn test_corrupt_report_aborts_with_region_context() {
        let mut mock = MockFileRepository::new();
        mock.expect_read_bytes()
            .returning(|_| Ok(b"not gzip".to_vec()));

        let use_case = AssembleReportsUseCase::new(Arc::new(mock), RegionResolver::default());
        let records = vec![record("France", "FR_report.txt.gz"), record("Andorra", "not found")];

        let err = use_case.execute(&records, &paths()).unwrap_err();
        assert!(err.to_string().contains("France"));
        assert!(err.chain().any(|cause| matches!(
            cause.downcast_ref::<ReportError>(),
            Some(ReportError::Decompression(_))
        )));
    }
}
