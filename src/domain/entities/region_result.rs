//! # RegionResult Entity
//!
//! マニフェストのメタデータとレポート本体を組み合わせた出力単位

use serde::Serialize;

use super::region_report::RegionReport;

/// 1リージョン分の出力レコード
///
/// レポートが存在しないリージョンでは `source_path` と `report` を
/// JSONから省略する（`null` にはしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionResult {
    pub region: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RegionReport>,
}

impl RegionResult {
    /// レポート無しのリージョン
    pub fn missing(region: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            file_name: file_name.into(),
            source_path: None,
            report: None,
        }
    }

    pub fn with_report(
        region: impl Into<String>,
        file_name: impl Into<String>,
        source_path: impl Into<String>,
        report: RegionReport,
    ) -> Self {
        Self {
            region: region.into(),
            file_name: file_name.into(),
            source_path: Some(source_path.into()),
            report: Some(report),
        }
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }
}
