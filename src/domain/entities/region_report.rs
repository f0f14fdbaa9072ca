//! # RegionReport Entity
//!
//! リージョン別レポートのパース結果

use serde::Serialize;

use super::record::Record;

/// 合計ブロックの行数（ベンダーフォーマットで固定）
pub const TOTALS_LINE_COUNT: usize = 3;

/// パース済みのリージョンレポート
///
/// `header` は行のキー順を決めるためだけに保持し、JSONには出力しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    #[serde(skip)]
    pub header: Vec<String>,
    pub rows: Vec<Record>,
    pub totals: Record,
}

impl RegionReport {
    pub fn new(header: Vec<String>, rows: Vec<Record>, totals: Record) -> Self {
        Self {
            header,
            rows,
            totals,
        }
    }
}
