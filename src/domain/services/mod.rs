//! # Domain Services
//!
//! 外部I/Oを持たない純粋なビジネスロジック
//!
//! - **ManifestParser**: マニフェストの特定とパース
//! - **RegionResolver**: マニフェストのファイル名をパスに解決
//! - **ReportParser**: リージョンレポートのパース

pub mod manifest_parser;
pub mod region_resolver;
pub mod report_parser;
