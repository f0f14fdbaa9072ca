//! # Domain Errors
//!
//! レポート処理パイプラインで発生する致命的なエラー
//!
//! どのエラーもリトライせず、トップレベルまでそのまま伝播して実行を中断する。
//! 「リージョンにレポートが無い」ケースはエラーではなく `None` で表現する。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// アーカイブが開けない、またはエントリが読めない
    #[error("Failed to read archive {path:?}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("Manifest matching '{marker}' not found in extracted files: {paths:?}")]
    ManifestNotFound { marker: String, paths: Vec<PathBuf> },

    #[error("Failed to parse manifest: {0}")]
    ManifestParse(#[from] csv::Error),

    /// マニフェストが宣言したファイルが展開結果に存在しない
    #[error("Report file '{file_name}' for region '{region}' not found in extracted files")]
    ReportNotFound { region: String, file_name: String },

    #[error("Manifest record is missing column '{column}'")]
    MissingColumn { column: String },

    #[error("Failed to decompress region report: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("Region report has {lines} lines, expected a header and 3 totals lines")]
    ReportTooShort { lines: usize },

    #[error("Malformed totals line {line_number}: {reason}")]
    MalformedTotals { line_number: usize, reason: String },

    #[error("Input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No zip archive found in directory: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
