//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ExtractArchiveUseCase**: レポートバンドルの展開
//! - **ReadManifestUseCase**: マニフェストの読み込み
//! - **AssembleReportsUseCase**: リージョンレポートの解決・パース・組み立て
//! - **WriteReportsUseCase**: JSONの書き出し

pub mod assemble_reports;
pub mod extract_archive;
pub mod read_manifest;
pub mod write_reports;
