//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - Use Caseのテストでは `mockall` のモックに差し替える

pub mod archive_repository;
pub mod file_repository;
pub mod output_repository;
