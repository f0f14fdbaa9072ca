//! Archive Adapters
//!
//! アーカイブ形式ごとの展開実装

pub mod zip_archive_repository;
