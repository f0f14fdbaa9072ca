//! # Extract Archive Use Case
//!
//! レポートバンドル展開ユースケース

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::archive_entry::ArchiveEntry;
use crate::domain::repositories::archive_repository::ArchiveRepository;

/// レポートバンドル展開ユースケース
///
/// zipアーカイブをキャッシュディレクトリに展開する
pub struct ExtractArchiveUseCase<A: ArchiveRepository> {
    archive_repository: Arc<A>,
}

impl<A: ArchiveRepository> ExtractArchiveUseCase<A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `archive_repository` - アーカイブリポジトリ
    pub fn new(archive_repository: Arc<A>) -> Self {
        Self { archive_repository }
    }

    /// アーカイブを展開する
    ///
    /// # Arguments
    ///
    /// * `archive_path` - zipアーカイブのパス
    /// * `dest_dir` - 展開先ディレクトリ
    ///
    /// # Returns
    ///
    /// 展開されたエントリのリスト（アーカイブ内の順序）
    ///
    /// # Errors
    ///
    /// アーカイブの読み込みまたは書き込みに失敗した場合にエラーを返す
    pub fn execute(&self, archive_path: &Path, dest_dir: &Path) -> Result<Vec<ArchiveEntry>> {
        info!("Extracting {} to {}", archive_path.display(), dest_dir.display());

        let entries = self
            .archive_repository
            .extract(archive_path, dest_dir)
            .with_context(|| format!("Failed to extract {}", archive_path.display()))?;

        for entry in &entries {
            debug!("Extracted {}", entry.extracted_path.display());
        }
        info!("Extracted {} files", entries.len());

        Ok(entries)
    }
}
