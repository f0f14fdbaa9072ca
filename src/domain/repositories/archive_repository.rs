//! # Archive Repository Trait
//!
//! アーカイブの展開を抽象化

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::archive_entry::ArchiveEntry;

/// アーカイブリポジトリ
#[cfg_attr(test, automock)]
pub trait ArchiveRepository {
    /// アーカイブの全エントリを `dest_dir` 以下に展開する
    ///
    /// # Arguments
    ///
    /// * `archive_path` - アーカイブのパス
    /// * `dest_dir` - 展開先ディレクトリ
    ///
    /// # Returns
    ///
    /// 展開されたファイルのリスト（アーカイブ内の順序）
    ///
    /// # Errors
    ///
    /// アーカイブが開けない、またはエントリの読み書きに失敗した場合
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<Vec<ArchiveEntry>>;
}
