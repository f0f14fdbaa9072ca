//! # Output Repository Trait
//!
//! 組み立て済みレポートの書き出しを抽象化

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::output_destination::OutputDestination;
use crate::domain::entities::region_result::RegionResult;

/// 出力リポジトリ
#[cfg_attr(test, automock)]
pub trait OutputRepository {
    /// レポートを書き出す
    ///
    /// # Arguments
    ///
    /// * `results` - 書き出すリージョン結果
    /// * `destination` - 出力先
    /// * `input_path` - 出力先がディレクトリの場合のファイル名の元になる入力パス
    ///
    /// # Returns
    ///
    /// 書き出したファイルのパス（標準出力の場合は `None`）
    fn write(
        &self,
        results: &[RegionResult],
        destination: &OutputDestination,
        input_path: &Path,
    ) -> Result<Option<PathBuf>>;
}
