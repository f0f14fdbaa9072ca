//! # Write Reports Use Case
//!
//! 組み立て済みレポートの書き出しユースケース

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::output_destination::OutputDestination;
use crate::domain::entities::region_result::RegionResult;
use crate::domain::repositories::output_repository::OutputRepository;

/// レポート書き出しユースケース
pub struct WriteReportsUseCase<O: OutputRepository> {
    output_repository: Arc<O>,
}

impl<O: OutputRepository> WriteReportsUseCase<O> {
    pub fn new(output_repository: Arc<O>) -> Self {
        Self { output_repository }
    }

    /// レポートを書き出す
    ///
    /// # Arguments
    ///
    /// * `results` - リージョン結果（マニフェスト順）
    /// * `destination` - 出力先
    /// * `input_path` - 出力ファイル名の推定に使う入力パス
    ///
    /// # Returns
    ///
    /// 書き出したファイルのパス（標準出力の場合は `None`）
    pub fn execute(
        &self,
        results: &[RegionResult],
        destination: &OutputDestination,
        input_path: &Path,
    ) -> Result<Option<PathBuf>> {
        match destination {
            OutputDestination::Stdout => info!("No output destination, writing to stdout"),
            OutputDestination::Path(path) => info!("Writing reports to {}", path.display()),
        }

        let written = self
            .output_repository
            .write(results, destination, input_path)?;

        if let Some(path) = &written {
            info!("Wrote {} regions to {}", results.len(), path.display());
        }

        Ok(written)
    }
}
