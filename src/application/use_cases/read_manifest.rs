//! # Read Manifest Use Case
//!
//! マニフェスト読み込みユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::record::ManifestRecord;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::services::manifest_parser::ManifestParser;

/// マニフェスト読み込みユースケース
///
/// 展開済みファイルからマニフェストを探し、レコード列にパースする
pub struct ReadManifestUseCase<F: FileRepository> {
    file_repository: Arc<F>,
}

impl<F: FileRepository> ReadManifestUseCase<F> {
    pub fn new(file_repository: Arc<F>) -> Self {
        Self { file_repository }
    }

    /// マニフェストを読み込む
    ///
    /// # Arguments
    ///
    /// * `paths` - 展開済みファイルのパス（アーカイブ内の順序）
    /// * `marker` - マニフェストのファイル名に含まれる目印
    ///
    /// # Errors
    ///
    /// マニフェストが見つからない、読めない、パースできない場合にエラーを返す
    pub fn execute(&self, paths: &[PathBuf], marker: &str) -> Result<Vec<ManifestRecord>> {
        let manifest_path = ManifestParser::find_manifest(paths, marker)?;
        info!("Reading manifest {}", manifest_path.display());

        let bytes = self.file_repository.read_bytes(manifest_path)?;
        let content = String::from_utf8_lossy(&bytes);
        if std::str::from_utf8(&bytes).is_err() {
            warn!(
                "Manifest {} is not valid UTF-8; invalid bytes were replaced",
                manifest_path.display()
            );
        }

        let records = ManifestParser::parse(&content)
            .with_context(|| format!("Failed to parse manifest {}", manifest_path.display()))?;

        info!("Manifest lists {} regions", records.len());

        Ok(records)
    }
}
