//! Extraction Cache
//!
//! 展開キャッシュディレクトリの管理

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 展開キャッシュ
///
/// 1回の実行が排他的に所有する。同じキャッシュに対する同時実行は想定しない。
#[derive(Debug, Clone)]
pub struct ExtractionCache {
    root: PathBuf,
}

impl ExtractionCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// アーカイブ用の展開先 `<root>/<アーカイブ名（拡張子なし）>` を作成して返す
    pub fn prepare(&self, archive_path: &Path) -> Result<PathBuf> {
        let name = archive_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "archive".to_string());
        let dir = self.root.join(name);

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;

        Ok(dir)
    }

    /// `keep` が偽ならキャッシュのルートごと削除する
    ///
    /// 削除の失敗は警告のみで、呼び出し元の結果を上書きしない。
    pub fn cleanup(&self, keep: bool) {
        if keep {
            info!("Keeping cache at {}", self.root.display());
            return;
        }
        if !self.root.exists() {
            return;
        }
        match fs::remove_dir_all(&self.root) {
            Ok(()) => info!("Removed cache {}", self.root.display()),
            Err(e) => warn!("Failed to remove cache {}: {}", self.root.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_uses_archive_stem() {
        let dir = TempDir::new().unwrap();
        let cache = ExtractionCache::new(dir.path().join("cache"));

        let extract_dir = cache.prepare(Path::new("/downloads/EU.zip")).unwrap();

        assert_eq!(extract_dir, dir.path().join("cache/EU"));
        assert!(extract_dir.is_dir());
    }

    #[test]
    fn test_cleanup_removes_root() {
        let dir = TempDir::new().unwrap();
        let cache = ExtractionCache::new(dir.path().join("cache"));
        cache.prepare(Path::new("EU.zip")).unwrap();

        cache.cleanup(false);

        assert!(!dir.path().join("cache").exists());
    }

    #[test]
    fn test_cleanup_keep() {
        let dir = TempDir::new().unwrap();
        let cache = ExtractionCache::new(dir.path().join("cache"));
        cache.prepare(Path::new("EU.zip")).unwrap();

        cache.cleanup(true);

        assert!(dir.path().join("cache/EU").exists());
    }

    #[test]
    fn test_cleanup_missing_root_is_noop() {
        let cache = ExtractionCache::new("/nonexistent/itcreport-cache");
        cache.cleanup(false);
    }
}
