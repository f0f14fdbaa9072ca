//! Input Locator
//!
//! CLIの入力（zipファイル、またはzipを含むディレクトリ）をアーカイブのパスに解決する

use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::errors::ReportError;

/// `~` を展開したパスを返す
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw);
    PathBuf::from(expanded.as_ref())
}

/// 入力パスを処理対象のアーカイブに解決する
///
/// ファイルはそのまま返す。ディレクトリの場合は直下の `*.zip` を名前順に探し、
/// 先頭を採用する（残りは警告して無視する）。
///
/// # Errors
///
/// - 入力が存在しない場合 `ReportError::InputNotFound`
/// - ディレクトリにzipが無い場合 `ReportError::ArchiveNotFound`
pub fn locate_archive(input: &Path) -> Result<PathBuf, ReportError> {
    if !input.exists() {
        return Err(ReportError::InputNotFound(input.to_path_buf()));
    }
    if !input.is_dir() {
        return Ok(input.to_path_buf());
    }

    let archives: Vec<PathBuf> = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_zip(p))
        .collect();

    let mut archives = archives.into_iter();
    let first = archives
        .next()
        .ok_or_else(|| ReportError::ArchiveNotFound(input.to_path_buf()))?;

    for ignored in archives {
        warn!("Ignoring additional archive {}", ignored.display());
    }
    info!("Found archive {} in {}", first.display(), input.display());

    Ok(first)
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}
