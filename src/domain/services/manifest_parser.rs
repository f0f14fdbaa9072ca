//! # Manifest Parser Service
//!
//! サマリー（マニフェスト）ファイルの特定とパース
//!
//! マニフェストはカンマ区切りだが、値がタブでパディングされているため
//! ヘッダ・値ともに前後の空白を除去してから使用する。

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::domain::entities::record::{first_duplicate, ManifestRecord};
use crate::domain::errors::ReportError;

/// マニフェストを特定するためのファイル名の目印
pub const DEFAULT_MANIFEST_MARKER: &str = "Summary.csv";

const UTF8_BOM: &str = "\u{feff}";

/// マニフェストパーサー
pub struct ManifestParser;

impl ManifestParser {
    /// 展開済みファイルからマニフェストを探す
    ///
    /// ファイル名に `marker` を含む最初のパス（入力順）を返す。
    /// 複数一致した場合も先頭を採用する。
    ///
    /// # Errors
    ///
    /// 一致するファイルが無い場合 `ReportError::ManifestNotFound`
    pub fn find_manifest<'a>(
        paths: &'a [PathBuf],
        marker: &str,
    ) -> Result<&'a Path, ReportError> {
        let mut candidates = paths.iter().filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().contains(marker))
                .unwrap_or(false)
        });

        let first = candidates.next().ok_or_else(|| ReportError::ManifestNotFound {
            marker: marker.to_string(),
            paths: paths.to_vec(),
        })?;

        for ignored in candidates {
            debug!(
                "Ignoring additional manifest candidate {} (using {})",
                ignored.display(),
                first.display()
            );
        }

        Ok(first.as_path())
    }

    /// マニフェストのテキストをレコード列にパースする
    ///
    /// 1行目をヘッダとして扱い、以降の各行を1レコードにする。空行は読み飛ばす。
    /// ヘッダより列が少ない行は空文字で補い、多い行は余りを捨てる（どちらも警告を出す）。
    pub fn parse(content: &str) -> Result<Vec<ManifestRecord>, ReportError> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if let Some(name) = first_duplicate(header.as_slice()) {
            warn!("Manifest header repeats column '{}'; the last value wins", name);
        }

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let mut values: Vec<String> = row.iter().map(|v| v.trim().to_string()).collect();

            if values.len() != header.len() {
                // ヘッダ行が1行目なので、データ行はファイル上で index + 2 行目
                warn!(
                    "Manifest row {} has {} fields, header has {}",
                    index + 2,
                    values.len(),
                    header.len()
                );
                values.resize(header.len(), String::new());
            }

            records.push(ManifestRecord::zip(header.as_slice(), values.as_slice()));
        }

        debug!("Parsed {} manifest records", records.len());

        Ok(records)
    }
}
