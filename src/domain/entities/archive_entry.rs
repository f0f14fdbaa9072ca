//! # ArchiveEntry Value Object

use std::path::PathBuf;

/// アーカイブから展開されたファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// アーカイブ内の相対パス
    pub relative_path: PathBuf,
    /// 展開先の絶対（またはキャッシュ基準の）パス
    pub extracted_path: PathBuf,
}

impl ArchiveEntry {
    pub fn new(relative_path: impl Into<PathBuf>, extracted_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            extracted_path: extracted_path.into(),
        }
    }
}

/// エントリ列から展開先パスだけを取り出す
pub fn extracted_paths(entries: &[ArchiveEntry]) -> Vec<PathBuf> {
    entries.iter().map(|e| e.extracted_path.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_paths_keeps_order() {
        let entries = vec![
            ArchiveEntry::new("b", "/c/b"),
            ArchiveEntry::new("a", "/c/a"),
        ];
        assert_eq!(
            extracted_paths(&entries),
            vec![PathBuf::from("/c/b"), PathBuf::from("/c/a")]
        );
    }
}
