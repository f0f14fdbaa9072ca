//! # File Repository Trait
//!
//! 展開済みファイルの読み込みを抽象化

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// ファイルリポジトリ
#[cfg_attr(test, automock)]
pub trait FileRepository {
    /// ファイルの中身をバイト列で読み込む
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
