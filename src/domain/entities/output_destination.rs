//! # OutputDestination Value Object

use std::path::PathBuf;

/// レポートの書き出し先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    /// ファイルパス、またはディレクトリ（末尾セパレータ付きを含む）
    Path(PathBuf),
}

impl OutputDestination {
    /// CLI値から生成する。`-` は標準出力を表す。
    pub fn from_arg(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}
