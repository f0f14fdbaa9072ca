//! Local File Repository Implementation
//!
//! FileRepositoryのローカルファイルシステム実装

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::repositories::file_repository::FileRepository;

/// ローカルファイルを読むリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl FileRepository for LocalFileRepository {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
