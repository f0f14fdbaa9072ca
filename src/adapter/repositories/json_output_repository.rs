//! JSON Output Repository Implementation
//!
//! OutputRepositoryのJSON実装（整形済みJSONをファイルまたは標準出力へ）

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{is_separator, Path, PathBuf};

use crate::domain::entities::output_destination::OutputDestination;
use crate::domain::entities::region_result::RegionResult;
use crate::domain::repositories::output_repository::OutputRepository;

/// 出力先がディレクトリの場合に付けるファイル名の接尾辞
const REPORT_FILE_SUFFIX: &str = "-report.json";

/// JSONでレポートを書き出すリポジトリ
pub struct JsonOutputRepository;

impl JsonOutputRepository {
    pub fn new() -> Self {
        Self
    }

    /// 出力ファイルのパスを決める
    ///
    /// `destination` が既存ディレクトリ、または末尾がパス区切りの場合は
    /// `<入力のファイル名（拡張子なし）>-report.json` をその下に置く。
    pub fn resolve_output_file(destination: &Path, input_path: &Path) -> PathBuf {
        let dir_like = destination.is_dir()
            || destination
                .as_os_str()
                .to_string_lossy()
                .ends_with(is_separator);

        if !dir_like {
            return destination.to_path_buf();
        }

        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        destination.join(format!("{}{}", stem, REPORT_FILE_SUFFIX))
    }

    /// 結果を2スペースインデントのJSONにする（キー順は挿入順）
    pub fn render(results: &[RegionResult]) -> Result<String> {
        serde_json::to_string_pretty(results).context("Failed to serialize reports")
    }

    fn write_file(path: &Path, json: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

impl OutputRepository for JsonOutputRepository {
    fn write(
        &self,
        results: &[RegionResult],
        destination: &OutputDestination,
        input_path: &Path,
    ) -> Result<Option<PathBuf>> {
        let json = Self::render(results)?;

        match destination {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
                Ok(None)
            }
            OutputDestination::Path(dest) => {
                let path = Self::resolve_output_file(dest, input_path);
                Self::write_file(&path, &json)?;
                Ok(Some(path))
            }
        }
    }
}

impl Default for JsonOutputRepository {
    fn default() -> Self {
        Self::new()
    }
}
