//! # Run Configuration DTO
//!
//! 1回の実行に必要な設定のData Transfer Object

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::entities::output_destination::OutputDestination;
use crate::domain::services::manifest_parser::DEFAULT_MANIFEST_MARKER;
use crate::domain::services::region_resolver::{
    DEFAULT_FILE_NAME_COLUMN, DEFAULT_REGION_COLUMN,
};

/// ログの詳細度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Critical,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    /// `log` のレベルに変換する（`critical` は `error` 扱い）
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Critical | Verbosity::Error => LevelFilter::Error,
            Verbosity::Warning => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Verbosity::Critical),
            "error" => Ok(Verbosity::Error),
            "warning" | "warn" => Ok(Verbosity::Warning),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!(
                "invalid verbosity '{}' (expected critical, error, warning, info or debug)",
                other
            )),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Critical => "critical",
            Verbosity::Error => "error",
            Verbosity::Warning => "warning",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// 実行設定
///
/// 設定ファイルとCLI引数をマージした結果。ワークフロー全体に明示的に渡す。
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 入力（zipファイル、またはzipを含むディレクトリ）
    pub input: PathBuf,
    /// 展開キャッシュのルート
    pub cache_dir: PathBuf,
    /// 実行後にキャッシュを残すか
    pub keep_cache: bool,
    /// 出力先
    pub output: OutputDestination,
    pub verbosity: Verbosity,
    /// マニフェストのファイル名に含まれる目印
    pub manifest_marker: String,
    pub region_column: String,
    pub file_name_column: String,
}

impl RunConfig {
    /// 既定値で設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use itcreport::application::dto::run_config::{RunConfig, Verbosity};
    ///
    /// let config = RunConfig::new("reports/EU.zip");
    ///
    /// assert_eq!(config.cache_dir.to_str(), Some("build/cache"));
    /// assert!(!config.keep_cache);
    /// assert_eq!(config.verbosity, Verbosity::Info);
    /// assert_eq!(config.manifest_marker, "Summary.csv");
    /// ```
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            keep_cache: false,
            output: OutputDestination::from_arg(DEFAULT_OUTPUT),
            verbosity: Verbosity::default(),
            manifest_marker: DEFAULT_MANIFEST_MARKER.to_string(),
            region_column: DEFAULT_REGION_COLUMN.to_string(),
            file_name_column: DEFAULT_FILE_NAME_COLUMN.to_string(),
        }
    }
}

pub const DEFAULT_CACHE_DIR: &str = "build/cache";
pub const DEFAULT_OUTPUT: &str = "build/";
