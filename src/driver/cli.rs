//! CLI Argument Parsing
//!
//! CLIの引数解析と設定ファイルとのマージ

use clap::Parser;
use std::path::PathBuf;

use crate::adapter::config::Config;
use crate::adapter::input::expand_path;
use crate::application::dto::run_config::{RunConfig, Verbosity};
use crate::domain::entities::output_destination::OutputDestination;

/// レポートバンドル（zip）をJSONに変換するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "itcreport")]
#[command(about = "Convert a regional sales report bundle into JSON", long_about = None)]
pub struct Args {
    /// Which file (or directory) to process
    pub input: String,

    /// Where to store temporary files during processing [default: build/cache]
    #[arg(short = 'c', long = "cache_dir")]
    pub cache_dir: Option<String>,

    /// Keep the cache when complete?
    #[arg(short = 'k', long = "keep_cache", num_args = 0..=1, default_missing_value = "true")]
    pub keep_cache: Option<bool>,

    /// Remove the cache when complete? (inverse of --keep_cache)
    #[arg(long = "wipe_cache", conflicts_with = "keep_cache")]
    pub wipe_cache: Option<bool>,

    /// Logging verbosity: critical, error, warning, info, debug [default: info]
    #[arg(short = 'v', long)]
    pub verbosity: Option<Verbosity>,

    /// Where to write the output; "-" writes to stdout [default: build/]
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Config file path (JSON)
    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(expand_path)
    }

    /// 実行後にキャッシュを残すかどうか（`--wipe_cache` は `--keep_cache` の逆）
    pub fn keep_cache(&self) -> Option<bool> {
        self.wipe_cache.map(|wipe| !wipe).or(self.keep_cache)
    }

    /// 設定ファイルの値にCLI引数を上書きして実行設定を作る
    pub fn into_run_config(self, config: Config) -> RunConfig {
        let keep_cache = self.keep_cache().unwrap_or(config.keep_cache);
        let output = self.output.unwrap_or(config.output);
        let output = if output == "-" {
            OutputDestination::Stdout
        } else {
            OutputDestination::Path(expand_path(&output))
        };

        RunConfig {
            input: expand_path(&self.input),
            cache_dir: expand_path(self.cache_dir.as_deref().unwrap_or(&config.cache_dir)),
            keep_cache,
            output,
            verbosity: self.verbosity.unwrap_or(config.verbosity),
            manifest_marker: config.manifest_marker,
            region_column: config.region_column,
            file_name_column: config.file_name_column,
        }
    }
}
