//! itcreport - Regional Report Bundle Converter
//!
//! レポートバンドル（zip）をJSONに変換

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use itcreport::adapter::config::Config;
use itcreport::adapter::logging;
use itcreport::driver::{Args, ReportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration (CLI flags override the file)
    let config = Config::load_or_default(args.config_path().as_deref())?;
    let run_config = args.into_run_config(config);

    logging::init(run_config.verbosity);

    let workflow = ReportWorkflow::new(run_config);
    workflow.execute()?;

    Ok(())
}
