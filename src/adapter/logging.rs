//! Logging Setup
//!
//! env_loggerの初期化（詳細度は引数で明示的に受け取る）

use env_logger::Builder;

use crate::application::dto::run_config::Verbosity;

fn builder(verbosity: Verbosity) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(verbosity.to_level_filter());
    // RUST_LOG でモジュール単位の上書きを許可する
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
}

/// ロガーを初期化する。2回目以降の呼び出しは無視される。
pub fn init(verbosity: Verbosity) {
    let _ = builder(verbosity).try_init();
}
