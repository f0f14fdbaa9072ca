//! Adapter Layer
//!
//! 外部システム（zip、ファイルシステム、ロガー、設定ファイル）との統合

pub mod archive;
pub mod cache;
pub mod config;
pub mod input;
pub mod logging;
pub mod repositories;
