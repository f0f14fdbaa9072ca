//! # itcreport
//!
//! リージョン別売上レポートのバンドル（zip）を1つのJSONドキュメントに変換するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: マニフェスト・レポートのパースと解決のルール（I/Oなし）
//! - **Application層**: 展開→マニフェスト→組み立て→書き出しのユースケース
//! - **Adapter層**: zip、ファイルシステム、ロガー、設定ファイルとの統合
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
