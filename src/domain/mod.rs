//! # Domain Layer
//!
//! このモジュールはレポート変換の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムやCLIについて何も知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティ（RegionReport, RegionResultなど）
//! - **errors**: 致命的エラーの分類
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（マニフェスト・レポートのパース、解決）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
