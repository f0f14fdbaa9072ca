//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ArchiveEntry**: 展開済みアーカイブエントリ
//! - **Record / ManifestRecord**: 順序付きキー・値レコード
//! - **RegionReport**: パース済みリージョンレポート
//! - **RegionResult**: 出力用のリージョン単位レコード
//! - **OutputDestination**: 出力先

pub mod archive_entry;
pub mod output_destination;
pub mod record;
pub mod region_report;
pub mod region_result;
