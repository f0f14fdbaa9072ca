//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_output_repository;
pub mod local_file_repository;
