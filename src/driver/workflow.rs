//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::archive::zip_archive_repository::ZipArchiveRepository;
use crate::adapter::cache::ExtractionCache;
use crate::adapter::input::locate_archive;
use crate::adapter::repositories::json_output_repository::JsonOutputRepository;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::application::dto::run_config::RunConfig;
use crate::application::use_cases::assemble_reports::AssembleReportsUseCase;
use crate::application::use_cases::extract_archive::ExtractArchiveUseCase;
use crate::application::use_cases::read_manifest::ReadManifestUseCase;
use crate::application::use_cases::write_reports::WriteReportsUseCase;
use crate::domain::entities::archive_entry::extracted_paths;
use crate::domain::services::region_resolver::RegionResolver;

/// Report Conversion Workflow
pub struct ReportWorkflow {
    config: RunConfig,
    extract_use_case: ExtractArchiveUseCase<ZipArchiveRepository>,
    manifest_use_case: ReadManifestUseCase<LocalFileRepository>,
    assemble_use_case: AssembleReportsUseCase<LocalFileRepository>,
    write_use_case: WriteReportsUseCase<JsonOutputRepository>,
}

impl ReportWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: RunConfig) -> Self {
        // Repository implementations
        let archive_repo = Arc::new(ZipArchiveRepository::new());
        let file_repo = Arc::new(LocalFileRepository::new());
        let output_repo = Arc::new(JsonOutputRepository::new());

        let resolver = RegionResolver::new(
            config.region_column.clone(),
            config.file_name_column.clone(),
        );

        // Use Cases construction
        let extract_use_case = ExtractArchiveUseCase::new(archive_repo);
        let manifest_use_case = ReadManifestUseCase::new(file_repo.clone());
        let assemble_use_case = AssembleReportsUseCase::new(file_repo, resolver);
        let write_use_case = WriteReportsUseCase::new(output_repo);

        Self {
            config,
            extract_use_case,
            manifest_use_case,
            assemble_use_case,
            write_use_case,
        }
    }

    /// Execute the conversion workflow
    ///
    /// Returns the path of the written report, or `None` when it went to stdout.
    /// The cache is cleaned up after the pipeline whether it succeeded or not.
    pub fn execute(&self) -> Result<Option<PathBuf>> {
        info!("Process files at {}", self.config.input.display());

        let archive_path = locate_archive(&self.config.input)?;
        let cache = ExtractionCache::new(&self.config.cache_dir);

        let result = self.run_pipeline(&archive_path, &cache);
        cache.cleanup(self.config.keep_cache);

        result
    }

    fn run_pipeline(&self, archive_path: &Path, cache: &ExtractionCache) -> Result<Option<PathBuf>> {
        let extract_dir = cache.prepare(archive_path)?;

        let entries = self.extract_use_case.execute(archive_path, &extract_dir)?;
        let paths = extracted_paths(&entries);

        let records = self
            .manifest_use_case
            .execute(&paths, &self.config.manifest_marker)?;

        // 全リージョンのパースが終わるまで何も書き出さない
        let results = self.assemble_use_case.execute(&records, &paths)?;

        self.write_use_case
            .execute(&results, &self.config.output, archive_path)
    }
}
