use career_readiness::assessment::{
    Answer, AssessmentService, FileBlobStore, QuestionBank, ScoringConfig,
};
use career_readiness::config::{AppConfig, StorageConfig};
use career_readiness::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The configured CSV bank, or the built-in one when none is set.
pub(crate) fn load_bank(storage: &StorageConfig) -> Result<Arc<QuestionBank>, AppError> {
    let bank = match &storage.question_bank {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            info!(path = %path.display(), questions = bank.total_questions(), "question bank loaded");
            bank
        }
        None => QuestionBank::standard(),
    };
    Ok(Arc::new(bank))
}

pub(crate) fn file_store(storage: &StorageConfig) -> FileBlobStore {
    FileBlobStore::new(&storage.data_dir)
}

pub(crate) fn assessment_service(
    config: &AppConfig,
) -> Result<AssessmentService<FileBlobStore>, AppError> {
    let bank = load_bank(&config.storage)?;
    Ok(AssessmentService::new(
        bank,
        ScoringConfig::default(),
        file_store(&config.storage),
    ))
}

/// Reads a JSON answer list in the archived `[{questionId, value, timestamp}]` layout.
pub(crate) fn read_answers_file(path: &Path) -> Result<Vec<Answer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
