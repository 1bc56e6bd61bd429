//! Defines the unified error type for all pipeline operations.

use slidefit_executor::ExecutorError;
use slidefit_layout::LayoutError;
use thiserror::Error;

/// The main error enum for all high-level operations.
///
/// Content overflow is never an error; it is reported per slide.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Deck format error: {0}")]
    Deck(String),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}
