use std::io;
use thiserror::Error;

use crate::engine::EngineError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
