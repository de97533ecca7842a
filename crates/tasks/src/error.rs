//! Error types for the task store

use thiserror::Error;

use crate::model::TaskId;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

pub type Result<T> = std::result::Result<T, TaskError>;
