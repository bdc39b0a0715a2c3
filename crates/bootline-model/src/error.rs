use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid path specification: {0}")]
    InvalidPathSpec(String),

    #[error("invalid property assignment: {0}")]
    InvalidAssignment(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
