use thiserror::Error;

use bootline_model::ModelError;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("missing path list after '{0}'")]
    MissingValue(String),

    #[error("invalid path list entry: {0}")]
    InvalidPath(#[from] ModelError),
}
