use thiserror::Error;

use crate::entry::TargetError;

#[derive(Debug, Error)]
pub enum StopError {
    #[error("launcher not running")]
    NotRunning,

    #[error("entry point '{0}' has no stop procedure")]
    Unsupported(String),

    #[error("stop procedure of '{entry}' failed: {source}")]
    Failed {
        entry: String,
        #[source]
        source: TargetError,
    },
}
