use std::io;

use thiserror::Error;

use bootline_model::ModelError;

use crate::{args::ArgsError, entry::TargetError};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid arguments: {0}")]
    Args(#[from] ArgsError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("entry point not found: {0}")]
    EntryPointNotFound(String),

    #[error("entry point '{entry}' has no '{procedure}' procedure")]
    MethodNotFound {
        entry: String,
        procedure: &'static str,
    },

    #[error("procedure '{procedure}' of entry point '{entry}' is {actual}, expected {expected}")]
    WrongSignature {
        entry: String,
        procedure: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("entry point '{entry}' failed: {source}")]
    Invocation {
        entry: String,
        #[source]
        source: TargetError,
    },

    #[error("duplicate entry point: '{0}' is already registered in this scope")]
    DuplicateEntry(String),
}
