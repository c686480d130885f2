use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Input file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Check(#[from] linkvet_scanner::CheckError),
}
