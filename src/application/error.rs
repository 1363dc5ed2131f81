use thiserror::Error;

use crate::storage::SnapshotError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Please enter your name!")]
    EmptyOwnerName,

    #[error("File error: {0}")]
    IoFailure(#[from] std::io::Error),

    #[error("Corrupt data: {0}")]
    CorruptData(String),
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Corrupt(message) => AppError::CorruptData(message),
            SnapshotError::Io(err) => AppError::IoFailure(err),
        }
    }
}
