//! Session errors

use meas_ports::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Failed to persist form: {0}")]
    Store(#[from] StoreError),

    #[error("The result step has no input field")]
    NoInputOnStep,
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
