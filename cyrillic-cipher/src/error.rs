//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key must consist of russian letters")]
    InvalidKey,

    #[error("Text can not be empty")]
    EmptyText,

    #[error("Text must consist of russian letters")]
    InvalidText,

    #[error("Key file error: {0}")]
    KeyFile(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
