use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidCardId(String),
    UnknownLanguage(String),
    UnknownCategory(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidCardId(raw) => {
                write!(f, "invalid card id: {raw}")
            }
            ModelError::UnknownLanguage(code) => {
                write!(f, "unknown language code: {code}")
            }
            ModelError::UnknownCategory(name) => {
                write!(f, "unknown category: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
