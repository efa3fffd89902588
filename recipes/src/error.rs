//! Error types for the plotting recipes.
//!
//! Most helpers in this crate never fail: padding degrades silently, box coordinates
//! signal a missing unit width with `None`, and tick enumeration always returns a
//! (possibly empty) vector. `RecipeError` covers the remaining boundaries where input is
//! parsed or a configuration record is validated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Unknown scale type '{0}', expected 'linear' or 'log'")]
    UnknownScale(String),

    #[error("Invalid axis format: {0}")]
    InvalidFormat(String),

    #[error("Invalid figure layout: {0}")]
    InvalidLayout(String),

    #[error("Builder error: {0}")]
    Builder(String),
}

impl RecipeError {
    /// Create an InvalidFormat error with a message
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Create an InvalidLayout error with a message
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout(message.into())
    }
}

impl From<derive_builder::UninitializedFieldError> for RecipeError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Builder(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
