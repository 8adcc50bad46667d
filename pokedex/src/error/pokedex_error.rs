use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// A sort key outside of the recognized vocabulary.
///
/// Distinct from [`NotFoundError`]: an unknown key is a usage error, not an empty result.
#[derive(Error, Debug)]
#[error("invalid sort key {key}")]
pub struct InvalidSortKeyError {
    key: String,
}

impl InvalidSortKeyError {
    /// Constructs a new invalid sort key error.
    pub fn new<K>(key: K) -> Self
    where
        K: Display,
    {
        Self {
            key: key.to_string(),
        }
    }

    /// The rejected key, as given.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidSortKeyError`].
#[track_caller]
pub fn invalid_sort_key_error<K>(key: K) -> Error
where
    K: Display,
{
    InvalidSortKeyError::new(key).wrap_error()
}
