//! Usage errors raised by the containers themselves.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A required payload was absent at construction.
    #[error("argument `{0}` must not be absent")]
    ArgumentInvalid(&'static str),
    /// A property was read that the current variant does not possess.
    #[error("{0}")]
    InvalidState(&'static str),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

pub(crate) const EMPTY_MAYBE_HAS_NO_VALUE: &str = "cannot get the value of an empty Maybe";
pub(crate) const SUCCESS_HAS_NO_ERROR: &str = "a success result does not contain an error";
