//! maybe: explicit sum types in place of null checks and unchecked error flows.
//!
//! `Maybe<T>` is "a value, or nothing". `OpResult` and `TypedOpResult<T>` are
//! "success (with or without a value), or failure (with or without an error)".
//! Every type is immutable, comparable, and iterable as a zero-or-one element
//! sequence.

/// Diagnostic records, compiled out without the `log` feature.
#[cfg(feature = "log")]
macro_rules! diag {
    ($lvl:ident, $($arg:tt)+) => {
        ::log::$lvl!(target: "maybe", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! diag {
    ($lvl:ident, $($arg:tt)+) => {};
}

pub mod error;
pub mod fault;
pub mod maybe;
pub mod op_result;
pub mod shape;

pub use error::{Error, Result};
pub use fault::{ErrorNotProvided, ErrorValue};
pub use maybe::Maybe;
pub use op_result::{ErrorResult, OpResult, TypedOpResult};
pub use shape::{Shape, Shaped};
