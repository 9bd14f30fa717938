//! Operation outcomes: untyped `OpResult` and payload-carrying `TypedOpResult<T>`.
//!
//! Both are closed two-way sums fixed at construction. A success never exposes
//! an error. Reading the error of a success is a usage error
//! ([`Error::InvalidState`]). Forcing the result of a typed failure hands back
//! the stored cause itself.

use crate::error::{Error, Result, SUCCESS_HAS_NO_ERROR};
use crate::fault::ErrorValue;
use crate::maybe::Maybe;
use crate::shape::{Shape, Shaped};
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU64, Ordering};

pub use crate::maybe::{IntoIter, Iter};

/// Failure payload shared by both result families.
///
/// Every failure is a unique occurrence: two `ErrorResult`s are equal only
/// when they are the same instance, even if built from the same error. A
/// clone is a new occurrence. Identity survives moves.
#[derive(Debug)]
pub struct ErrorResult {
    error: ErrorValue,
    uses_default_error: bool,
    occurrence: u64,
}

static NEXT_OCCURRENCE: AtomicU64 = AtomicU64::new(0);

fn next_occurrence() -> u64 {
    NEXT_OCCURRENCE.fetch_add(1, Ordering::Relaxed)
}

impl ErrorResult {
    /// `None` substitutes an [`ErrorNotProvided`](crate::ErrorNotProvided).
    pub fn new(error: Option<ErrorValue>) -> Self {
        match error {
            Some(error) => Self { error, uses_default_error: false, occurrence: next_occurrence() },
            None => {
                diag!(debug, "failure built without an error; substituting ErrorNotProvided");
                Self {
                    error: ErrorValue::not_provided(),
                    uses_default_error: true,
                    occurrence: next_occurrence(),
                }
            }
        }
    }

    /// The real error, or the placeholder. Always available.
    #[inline]
    pub fn error(&self) -> &ErrorValue {
        &self.error
    }

    /// False when the error was substituted.
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.uses_default_error
    }

    #[inline]
    pub fn uses_default_error(&self) -> bool {
        self.uses_default_error
    }

    pub fn into_error(self) -> ErrorValue {
        self.error
    }
}

// Same error, same flag, new occurrence.
impl Clone for ErrorResult {
    fn clone(&self) -> Self {
        Self {
            error: self.error.clone(),
            uses_default_error: self.uses_default_error,
            occurrence: next_occurrence(),
        }
    }
}

impl PartialEq for ErrorResult {
    fn eq(&self, other: &Self) -> bool {
        self.occurrence == other.occurrence
    }
}

impl Eq for ErrorResult {}

impl Hash for ErrorResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.occurrence.hash(state)
    }
}

/// Success without payload, or failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpResult {
    Success,
    Failure(ErrorResult),
}

impl OpResult {
    #[inline]
    pub fn success() -> Self {
        OpResult::Success
    }

    pub fn failure(error: Option<ErrorValue>) -> Self {
        OpResult::Failure(ErrorResult::new(error))
    }

    pub fn fail(error: impl Into<ErrorValue>) -> Self {
        OpResult::Failure(ErrorResult::new(Some(error.into())))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, OpResult::Success)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn has_error(&self) -> bool {
        match self {
            OpResult::Success => false,
            OpResult::Failure(e) => e.has_error(),
        }
    }

    pub fn error(&self) -> Result<&ErrorValue> {
        match self {
            OpResult::Success => Err(Error::InvalidState(SUCCESS_HAS_NO_ERROR)),
            OpResult::Failure(e) => Ok(e.error()),
        }
    }

    pub fn into_std(self) -> Result<(), ErrorValue> {
        self.into()
    }
}

impl Default for OpResult {
    fn default() -> Self {
        OpResult::Success
    }
}

impl Shaped for OpResult {
    fn shape(&self) -> Shape {
        Shape::Empty
    }
}

impl From<OpResult> for Result<(), ErrorValue> {
    fn from(value: OpResult) -> Self {
        match value {
            OpResult::Success => Ok(()),
            OpResult::Failure(e) => Err(e.into_error()),
        }
    }
}

impl From<Result<(), ErrorValue>> for OpResult {
    fn from(value: Result<(), ErrorValue>) -> Self {
        match value {
            Ok(()) => OpResult::Success,
            Err(e) => OpResult::fail(e),
        }
    }
}

/// Success carrying a `T`, or failure. There is no payload-less typed success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedOpResult<T> {
    Success(T),
    Failure(ErrorResult),
}

impl<T> TypedOpResult<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        TypedOpResult::Success(value)
    }

    /// Rejects an absent result.
    pub fn try_success(value: Option<T>) -> Result<Self> {
        value.map(TypedOpResult::Success).ok_or(Error::ArgumentInvalid("result"))
    }

    pub fn failure(error: Option<ErrorValue>) -> Self {
        TypedOpResult::Failure(ErrorResult::new(error))
    }

    pub fn fail(error: impl Into<ErrorValue>) -> Self {
        TypedOpResult::Failure(ErrorResult::new(Some(error.into())))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, TypedOpResult::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn has_error(&self) -> bool {
        match self {
            TypedOpResult::Success(_) => false,
            TypedOpResult::Failure(e) => e.has_error(),
        }
    }

    #[inline]
    pub fn has_result(&self) -> bool {
        self.is_success()
    }

    pub fn error(&self) -> Result<&ErrorValue> {
        match self {
            TypedOpResult::Success(_) => Err(Error::InvalidState(SUCCESS_HAS_NO_ERROR)),
            TypedOpResult::Failure(e) => Ok(e.error()),
        }
    }

    /// Borrows the result. On failure the stored cause is returned as the error.
    pub fn result(&self) -> Result<&T, ErrorValue> {
        match self {
            TypedOpResult::Success(v) => Ok(v),
            TypedOpResult::Failure(e) => {
                diag!(trace, "result forced on a failure; propagating: {}", e.error());
                Err(e.error().clone())
            }
        }
    }

    pub fn into_result(self) -> Result<T, ErrorValue> {
        self.into()
    }

    #[inline]
    pub fn result_or(self, default: T) -> T {
        match self {
            TypedOpResult::Success(v) => v,
            TypedOpResult::Failure(_) => default,
        }
    }

    #[inline]
    pub fn result_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            TypedOpResult::Success(v) => v,
            TypedOpResult::Failure(_) => default(),
        }
    }

    pub fn as_maybe(&self) -> Maybe<&T> {
        match self {
            TypedOpResult::Success(v) => Maybe::Valued(v),
            TypedOpResult::Failure(_) => Maybe::Empty,
        }
    }

    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            TypedOpResult::Success(v) => Maybe::Valued(v),
            TypedOpResult::Failure(_) => Maybe::Empty,
        }
    }

    /// Drops the payload, keeping the failure (same error, same `has_error`).
    pub fn discard(self) -> OpResult {
        match self {
            TypedOpResult::Success(_) => OpResult::Success,
            TypedOpResult::Failure(e) => OpResult::Failure(e),
        }
    }

    /// A fresh zero-or-one element view; each call starts over.
    pub fn iter(&self) -> Iter<'_, T> {
        let inner = match self {
            TypedOpResult::Success(v) => Some(v),
            TypedOpResult::Failure(_) => None,
        };
        Iter { inner: inner.into_iter() }
    }
}

// A success hashes only its value, as `Maybe::Valued` does.
impl<T: Hash> Hash for TypedOpResult<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            TypedOpResult::Success(v) => v.hash(state),
            TypedOpResult::Failure(e) => e.hash(state),
        }
    }
}

impl<T> Shaped for TypedOpResult<T> {
    fn shape(&self) -> Shape {
        match self {
            TypedOpResult::Success(_) => Shape::Valued,
            TypedOpResult::Failure(_) => Shape::Empty,
        }
    }
}

impl<T> From<TypedOpResult<T>> for Result<T, ErrorValue> {
    fn from(value: TypedOpResult<T>) -> Self {
        match value {
            TypedOpResult::Success(v) => Ok(v),
            TypedOpResult::Failure(e) => Err(e.into_error()),
        }
    }
}

impl<T> From<Result<T, ErrorValue>> for TypedOpResult<T> {
    fn from(value: Result<T, ErrorValue>) -> Self {
        match value {
            Ok(v) => TypedOpResult::Success(v),
            Err(e) => TypedOpResult::fail(e),
        }
    }
}

impl<T> From<anyhow::Result<T>> for TypedOpResult<T> {
    fn from(value: anyhow::Result<T>) -> Self {
        match value {
            Ok(v) => TypedOpResult::Success(v),
            Err(e) => TypedOpResult::fail(ErrorValue::from_anyhow(e)),
        }
    }
}

impl<T> IntoIterator for TypedOpResult<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let inner = match self {
            TypedOpResult::Success(v) => Some(v),
            TypedOpResult::Failure(_) => None,
        };
        IntoIter { inner: inner.into_iter() }
    }
}

impl<'a, T> IntoIterator for &'a TypedOpResult<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
