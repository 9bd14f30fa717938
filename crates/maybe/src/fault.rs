//! Injected error values and the placeholder used when none is supplied.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to an opaque error carried by a failed result.
///
/// Equality is identity: two handles are equal when they share the same
/// allocation. Handles that both hold an [`ErrorNotProvided`] compare by that
/// type's own rule instead.
#[derive(Clone)]
pub struct ErrorValue(Arc<anyhow::Error>);

impl ErrorValue {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(anyhow::Error::new(error)))
    }

    /// An error carrying only a message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(anyhow::Error::msg(message)))
    }

    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self(Arc::new(error))
    }

    pub fn not_provided() -> Self {
        Self::new(ErrorNotProvided::new())
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.is::<E>()
    }

    pub fn is_error_not_provided(&self) -> bool {
        self.is::<ErrorNotProvided>()
    }

    pub fn as_anyhow(&self) -> &anyhow::Error {
        &self.0
    }
}

impl<E> From<E> for ErrorValue
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

// Sole owner hands back the original error; a shared handle is wrapped.
impl From<ErrorValue> for anyhow::Error {
    fn from(value: ErrorValue) -> Self {
        Arc::try_unwrap(value.0).unwrap_or_else(|shared| anyhow::Error::new(Cause(ErrorValue(shared))))
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (
            self.downcast_ref::<ErrorNotProvided>(),
            other.downcast_ref::<ErrorNotProvided>(),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

/// An `ErrorValue` seen as a `std::error::Error`, for source chains.
#[derive(Clone, Debug)]
struct Cause(ErrorValue);

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0 .0.source()
    }
}

/// Placeholder substituted when a failure is built without an error.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ErrorNotProvided {
    message: Cow<'static, str>,
    #[source]
    inner: Option<Cause>,
}

impl ErrorNotProvided {
    pub const DEFAULT_MESSAGE: &'static str = "No explanation was provided for the failure.";

    pub fn new() -> Self {
        Self { message: Cow::Borrowed(Self::DEFAULT_MESSAGE), inner: None }
    }

    /// An empty message falls back to [`Self::DEFAULT_MESSAGE`].
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: non_empty(message.into()), inner: None }
    }

    pub fn with_inner(message: impl Into<Cow<'static, str>>, inner: impl Into<ErrorValue>) -> Self {
        Self { message: non_empty(message.into()), inner: Some(Cause(inner.into())) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn inner(&self) -> Option<&ErrorValue> {
        self.inner.as_ref().map(|c| &c.0)
    }
}

impl Default for ErrorNotProvided {
    fn default() -> Self {
        Self::new()
    }
}

// Without an inner cause this equals any other instance. With one, the other
// side must carry an equal cause. Not symmetric.
impl PartialEq for ErrorNotProvided {
    fn eq(&self, other: &Self) -> bool {
        match self.inner() {
            None => true,
            Some(inner) => other.inner().is_some_and(|o| inner == o),
        }
    }
}

fn non_empty(message: Cow<'static, str>) -> Cow<'static, str> {
    if message.is_empty() {
        Cow::Borrowed(ErrorNotProvided::DEFAULT_MESSAGE)
    } else {
        message
    }
}
