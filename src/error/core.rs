//! Main error type for the person attribute adapter.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::ErrorKind;
use crate::resolver::{ComponentInitializationError, ResolutionError};

/// The primary error type for person attribute operations.
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (human-readable description)
/// └── source: Option           (engine-reported cause)
/// ```
///
/// A failed lookup is never disguised as an empty result: resolution failures
/// keep the engine's [`ResolutionError`] as their source, so operators can tell
/// a transient backend outage from a permanent misconfiguration.
///
/// ## Example
///
/// ```rust
/// use person_attributes::{Error, ErrorKind};
///
/// fn handle_error(err: &Error) {
///     match err.kind() {
///         ErrorKind::Unsupported => println!("not available here: {}", err),
///         ErrorKind::Resolution if err.is_retriable() => println!("backend down, retry later"),
///         _ => println!("permanent error: {}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use person_attributes::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Configuration, "no data connectors defined");
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the engine's resolution failure, if this error wraps one.
    pub fn resolution_error(&self) -> Option<&ResolutionError> {
        self.source.as_ref()?.downcast_ref::<ResolutionError>()
    }

    /// Returns the engine's initialization failure, if this error wraps one.
    ///
    /// Every lookup after a failed initialization carries the same shared cause.
    pub fn initialization_error(&self) -> Option<&ComponentInitializationError> {
        self.source
            .as_ref()?
            .downcast_ref::<Arc<ComponentInitializationError>>()
            .map(AsRef::as_ref)
    }

    /// Returns `true` if retrying the same call may succeed.
    ///
    /// The adapter never retries on its own. This only reports whether the
    /// engine classified the failure as transient.
    pub fn is_retriable(&self) -> bool {
        self.kind.may_be_retriable()
            && self
                .resolution_error()
                .is_some_and(ResolutionError::is_transient)
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a resolution error.
    pub fn resolution(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Resolution, message)
    }

    /// Creates an "operation not supported" error naming the operation.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::Unsupported,
            format!("{} is not supported by this implementation", operation),
        )
    }

    /// Creates a configuration error caused by a failed engine initialization.
    pub(crate) fn initialization_failed(cause: Arc<ComponentInitializationError>) -> Self {
        Error::configuration(format!(
            "unable to initialize attribute resolver '{}'",
            cause.component_id()
        ))
        .with_source(cause)
    }

    /// Returns `true` if this is an "operation not supported" error.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        self.kind == ErrorKind::Unsupported
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ResolutionError> for Error {
    fn from(err: ResolutionError) -> Self {
        Error::resolution("attribute resolution failed").with_source(err)
    }
}

impl From<ComponentInitializationError> for Error {
    fn from(err: ComponentInitializationError) -> Self {
        Error::initialization_failed(Arc::new(err))
    }
}
