//! Failures reported by the resolution engine.

use std::borrow::Cow;
use std::error::Error as StdError;

/// Category of an engine-side resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ResolutionFailure {
    /// The engine knows no principal by that identifier.
    #[error("no such subject")]
    NoSuchSubject,

    /// A backing data source could not be reached.
    #[error("data source unavailable")]
    DataSourceUnavailable,

    /// A backing data source did not answer in time.
    #[error("data source timeout")]
    DataSourceTimeout,

    /// Attribute definitions depend on each other cyclically.
    #[error("dependency cycle")]
    DependencyCycle,

    /// The engine's own configuration is malformed.
    #[error("invalid engine configuration")]
    InvalidConfiguration,

    /// Anything the engine could not classify.
    #[error("resolution failure")]
    Other,
}

impl ResolutionFailure {
    /// Returns `true` for failures that may clear up on their own.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ResolutionFailure::DataSourceUnavailable | ResolutionFailure::DataSourceTimeout
        )
    }
}

/// Error returned by [`AttributeResolver::resolve_attributes`].
///
/// [`AttributeResolver::resolve_attributes`]: super::AttributeResolver::resolve_attributes
#[derive(Debug, thiserror::Error)]
#[error("{failure}: {message}")]
pub struct ResolutionError {
    failure: ResolutionFailure,
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ResolutionError {
    /// Creates a resolution error.
    pub fn new(failure: ResolutionFailure, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            failure,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`ResolutionFailure::NoSuchSubject`] error for `subject`.
    pub fn no_such_subject(subject: &str) -> Self {
        Self::new(
            ResolutionFailure::NoSuchSubject,
            format!("no principal named '{}'", subject),
        )
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// The failure category.
    #[inline]
    pub fn failure(&self) -> ResolutionFailure {
        self.failure
    }

    /// The engine-provided message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the engine considers this failure transient.
    #[inline]
    pub fn is_transient(&self) -> bool {
        self.failure.is_transient()
    }
}

/// Error returned by [`Initializable::initialize`].
///
/// [`Initializable::initialize`]: super::Initializable::initialize
#[derive(Debug, thiserror::Error)]
#[error("component '{component_id}' failed to initialize: {message}")]
pub struct ComponentInitializationError {
    component_id: String,
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ComponentInitializationError {
    /// Creates an initialization error for the given component.
    pub fn new(component_id: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            component_id: component_id.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Identifier of the component that failed.
    #[inline]
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// The failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
