//! MockResolver for testing with scripted engine behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use crate::resolver::{
    AttributeResolver, ComponentInitializationError, Initializable, ResolutionContext,
    ResolutionError, ResolutionFailure, ResolvedAttribute,
};

/// A scripted resolution engine that records how it was called.
///
/// Subjects without a scripted response resolve to no attributes.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use person_attributes::resolver::{ResolutionFailure, ResolvedAttribute};
/// use person_attributes::testing::MockResolver;
/// use person_attributes::{PersonAttributeDao, ResolverPersonAttributeDao};
///
/// let mock = Arc::new(
///     MockResolver::new()
///         .initializable()
///         .expect_resolve("alice", vec![ResolvedAttribute::from_values("cn", ["Alice"])])
///         .fail_resolve("ghost", ResolutionFailure::NoSuchSubject, "unknown"),
/// );
///
/// let dao = ResolverPersonAttributeDao::new(mock.clone());
/// assert!(dao.get_person("alice").is_ok());
/// assert!(dao.get_person("ghost").is_err());
///
/// assert_eq!(mock.initialize_count(), 1);
/// assert_eq!(mock.resolve_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockResolver {
    responses: Mutex<HashMap<String, Response>>,
    calls: Mutex<Vec<String>>,
    lifecycle: Option<Lifecycle>,
}

#[derive(Debug, Clone)]
enum Response {
    Resolve(Vec<ResolvedAttribute>),
    Fail(ResolutionFailure, String),
}

#[derive(Debug, Default)]
struct Lifecycle {
    initialized: AtomicBool,
    initialize_calls: AtomicUsize,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockResolver {
    /// Creates a mock without a lifecycle capability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the attributes returned for `subject`.
    #[must_use]
    pub fn expect_resolve(
        mut self,
        subject: impl Into<String>,
        attributes: Vec<ResolvedAttribute>,
    ) -> Self {
        self.responses
            .get_mut()
            .insert(subject.into(), Response::Resolve(attributes));
        self
    }

    /// Scripts a resolution failure for `subject`.
    #[must_use]
    pub fn fail_resolve(
        mut self,
        subject: impl Into<String>,
        failure: ResolutionFailure,
        message: impl Into<String>,
    ) -> Self {
        self.responses
            .get_mut()
            .insert(subject.into(), Response::Fail(failure, message.into()));
        self
    }

    /// Exposes an [`Initializable`] capability that starts uninitialized.
    #[must_use]
    pub fn initializable(mut self) -> Self {
        self.lifecycle.get_or_insert_with(Lifecycle::default);
        self
    }

    /// Exposes an [`Initializable`] capability that is already initialized.
    #[must_use]
    pub fn already_initialized(mut self) -> Self {
        let lifecycle = self.lifecycle.get_or_insert_with(Lifecycle::default);
        *lifecycle.initialized.get_mut() = true;
        self
    }

    /// Exposes an [`Initializable`] capability whose initialize step fails.
    #[must_use]
    pub fn failing_initialize(mut self, message: impl Into<String>) -> Self {
        self.lifecycle.get_or_insert_with(Lifecycle::default).failure = Some(message.into());
        self
    }

    /// Makes the initialize step take at least `delay`.
    #[must_use]
    pub fn with_initialize_delay(mut self, delay: Duration) -> Self {
        self.lifecycle.get_or_insert_with(Lifecycle::default).delay = Some(delay);
        self
    }

    /// Number of times the initialize step ran.
    pub fn initialize_count(&self) -> usize {
        self.lifecycle
            .as_ref()
            .map_or(0, |l| l.initialize_calls.load(Ordering::SeqCst))
    }

    /// Number of resolution calls.
    pub fn resolve_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Subjects passed to the engine, in call order.
    pub fn resolved_subjects(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Clears recorded calls.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl AttributeResolver for MockResolver {
    fn resolve_attributes(&self, ctx: &mut ResolutionContext) -> Result<(), ResolutionError> {
        self.calls.lock().push(ctx.principal().to_owned());

        if !self.is_initialized() {
            return Err(ResolutionError::new(
                ResolutionFailure::InvalidConfiguration,
                "mock resolver used before initialization",
            ));
        }

        let response = self.responses.lock().get(ctx.principal()).cloned();
        match response {
            Some(Response::Resolve(attributes)) => {
                for attribute in attributes {
                    ctx.add_resolved_attribute(attribute);
                }
                Ok(())
            }
            Some(Response::Fail(failure, message)) => Err(ResolutionError::new(failure, message)),
            None => Ok(()),
        }
    }

    fn as_initializable(&self) -> Option<&dyn Initializable> {
        self.lifecycle.as_ref().map(|_| self as &dyn Initializable)
    }

    fn id(&self) -> &str {
        "mock"
    }
}

impl Initializable for MockResolver {
    fn is_initialized(&self) -> bool {
        self.lifecycle
            .as_ref()
            .is_none_or(|l| l.initialized.load(Ordering::SeqCst))
    }

    fn initialize(&self) -> Result<(), ComponentInitializationError> {
        let Some(lifecycle) = &self.lifecycle else {
            return Ok(());
        };

        lifecycle.initialize_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = lifecycle.delay {
            thread::sleep(delay);
        }

        if let Some(message) = &lifecycle.failure {
            return Err(ComponentInitializationError::new("mock", message.clone()));
        }

        lifecycle.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }
}
