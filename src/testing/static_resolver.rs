//! StaticAttributeResolver for testing against fixed attribute data.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::resolver::{
    AttributeResolver, ComponentInitializationError, Initializable, ResolutionContext,
    ResolutionError, ResolutionFailure, ResolvedAttribute,
};
use crate::types::{AttributeMap, AttributeValue};

/// An in-memory resolution engine serving fixed attributes per subject.
///
/// Subjects that were never added fail with
/// [`ResolutionFailure::NoSuchSubject`], like a directory with no entry.
///
/// ## Example
///
/// ```rust
/// use person_attributes::testing::StaticAttributeResolver;
///
/// let resolver = StaticAttributeResolver::new()
///     .with_subject("alice", [("groups", vec!["staff", "admin"])]);
///
/// resolver.add_subject("bob", [("mail", vec!["bob@example.org"])]);
/// assert_eq!(resolver.len(), 2);
/// ```
///
/// Fixtures can also be loaded from JSON:
///
/// ```rust
/// use person_attributes::testing::StaticAttributeResolver;
///
/// let resolver = StaticAttributeResolver::from_json(r#"{
///     "alice": { "mail": ["alice@example.org"], "uidNumber": [1001] }
/// }"#).unwrap();
/// assert!(resolver.contains("alice"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticAttributeResolver {
    subjects: Arc<RwLock<HashMap<String, AttributeMap>>>,
    lifecycle: Option<Arc<AtomicBool>>,
}

impl StaticAttributeResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses subjects from a JSON object of `subject -> attribute -> [values]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let subjects: HashMap<String, AttributeMap> = serde_json::from_str(json)?;
        Ok(Self {
            subjects: Arc::new(RwLock::new(subjects)),
            lifecycle: None,
        })
    }

    /// Adds a subject and returns `self`.
    #[must_use]
    pub fn with_subject<K, V>(
        self,
        subject: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, Vec<V>)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.add_subject(subject, attributes);
        self
    }

    /// Exposes an [`Initializable`] capability; resolution fails until the
    /// resolver has been initialized.
    #[must_use]
    pub fn requiring_initialization(mut self) -> Self {
        self.lifecycle = Some(Arc::new(AtomicBool::new(false)));
        self
    }

    /// Adds or replaces a subject.
    pub fn add_subject<K, V>(
        &self,
        subject: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, Vec<V>)>,
    ) where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        let attributes: AttributeMap = attributes
            .into_iter()
            .map(|(name, values)| (name.into(), values.into_iter().map(Into::into).collect()))
            .collect();
        self.subjects.write().insert(subject.into(), attributes);
    }

    /// Removes a subject. Returns `true` if it existed.
    pub fn remove_subject(&self, subject: &str) -> bool {
        self.subjects.write().remove(subject).is_some()
    }

    /// Returns `true` if `subject` is known.
    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.read().contains_key(subject)
    }

    /// Number of known subjects.
    pub fn len(&self) -> usize {
        self.subjects.read().len()
    }

    /// Returns `true` if no subjects are known.
    pub fn is_empty(&self) -> bool {
        self.subjects.read().is_empty()
    }
}

impl AttributeResolver for StaticAttributeResolver {
    fn resolve_attributes(&self, ctx: &mut ResolutionContext) -> Result<(), ResolutionError> {
        if !self.is_initialized() {
            return Err(ResolutionError::new(
                ResolutionFailure::InvalidConfiguration,
                "resolver has not been initialized",
            ));
        }

        let subjects = self.subjects.read();
        let attributes = subjects
            .get(ctx.principal())
            .ok_or_else(|| ResolutionError::no_such_subject(ctx.principal()))?;

        for (name, values) in attributes {
            ctx.add_resolved_attribute(ResolvedAttribute::from_values(
                name.as_str(),
                values.iter().cloned(),
            ));
        }

        Ok(())
    }

    fn as_initializable(&self) -> Option<&dyn Initializable> {
        self.lifecycle.as_ref().map(|_| self as &dyn Initializable)
    }

    fn id(&self) -> &str {
        "static"
    }
}

impl Initializable for StaticAttributeResolver {
    fn is_initialized(&self) -> bool {
        self.lifecycle
            .as_ref()
            .is_none_or(|flag| flag.load(Ordering::Acquire))
    }

    fn initialize(&self) -> Result<(), ComponentInitializationError> {
        if let Some(flag) = &self.lifecycle {
            flag.store(true, Ordering::Release);
        }
        Ok(())
    }
}
