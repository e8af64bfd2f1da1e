//! Per-call resolution context and the engine's result unit.

use std::collections::HashMap;
use std::sync::Arc;

use super::AttributeValueHolder;
use crate::types::AttributeValue;

/// A resolved attribute: an id and its values in engine order.
///
/// # Example
///
/// ```rust
/// use person_attributes::resolver::{ResolvedAttribute, ScopedStringAttributeValue};
///
/// let affiliation = ResolvedAttribute::new("eduPersonScopedAffiliation")
///     .with_value(ScopedStringAttributeValue::new("staff", "example.org"))
///     .with_value(ScopedStringAttributeValue::new("member", "example.org"));
///
/// assert_eq!(affiliation.values().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResolvedAttribute {
    id: String,
    values: Vec<Arc<dyn AttributeValueHolder>>,
}

impl ResolvedAttribute {
    /// Creates an attribute with no values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: Vec::new(),
        }
    }

    /// Creates an attribute from plain values.
    pub fn from_values<V>(id: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<AttributeValue>,
    {
        let mut attribute = Self::new(id);
        for value in values {
            let value: AttributeValue = value.into();
            attribute.push(value);
        }
        attribute
    }

    /// Appends a value holder.
    #[must_use]
    pub fn with_value(mut self, value: impl AttributeValueHolder + 'static) -> Self {
        self.push(value);
        self
    }

    /// Appends a value holder in place.
    pub fn push(&mut self, value: impl AttributeValueHolder + 'static) {
        self.values.push(Arc::new(value));
    }

    /// The attribute id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The value holders, in engine order.
    #[inline]
    pub fn values(&self) -> &[Arc<dyn AttributeValueHolder>] {
        &self.values
    }

    /// Unwraps every holder, preserving order.
    pub fn unwrapped_values(&self) -> Vec<AttributeValue> {
        self.values.iter().map(|holder| holder.unwrap_value()).collect()
    }
}

/// State handed to the engine for a single resolution.
///
/// Created fresh for every lookup, bound to exactly one principal, and dropped
/// once the result has been read. The engine records its output through
/// [`ResolutionContext::add_resolved_attribute`] or
/// [`ResolutionContext::set_resolved_attributes`].
#[derive(Debug)]
pub struct ResolutionContext {
    principal: String,
    resolved: HashMap<String, ResolvedAttribute>,
}

impl ResolutionContext {
    /// Creates an empty context for `principal`.
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            resolved: HashMap::new(),
        }
    }

    /// The principal being resolved.
    #[inline]
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Records one resolved attribute, keyed by its id.
    ///
    /// A later attribute with the same id replaces the earlier one.
    pub fn add_resolved_attribute(&mut self, attribute: ResolvedAttribute) {
        self.resolved.insert(attribute.id().to_owned(), attribute);
    }

    /// Replaces the resolved attributes wholesale.
    pub fn set_resolved_attributes(&mut self, attributes: HashMap<String, ResolvedAttribute>) {
        self.resolved = attributes;
    }

    /// The attributes resolved so far.
    #[inline]
    pub fn resolved_attributes(&self) -> &HashMap<String, ResolvedAttribute> {
        &self.resolved
    }

    /// Consumes the context, returning the resolved attributes.
    pub fn into_resolved_attributes(self) -> HashMap<String, ResolvedAttribute> {
        self.resolved
    }
}
