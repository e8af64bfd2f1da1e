//! Query and seed shapes for the directory-style lookup operations.

use std::collections::HashMap;

use super::AttributeValue;

/// Single-valued attribute query (`name -> value`).
pub type AttributeQuery = HashMap<String, AttributeValue>;

/// Multi-valued attribute query (`name -> values`).
pub type MultivaluedAttributeQuery = HashMap<String, Vec<AttributeValue>>;

/// Input to the seed-based attribute operations.
///
/// A seed is either a bare subject identifier or a set of known attributes to
/// expand from.
///
/// ```rust
/// use person_attributes::AttributeSeed;
///
/// let seed: AttributeSeed = "alice".into();
/// assert_eq!(seed.subject(), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSeed {
    /// Seed by subject identifier.
    Subject(String),

    /// Seed by single-valued attributes.
    Attributes(AttributeQuery),

    /// Seed by multi-valued attributes.
    MultivaluedAttributes(MultivaluedAttributeQuery),
}

impl AttributeSeed {
    /// Returns the subject identifier if this is a subject seed.
    pub fn subject(&self) -> Option<&str> {
        match self {
            AttributeSeed::Subject(subject) => Some(subject),
            _ => None,
        }
    }
}

impl From<&str> for AttributeSeed {
    fn from(subject: &str) -> Self {
        AttributeSeed::Subject(subject.to_owned())
    }
}

impl From<String> for AttributeSeed {
    fn from(subject: String) -> Self {
        AttributeSeed::Subject(subject)
    }
}

impl From<AttributeQuery> for AttributeSeed {
    fn from(query: AttributeQuery) -> Self {
        AttributeSeed::Attributes(query)
    }
}

impl From<MultivaluedAttributeQuery> for AttributeSeed {
    fn from(query: MultivaluedAttributeQuery) -> Self {
        AttributeSeed::MultivaluedAttributes(query)
    }
}
