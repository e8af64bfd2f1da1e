//! The person record returned by attribute lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AttributeValue;

/// Attribute name to ordered values, as returned to consumers.
///
/// Keys are unique; the order of each value list is the order the resolution
/// engine produced.
pub type AttributeMap = BTreeMap<String, Vec<AttributeValue>>;

/// A named subject paired with its resolved attributes.
///
/// Built once per successful lookup and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use person_attributes::{AttributeMap, AttributeValue, PersonRecord};
///
/// let mut attributes = AttributeMap::new();
/// attributes.insert("mail".into(), vec!["alice@example.org".into()]);
///
/// let person = PersonRecord::new("alice", attributes);
/// assert_eq!(person.name(), "alice");
/// assert_eq!(
///     person.attribute_value("mail"),
///     Some(&AttributeValue::from("alice@example.org"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    attributes: AttributeMap,
}

impl PersonRecord {
    /// Creates a record for `name` with the given attributes.
    pub fn new(name: impl Into<String>, attributes: AttributeMap) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// The subject identifier this record was resolved for.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All resolved attributes.
    #[inline]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Values of one attribute, in engine order.
    pub fn attribute_values(&self, name: &str) -> Option<&[AttributeValue]> {
        self.attributes.get(name).map(Vec::as_slice)
    }

    /// First value of one attribute.
    pub fn attribute_value(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name).and_then(|values| values.first())
    }

    /// Iterates over the attribute names.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Consumes the record, returning the subject name and attributes.
    pub fn into_parts(self) -> (String, AttributeMap) {
        (self.name, self.attributes)
    }
}
