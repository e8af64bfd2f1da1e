//! Engine-native value holders.
//!
//! The resolution engine wraps every attribute value in a holder type. The
//! adapter only ever calls [`AttributeValueHolder::unwrap_value`] on them.

use std::fmt;

use crate::types::AttributeValue;

/// A value as produced by the resolution engine.
pub trait AttributeValueHolder: fmt::Debug + Send + Sync {
    /// Returns the consumer-facing value held by this holder.
    fn unwrap_value(&self) -> AttributeValue;
}

/// Scalar values are their own holder.
impl AttributeValueHolder for AttributeValue {
    fn unwrap_value(&self) -> AttributeValue {
        self.clone()
    }
}

/// A plain string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringAttributeValue(String);

impl StringAttributeValue {
    /// Creates a string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The held string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AttributeValueHolder for StringAttributeValue {
    fn unwrap_value(&self) -> AttributeValue {
        AttributeValue::String(self.0.clone())
    }
}

/// A string value qualified by a security domain (`value@scope`).
///
/// Unwraps to the bare value; the scope stays with the holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedStringAttributeValue {
    value: String,
    scope: String,
}

impl ScopedStringAttributeValue {
    /// Creates a scoped value.
    pub fn new(value: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scope: scope.into(),
        }
    }

    /// The unscoped value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The security domain.
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl fmt::Display for ScopedStringAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.scope)
    }
}

impl AttributeValueHolder for ScopedStringAttributeValue {
    fn unwrap_value(&self) -> AttributeValue {
        AttributeValue::String(self.value.clone())
    }
}

/// A binary value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteAttributeValue(Vec<u8>);

impl ByteAttributeValue {
    /// Creates a binary value.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self(value.into())
    }

    /// The held bytes.
    pub fn value(&self) -> &[u8] {
        &self.0
    }
}

impl AttributeValueHolder for ByteAttributeValue {
    fn unwrap_value(&self) -> AttributeValue {
        AttributeValue::Bytes(self.0.clone())
    }
}

/// Marker values a data source emits for present-but-empty attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyAttributeValue {
    /// The source returned a null.
    NullValue,
    /// The source returned a zero-length value.
    ZeroLengthValue,
}

impl AttributeValueHolder for EmptyAttributeValue {
    fn unwrap_value(&self) -> AttributeValue {
        match self {
            EmptyAttributeValue::NullValue => AttributeValue::Null,
            EmptyAttributeValue::ZeroLengthValue => AttributeValue::String(String::new()),
        }
    }
}
