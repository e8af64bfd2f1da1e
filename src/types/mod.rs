//! Core types shared by the adapter and its consumers.
//!
//! - [`AttributeValue`]: an opaque resolved value
//! - [`AttributeMap`]: attribute name to ordered values
//! - [`PersonRecord`]: a subject paired with its attributes
//! - [`AttributeSeed`]: input to the seed-based lookup operations

mod person;
mod seed;
mod value;

pub use person::{AttributeMap, PersonRecord};
pub use seed::{AttributeQuery, AttributeSeed, MultivaluedAttributeQuery};
pub use value::AttributeValue;
