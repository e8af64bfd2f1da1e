//! The attribute resolution engine interface consumed by the adapter.
//!
//! - [`AttributeResolver`]: resolves a principal's attributes into a context
//! - [`Initializable`]: optional engine lifecycle capability
//! - [`ResolutionContext`]: per-call state carrying the principal and results
//! - [`ResolvedAttribute`] and [`AttributeValueHolder`]: the engine's result shape
//! - [`ResolutionError`] and [`ComponentInitializationError`]: engine failures

mod context;
mod error;
mod traits;
mod value;

pub use context::{ResolutionContext, ResolvedAttribute};
pub use error::{ComponentInitializationError, ResolutionError, ResolutionFailure};
pub use traits::{AttributeResolver, Initializable};
pub use value::{
    AttributeValueHolder, ByteAttributeValue, EmptyAttributeValue, ScopedStringAttributeValue,
    StringAttributeValue,
};
