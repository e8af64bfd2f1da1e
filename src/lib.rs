//! # person-attributes
//!
//! Person attribute lookups backed by a pluggable attribute resolution engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use person_attributes::prelude::*;
//! use person_attributes::testing::StaticAttributeResolver;
//!
//! fn main() -> Result<()> {
//!     // Any engine implementing `AttributeResolver` can be injected
//!     let resolver = StaticAttributeResolver::new().with_subject(
//!         "alice",
//!         [("mail", vec!["alice@example.org"]), ("groups", vec!["staff", "admin"])],
//!     );
//!
//!     let dao = ResolverPersonAttributeDao::with_config(
//!         Arc::new(resolver),
//!         AdapterConfig::builder().name("directory").build(),
//!     )?;
//!
//!     let person = dao.get_person("alice")?;
//!     assert_eq!(person.attribute_values("groups").map(|v| v.len()), Some(2));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Single-subject only**: `get_person()` is the one implemented lookup;
//!   bulk and reverse lookups return `ErrorKind::Unsupported`
//! - **Failure ≠ Empty**: a failed resolution is `Err`, never an empty record
//! - **No caching**: every lookup re-invokes the engine
//! - **One-time initialization**: engines exposing `Initializable` are
//!   initialized once, before the first resolution; a failed initialization
//!   is permanent
//!
//! ## Modules
//!
//! - [`dao`]: the lookup interface and the resolver-backed adapter
//! - [`resolver`]: the engine interface the adapter consumes
//! - [`time`]: permissive time representation conversions
//! - [`testing`]: in-memory and mock engines

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod dao;
pub mod error;
pub mod resolver;
pub mod types;

// Time conversion utilities
pub mod time;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use config::AdapterConfig;
pub use dao::{InitState, PersonAttributeDao, ResolverPersonAttributeDao};
pub use error::{Error, ErrorKind, Result};
pub use types::{
    AttributeMap, AttributeQuery, AttributeSeed, AttributeValue, MultivaluedAttributeQuery,
    PersonRecord,
};
