//! Testing utilities for code that consumes person attributes.
//!
//! - [`StaticAttributeResolver`]: an in-memory engine with fixed data per subject
//! - [`MockResolver`]: a scripted engine that records calls and lifecycle use
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use person_attributes::testing::StaticAttributeResolver;
//! use person_attributes::{PersonAttributeDao, ResolverPersonAttributeDao};
//!
//! let resolver = StaticAttributeResolver::new()
//!     .with_subject("alice", [("mail", vec!["alice@example.org"])]);
//! let dao: Arc<dyn PersonAttributeDao> =
//!     Arc::new(ResolverPersonAttributeDao::new(Arc::new(resolver)));
//!
//! assert!(dao.get_person("alice").is_ok());
//! assert!(dao.get_person("ghost").is_err());
//! ```
//!
//! ## StaticAttributeResolver vs MockResolver
//!
//! | Feature | StaticAttributeResolver | MockResolver |
//! |---------|-------------------------|--------------|
//! | Unknown subject | `NoSuchSubject` error | empty result |
//! | Scripted failures | ✗ | ✓ |
//! | Call recording | ✗ | ✓ |
//! | JSON fixtures | ✓ | ✗ |
//! | Best for | Integration tests | Unit tests |

mod mock_resolver;
mod static_resolver;

pub use mock_resolver::MockResolver;
pub use static_resolver::StaticAttributeResolver;
