//! Error types for person attribute lookups.
//!
//! - [`Error`]: every failure surfaced by the adapter
//! - [`ErrorKind`]: stable categorization for `match`
//!
//! ## Key Invariant
//!
//! A failed resolution is an `Err`, never an `Ok` record with no attributes.
//! A subject that resolved to nothing is `Ok` with an empty map.
//!
//! ```rust,ignore
//! match dao.get_person("alice") {
//!     Ok(person) if person.attributes().is_empty() => { /* resolved, nothing released */ }
//!     Ok(person) => { /* use attributes */ }
//!     Err(e) if e.is_unsupported() => { /* wrong operation for this DAO */ }
//!     Err(e) => { /* engine failed, see e.resolution_error() */ }
//! }
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for person attribute operations.
pub type Result<T> = std::result::Result<T, Error>;
