//! Prelude module for convenient imports.
//!
//! ```rust
//! use person_attributes::prelude::*;
//! ```
//!
//! This provides access to:
//! - The DAO interface and the resolver-backed adapter
//! - The resolution engine traits
//! - Error types
//! - Common data types

pub use crate::{
    config::AdapterConfig,
    dao::{InitState, PersonAttributeDao, ResolverPersonAttributeDao},
    error::{Error, ErrorKind, Result},
    resolver::{
        AttributeResolver, AttributeValueHolder, ComponentInitializationError, Initializable,
        ResolutionContext, ResolutionError, ResolutionFailure, ResolvedAttribute,
    },
    types::{AttributeMap, AttributeSeed, AttributeValue, PersonRecord},
};
