//! Person attribute DAOs.
//!
//! - [`PersonAttributeDao`]: the directory-style lookup interface
//! - [`ResolverPersonAttributeDao`]: single-subject lookups through an
//!   [`AttributeResolver`](crate::resolver::AttributeResolver)
//! - [`InitState`]: the adapter's one-time engine initialization state

mod init;
mod resolver_dao;
mod traits;

pub use init::InitState;
pub use resolver_dao::ResolverPersonAttributeDao;
pub use traits::PersonAttributeDao;
