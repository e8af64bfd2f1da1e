//! The consumer-facing person attribute DAO interface.

use std::collections::{BTreeMap, BTreeSet};

use crate::Result;
use crate::types::{
    AttributeMap, AttributeQuery, AttributeSeed, AttributeValue, MultivaluedAttributeQuery,
    PersonRecord,
};

/// Directory-style access to person attributes.
///
/// Implementations that cannot serve an operation return an
/// [`ErrorKind::Unsupported`] error for it, so callers can tell "this DAO
/// cannot answer that" apart from "the answer is empty".
///
/// ## Object Safety
///
/// This trait is object-safe, so you can use `&dyn PersonAttributeDao`
/// or `Arc<dyn PersonAttributeDao>` for dependency injection.
///
/// [`ErrorKind::Unsupported`]: crate::ErrorKind::Unsupported
pub trait PersonAttributeDao: Send + Sync {
    /// Returns the person named `uid` with all of their attributes.
    fn get_person(&self, uid: &str) -> Result<PersonRecord>;

    /// Finds every person whose attributes match `query`.
    fn get_people(&self, query: &AttributeQuery) -> Result<Vec<PersonRecord>>;

    /// Finds every person whose attributes match the multi-valued `query`.
    fn get_people_with_multivalued_attributes(
        &self,
        query: &MultivaluedAttributeQuery,
    ) -> Result<Vec<PersonRecord>>;

    /// Names of every attribute this DAO can return.
    fn get_possible_user_attribute_names(&self) -> Result<BTreeSet<String>>;

    /// Names of every attribute this DAO can be queried by.
    fn get_available_query_attributes(&self) -> Result<BTreeSet<String>>;

    /// Expands `seed` into a multi-valued attribute map.
    fn get_multivalued_user_attributes(&self, seed: &AttributeSeed) -> Result<AttributeMap>;

    /// Expands `seed` into a single-valued attribute map.
    fn get_user_attributes(&self, seed: &AttributeSeed)
    -> Result<BTreeMap<String, AttributeValue>>;
}
