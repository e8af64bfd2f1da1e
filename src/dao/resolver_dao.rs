//! Person attribute DAO backed by an attribute resolution engine.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use super::PersonAttributeDao;
use super::init::{InitGate, InitState};
use crate::config::AdapterConfig;
use crate::resolver::{AttributeResolver, ResolutionContext};
use crate::types::{
    AttributeMap, AttributeQuery, AttributeSeed, AttributeValue, MultivaluedAttributeQuery,
    PersonRecord,
};
use crate::{Error, Result};

/// A [`PersonAttributeDao`] that resolves a single subject through an
/// [`AttributeResolver`].
///
/// Only [`get_person`](PersonAttributeDao::get_person) is implemented. The
/// engine has no notion of "all attribute names" or "search by value", so
/// every bulk and reverse lookup returns [`ErrorKind::Unsupported`].
///
/// Every lookup re-invokes the engine with a fresh [`ResolutionContext`];
/// nothing is cached here.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use person_attributes::testing::StaticAttributeResolver;
/// use person_attributes::{PersonAttributeDao, ResolverPersonAttributeDao};
///
/// let resolver = StaticAttributeResolver::new()
///     .with_subject("alice", [("mail", vec!["alice@example.org"])]);
///
/// let dao = ResolverPersonAttributeDao::new(Arc::new(resolver));
/// let person = dao.get_person("alice").unwrap();
///
/// assert_eq!(person.name(), "alice");
/// assert_eq!(person.attribute_value("mail").unwrap().as_str(), Some("alice@example.org"));
/// ```
///
/// [`ErrorKind::Unsupported`]: crate::ErrorKind::Unsupported
pub struct ResolverPersonAttributeDao {
    resolver: Arc<dyn AttributeResolver>,
    config: AdapterConfig,
    gate: InitGate,
}

impl ResolverPersonAttributeDao {
    /// Creates a DAO with the default (lazy) configuration.
    pub fn new(resolver: Arc<dyn AttributeResolver>) -> Self {
        Self {
            resolver,
            config: AdapterConfig::default(),
            gate: InitGate::new(),
        }
    }

    /// Creates a DAO with the given configuration.
    ///
    /// With [`AdapterConfig::initialize_eagerly`] set, the engine is
    /// initialized here and an initialization failure is returned.
    pub fn with_config(
        resolver: Arc<dyn AttributeResolver>,
        config: AdapterConfig,
    ) -> Result<Self> {
        let dao = Self {
            resolver,
            config,
            gate: InitGate::new(),
        };

        if dao.config.initialize_eagerly {
            dao.initialize()?;
        }

        Ok(dao)
    }

    /// Makes sure the engine is initialized.
    ///
    /// Idempotent and safe to call concurrently; the engine's own initialize
    /// step runs at most once. A failure is permanent: this and every later
    /// lookup return a [`Configuration`](crate::ErrorKind::Configuration) error.
    pub fn initialize(&self) -> Result<()> {
        self.gate.ensure_ready(self.resolver.as_ref(), &self.config.name)
    }

    /// Current initialization state.
    #[inline]
    pub fn state(&self) -> InitState {
        self.gate.state()
    }

    /// The configuration in effect.
    #[inline]
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// The backing resolution engine.
    #[inline]
    pub fn resolver(&self) -> &Arc<dyn AttributeResolver> {
        &self.resolver
    }

    fn resolve(&self, uid: &str) -> Result<AttributeMap> {
        let mut ctx = ResolutionContext::new(uid);

        if let Err(err) = self.resolver.resolve_attributes(&mut ctx) {
            tracing::warn!(
                dao = %self.config.name,
                resolver = self.resolver.id(),
                subject = uid,
                error = %err,
                "attribute resolution failed"
            );
            return Err(err.into());
        }

        Ok(ctx
            .into_resolved_attributes()
            .into_iter()
            .map(|(name, attribute)| (name, attribute.unwrapped_values()))
            .collect())
    }
}

impl PersonAttributeDao for ResolverPersonAttributeDao {
    fn get_person(&self, uid: &str) -> Result<PersonRecord> {
        self.initialize()?;

        let attributes = self.resolve(uid)?;

        tracing::debug!(
            dao = %self.config.name,
            subject = uid,
            attributes = attributes.len(),
            "resolved person attributes"
        );

        Ok(PersonRecord::new(uid, attributes))
    }

    fn get_people(&self, _query: &AttributeQuery) -> Result<Vec<PersonRecord>> {
        Err(Error::unsupported("get_people"))
    }

    fn get_people_with_multivalued_attributes(
        &self,
        _query: &MultivaluedAttributeQuery,
    ) -> Result<Vec<PersonRecord>> {
        Err(Error::unsupported("get_people_with_multivalued_attributes"))
    }

    fn get_possible_user_attribute_names(&self) -> Result<BTreeSet<String>> {
        Err(Error::unsupported("get_possible_user_attribute_names"))
    }

    fn get_available_query_attributes(&self) -> Result<BTreeSet<String>> {
        Err(Error::unsupported("get_available_query_attributes"))
    }

    fn get_multivalued_user_attributes(&self, _seed: &AttributeSeed) -> Result<AttributeMap> {
        Err(Error::unsupported("get_multivalued_user_attributes"))
    }

    fn get_user_attributes(
        &self,
        _seed: &AttributeSeed,
    ) -> Result<BTreeMap<String, AttributeValue>> {
        Err(Error::unsupported("get_user_attributes"))
    }
}

impl fmt::Debug for ResolverPersonAttributeDao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverPersonAttributeDao")
            .field("resolver", &self.resolver.id())
            .field("config", &self.config)
            .field("state", &self.state())
            .finish()
    }
}
