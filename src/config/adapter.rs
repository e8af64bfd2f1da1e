//! Adapter configuration.

/// Configuration for [`ResolverPersonAttributeDao`].
///
/// ## Example
///
/// ```rust
/// use person_attributes::AdapterConfig;
///
/// // Surface engine misconfiguration while wiring the service,
/// // not on the first login.
/// let config = AdapterConfig::builder()
///     .name("shibboleth")
///     .initialize_eagerly(true)
///     .build();
///
/// assert_eq!(config.name, "shibboleth");
/// ```
///
/// [`ResolverPersonAttributeDao`]: crate::ResolverPersonAttributeDao
#[derive(Debug, Clone, bon::Builder)]
pub struct AdapterConfig {
    /// Name of this DAO instance, recorded on log events.
    #[builder(into, default = String::from("resolver"))]
    pub name: String,

    /// Run the engine readiness check during construction.
    ///
    /// When `false`, the check runs on the first lookup instead.
    #[builder(default = false)]
    pub initialize_eagerly: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AdapterConfig {
    /// Creates a configuration that initializes the engine at construction.
    pub fn eager() -> Self {
        Self::builder().initialize_eagerly(true).build()
    }
}
