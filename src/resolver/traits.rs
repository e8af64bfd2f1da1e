//! Resolution engine traits.

use super::{ComponentInitializationError, ResolutionContext, ResolutionError};

/// An attribute resolution engine.
///
/// The engine reads the principal from the context, computes that principal's
/// attributes from its data sources, and records them back on the context.
/// Calls may block on data source I/O.
///
/// ## Optional lifecycle
///
/// Engines that must be initialized before use override
/// [`as_initializable`](AttributeResolver::as_initializable) to expose their
/// [`Initializable`] capability. The adapter consults it once, before the
/// first resolution.
///
/// ## Example
///
/// ```rust
/// use person_attributes::resolver::{
///     AttributeResolver, ResolutionContext, ResolutionError, ResolvedAttribute,
/// };
///
/// struct EchoResolver;
///
/// impl AttributeResolver for EchoResolver {
///     fn resolve_attributes(&self, ctx: &mut ResolutionContext) -> Result<(), ResolutionError> {
///         let uid = ctx.principal().to_owned();
///         ctx.add_resolved_attribute(ResolvedAttribute::from_values("uid", [uid]));
///         Ok(())
///     }
/// }
/// ```
pub trait AttributeResolver: Send + Sync {
    /// Resolves the attributes of `ctx.principal()` into `ctx`.
    fn resolve_attributes(&self, ctx: &mut ResolutionContext) -> Result<(), ResolutionError>;

    /// Returns the engine's lifecycle capability, if it has one.
    fn as_initializable(&self) -> Option<&dyn Initializable> {
        None
    }

    /// Identifier used in logs and errors.
    fn id(&self) -> &str {
        "attribute-resolver"
    }
}

/// A component with an explicit initialize step.
pub trait Initializable: Send + Sync {
    /// Returns `true` once the component has been initialized.
    fn is_initialized(&self) -> bool;

    /// Initializes the component.
    fn initialize(&self) -> Result<(), ComponentInitializationError>;
}
