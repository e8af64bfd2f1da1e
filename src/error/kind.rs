//! Error kind enumeration for categorizing adapter errors.

/// Categorization of adapter errors.
///
/// This enum provides a stable interface for matching on error types, enabling
/// different handling strategies for different failure modes.
///
/// | ErrorKind         | Retriable | Action                                  |
/// |-------------------|-----------|-----------------------------------------|
/// | `Configuration`   | No        | Fix the resolution engine configuration |
/// | `Resolution`      | Maybe*    | Inspect the engine-reported cause       |
/// | `Unsupported`     | No        | Use an operation this adapter provides  |
///
/// *Only resolution failures the engine reports as transient (data source
/// unavailable or timed out) are retriable. See [`Error::is_retriable`].
///
/// [`Error::is_retriable`]: crate::Error::is_retriable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The resolution engine could not be initialized.
    ///
    /// **Not retriable.** Surfaced at startup or on the first lookup, and
    /// sticky for the lifetime of the adapter.
    #[error("configuration error")]
    Configuration,

    /// The resolution engine failed while resolving a subject.
    ///
    /// The engine's own [`ResolutionError`] is kept as the error source.
    ///
    /// [`ResolutionError`]: crate::resolver::ResolutionError
    #[error("resolution failed")]
    Resolution,

    /// The operation is not provided by this implementation.
    ///
    /// Distinguishes "feature absent" from "query returned nothing".
    #[error("operation not supported")]
    Unsupported,
}

impl ErrorKind {
    /// Returns `true` if errors of this kind can ever succeed on retry.
    ///
    /// Only [`ErrorKind::Resolution`] qualifies, and only when the underlying
    /// engine failure is transient.
    ///
    /// # Example
    ///
    /// ```rust
    /// use person_attributes::ErrorKind;
    ///
    /// assert!(ErrorKind::Resolution.may_be_retriable());
    /// assert!(!ErrorKind::Unsupported.may_be_retriable());
    /// ```
    #[inline]
    pub fn may_be_retriable(&self) -> bool {
        matches!(self, ErrorKind::Resolution)
    }
}
