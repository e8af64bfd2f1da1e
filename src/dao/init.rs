//! One-time engine initialization gate.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::{Mutex, MutexGuard};

use crate::resolver::{AttributeResolver, ComponentInitializationError};
use crate::{Error, Result};

/// Initialization state of an adapter's resolution engine.
///
/// ```text
/// Uninitialized ──► Initializing ──► Ready   (terminal, re-entrant)
///                        │
///                        └─────────► Failed  (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitState {
    /// No readiness check has run yet.
    Uninitialized,
    /// A readiness check is in progress.
    Initializing,
    /// The engine is ready for resolution.
    Ready,
    /// The engine failed to initialize; every lookup fails.
    Failed,
}

impl InitState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => InitState::Initializing,
            2 => InitState::Ready,
            3 => InitState::Failed,
            _ => InitState::Uninitialized,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            InitState::Uninitialized => 0,
            InitState::Initializing => 1,
            InitState::Ready => 2,
            InitState::Failed => 3,
        }
    }
}

/// Runs the engine's initialize step at most once.
///
/// `state` is readable without blocking; `failure` doubles as the lock that
/// serializes the initialize path and holds the cause of a failed attempt.
#[derive(Debug)]
pub(crate) struct InitGate {
    state: AtomicU8,
    failure: Mutex<Option<Arc<ComponentInitializationError>>>,
}

impl InitGate {
    pub(crate) fn new() -> Self {
        Self {
            state: AtomicU8::new(InitState::Uninitialized.as_u8()),
            failure: Mutex::new(None),
        }
    }

    #[inline]
    pub(crate) fn state(&self) -> InitState {
        InitState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: InitState) {
        self.state.store(state.as_u8(), Ordering::Release);
    }

    /// Ensures the engine is initialized, initializing it if this is the
    /// first call.
    pub(crate) fn ensure_ready(&self, resolver: &dyn AttributeResolver, dao: &str) -> Result<()> {
        if self.state() == InitState::Ready {
            return Ok(());
        }

        let failure = self.failure.lock();

        match self.state() {
            InitState::Ready => return Ok(()),
            InitState::Uninitialized => {}
            // An attempt that never finished counts as failed.
            InitState::Initializing | InitState::Failed => {
                let cause = failure.clone().unwrap_or_else(|| {
                    Arc::new(ComponentInitializationError::new(
                        resolver.id(),
                        INCOMPLETE_INITIALIZATION,
                    ))
                });
                self.set_state(InitState::Failed);
                return Err(Error::initialization_failed(cause));
            }
        }

        let mut attempt = InitAttempt {
            gate: self,
            failure,
            component_id: resolver.id(),
        };
        self.set_state(InitState::Initializing);

        let Some(component) = resolver.as_initializable() else {
            self.set_state(InitState::Ready);
            return Ok(());
        };

        if component.is_initialized() {
            self.set_state(InitState::Ready);
            return Ok(());
        }

        match component.initialize() {
            Ok(()) => {
                tracing::info!(dao, resolver = resolver.id(), "attribute resolver initialized");
                self.set_state(InitState::Ready);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    dao,
                    resolver = resolver.id(),
                    error = %err,
                    "attribute resolver failed to initialize"
                );
                let cause = Arc::new(err);
                attempt.fail(Arc::clone(&cause));
                Err(Error::initialization_failed(cause))
            }
        }
    }
}

const INCOMPLETE_INITIALIZATION: &str = "a previous initialization did not complete";

/// Holds the gate lock for one initialize attempt.
///
/// Dropping it while the state is still `Initializing` (the engine panicked)
/// moves the gate to `Failed`.
struct InitAttempt<'a> {
    gate: &'a InitGate,
    failure: MutexGuard<'a, Option<Arc<ComponentInitializationError>>>,
    component_id: &'a str,
}

impl InitAttempt<'_> {
    fn fail(&mut self, cause: Arc<ComponentInitializationError>) {
        *self.failure = Some(cause);
        self.gate.set_state(InitState::Failed);
    }
}

impl Drop for InitAttempt<'_> {
    fn drop(&mut self) {
        if self.gate.state() == InitState::Initializing {
            tracing::warn!(
                resolver = self.component_id,
                "attribute resolver initialization did not complete"
            );
            let cause =
                ComponentInitializationError::new(self.component_id, INCOMPLETE_INITIALIZATION);
            self.fail(Arc::new(cause));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::ErrorKind;
    use crate::resolver::{Initializable, ResolutionContext, ResolutionError};

    #[test]
    fn test_state_roundtrip() {
        for state in [
            InitState::Uninitialized,
            InitState::Initializing,
            InitState::Ready,
            InitState::Failed,
        ] {
            assert_eq!(InitState::from_u8(state.as_u8()), state);
        }
    }

    #[test]
    fn test_new_gate_is_uninitialized() {
        assert_eq!(InitGate::new().state(), InitState::Uninitialized);
    }

    #[derive(Debug, Default)]
    struct PanickingEngine {
        initialize_calls: AtomicUsize,
    }

    impl AttributeResolver for PanickingEngine {
        fn resolve_attributes(
            &self,
            _ctx: &mut ResolutionContext,
        ) -> std::result::Result<(), ResolutionError> {
            Ok(())
        }

        fn as_initializable(&self) -> Option<&dyn Initializable> {
            Some(self)
        }

        fn id(&self) -> &str {
            "panicking"
        }
    }

    impl Initializable for PanickingEngine {
        fn is_initialized(&self) -> bool {
            false
        }

        fn initialize(&self) -> std::result::Result<(), ComponentInitializationError> {
            self.initialize_calls.fetch_add(1, Ordering::SeqCst);
            panic!("data connector crashed");
        }
    }

    #[test]
    fn test_panicking_initialize_fails_gate() {
        let gate = InitGate::new();
        let engine = PanickingEngine::default();

        let first = panic::catch_unwind(AssertUnwindSafe(|| gate.ensure_ready(&engine, "dao")));
        assert!(first.is_err());
        assert_eq!(gate.state(), InitState::Failed);

        for _ in 0..2 {
            let err = gate.ensure_ready(&engine, "dao").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            let cause = err.initialization_error().unwrap();
            assert_eq!(cause.component_id(), "panicking");
            assert_eq!(cause.message(), INCOMPLETE_INITIALIZATION);
        }

        assert_eq!(engine.initialize_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gate.state(), InitState::Failed);
    }

    #[test]
    fn test_stale_initializing_state_is_failed() {
        let gate = InitGate::new();
        gate.set_state(InitState::Initializing);
        let engine = PanickingEngine::default();

        let err = gate.ensure_ready(&engine, "dao").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(gate.state(), InitState::Failed);
        assert_eq!(engine.initialize_calls.load(Ordering::SeqCst), 0);
    }
}
