//! Service context bundling the registry and port trait objects.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::fixed::{FixedClock, SequentialIdGenerator};
use crate::adapters::live::{LiveClock, LiveIdGenerator};
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::registry::{SharedRegistry, StudentRegistry};

/// Everything a request handler needs, constructed by the caller and
/// injected into the router.
///
/// Cloning is cheap and shares the same registry, so all clones observe the
/// same students. Build a new context to get an isolated registry.
#[derive(Clone)]
pub struct ServiceContext {
    /// The student registry shared by every handler.
    pub registry: SharedRegistry,
    /// Clock for the health timestamp.
    pub clock: Arc<dyn Clock>,
    /// Generator for per-request correlation ids.
    pub id_gen: Arc<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context with an empty registry and live adapters.
    #[must_use]
    pub fn live() -> Self {
        Self {
            registry: StudentRegistry::shared(),
            clock: Arc::new(LiveClock),
            id_gen: Arc::new(LiveIdGenerator::new()),
        }
    }

    /// Creates a context with an empty registry, a clock frozen at `at`, and
    /// request ids `req-1`, `req-2`, ...
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            registry: StudentRegistry::shared(),
            clock: Arc::new(FixedClock::new(at)),
            id_gen: Arc::new(SequentialIdGenerator::new("req")),
        }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the request id generator.
    #[must_use]
    pub fn with_id_gen(mut self, id_gen: Arc<dyn IdGenerator>) -> Self {
        self.id_gen = id_gen;
        self
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").field("registry", &self.registry).finish_non_exhaustive()
    }
}
