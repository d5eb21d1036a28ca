//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DomainEvent;

/// Receiver of goal change notifications.
///
/// The goal service calls `emit` after every state change, while still
/// holding its command lock, so implementations must return quickly and must
/// not call back into the service.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Discards every event. Used where nothing listens, such as one-shot tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in emission order so tests can assert on them.
///
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.recorded().clone()
    }

    pub fn last(&self) -> Option<DomainEvent> {
        self.recorded().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.recorded().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.recorded().push(event);
    }
}
