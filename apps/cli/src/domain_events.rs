//! Domain events bridge for the command line.
//!
//! There is no screen to refresh, so events are written to the log.

use savings_core::events::{DomainEvent, DomainEventSink};

pub struct LoggingDomainEventSink;

impl DomainEventSink for LoggingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::PersistenceFailed { key, message } => {
                tracing::error!(key = %key, "Changes were not saved: {}", message);
            }
            _ => match serde_json::to_string(&event) {
                Ok(payload) => tracing::debug!(event = %payload, "domain event"),
                Err(e) => tracing::warn!("Failed to serialize domain event: {}", e),
            },
        }
    }
}
