//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after goal mutations. Presentation layers subscribe by implementing the
//! sink.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
