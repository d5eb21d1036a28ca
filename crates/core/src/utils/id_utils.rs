use uuid::Uuid;

/// Source of unique, opaque identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers.
///
/// Ids stay unique across sessions that reload previously persisted data,
/// which a counter cannot guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
