use std::sync::{Arc, OnceLock, Weak};

use crate::domain::{GenerationError, GenerationResult, SchemaGenerator};

/// Late-bound handle to the top-level schema generator.
///
/// Filled once during wiring. Holds a `Weak` because the top-level generator
/// owns the registry that owns this slot.
#[derive(Default)]
pub struct SchemaGeneratorSlot {
    generator: OnceLock<Weak<dyn SchemaGenerator>>,
}

impl SchemaGeneratorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, generator: Weak<dyn SchemaGenerator>) {
        if self.generator.set(generator).is_err() {
            tracing::warn!("Schema generator already wired, ignoring second assignment");
        }
    }

    pub fn get(&self) -> GenerationResult<Arc<dyn SchemaGenerator>> {
        self.generator
            .get()
            .and_then(Weak::upgrade)
            .ok_or(GenerationError::GeneratorUnavailable)
    }
}
