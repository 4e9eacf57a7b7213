use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, Schema, TypeGenerator,
};

/// Counts invocations and returns a fixed value
#[derive(Default)]
pub struct FlagGenerator {
    calls: AtomicUsize,
}

impl FlagGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TypeGenerator for FlagGenerator {
    async fn generate(&self, _ctx: &GenerationContext, _schema: &Schema) -> GenerationResult<Data> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!("generated"))
    }
}

/// Always fails with the configured error
pub struct FailingGenerator {
    error: GenerationError,
}

impl FailingGenerator {
    pub fn new(error: GenerationError) -> Arc<Self> {
        Arc::new(Self { error })
    }
}

#[async_trait]
impl TypeGenerator for FailingGenerator {
    async fn generate(&self, _ctx: &GenerationContext, _schema: &Schema) -> GenerationResult<Data> {
        Err(self.error.clone())
    }
}

/// Cancels the context on its n-th invocation
pub struct CancellingGenerator {
    cancel_after: usize,
    calls: AtomicUsize,
}

impl CancellingGenerator {
    pub fn new(cancel_after: usize) -> Arc<Self> {
        Arc::new(Self {
            cancel_after,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TypeGenerator for CancellingGenerator {
    async fn generate(&self, ctx: &GenerationContext, _schema: &Schema) -> GenerationResult<Data> {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if calls >= self.cancel_after {
            ctx.cancel();
        }
        Ok(json!(calls))
    }
}

/// Flat object with `count` properties of the given type
pub fn wide_object(count: usize, property_type: &str) -> Schema {
    (0..count).fold(Schema::object(), |schema, i| {
        schema.with_property(format!("field_{}", i), Schema::new(property_type))
    })
}
