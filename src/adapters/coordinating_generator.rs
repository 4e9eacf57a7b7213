use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, Schema, SchemaGenerator,
    TypeGenerator,
};

/// Registry of type generators keyed by type tag
pub type GeneratorRegistry = HashMap<String, Arc<dyn TypeGenerator>>;

/// Routes a schema to the generator registered for its type tag
pub struct CoordinatingSchemaGenerator {
    generators_by_type: GeneratorRegistry,
}

impl CoordinatingSchemaGenerator {
    pub fn new(generators_by_type: GeneratorRegistry) -> Self {
        Self { generators_by_type }
    }
}

#[async_trait]
impl SchemaGenerator for CoordinatingSchemaGenerator {
    async fn generate_data_by_schema(
        &self,
        ctx: &GenerationContext,
        schema: &Schema,
    ) -> GenerationResult<Data> {
        ctx.check()?;

        let generator = self
            .generators_by_type
            .get(&schema.schema_type)
            .ok_or_else(|| GenerationError::UnsupportedType(schema.schema_type.clone()))?;

        tracing::trace!(schema_type = %schema.schema_type, "Dispatching schema");
        generator.generate(ctx, schema).await
    }
}
