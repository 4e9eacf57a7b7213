use std::sync::Weak;

use async_trait::async_trait;
use serde_json::Map;

use super::recursion::SchemaGeneratorSlot;
use crate::domain::{
    Data, GenerationContext, GenerationResult, RecursiveGenerator, Schema, SchemaGenerator,
    TypeGenerator,
};

/// Builds an object by generating every declared property in order
#[derive(Default)]
pub struct ObjectGenerator {
    schema_generator: SchemaGeneratorSlot,
}

impl ObjectGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TypeGenerator for ObjectGenerator {
    async fn generate(&self, ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data> {
        let schema_generator = self.schema_generator.get()?;
        let mut object = Map::with_capacity(schema.properties.len());

        for (name, property) in &schema.properties {
            ctx.check()?;

            let value = schema_generator
                .generate_data_by_schema(ctx, property)
                .await
                .map_err(|e| {
                    tracing::debug!(property = %name, error = %e, "Property generation failed");
                    e
                })?;
            object.insert(name.clone(), value);
        }

        Ok(Data::Object(object))
    }

    fn as_recursive(&self) -> Option<&dyn RecursiveGenerator> {
        Some(self)
    }
}

impl RecursiveGenerator for ObjectGenerator {
    fn set_schema_generator(&self, generator: Weak<dyn SchemaGenerator>) {
        self.schema_generator.set(generator);
    }
}
