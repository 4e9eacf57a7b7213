use std::sync::Arc;

use async_trait::async_trait;

use crate::config::UseExamples;
use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, Schema, SchemaGenerator,
};

/// Returns a schema's literal example instead of generating, according to policy.
///
/// Type-agnostic: the example is returned verbatim whatever the type tag, and
/// nested schemas of an example are never visited.
pub struct ExampleSchemaGenerator {
    use_examples: UseExamples,
    schema_generator: Arc<dyn SchemaGenerator>,
}

impl ExampleSchemaGenerator {
    pub fn new(use_examples: UseExamples, schema_generator: Arc<dyn SchemaGenerator>) -> Self {
        Self {
            use_examples,
            schema_generator,
        }
    }
}

#[async_trait]
impl SchemaGenerator for ExampleSchemaGenerator {
    async fn generate_data_by_schema(
        &self,
        ctx: &GenerationContext,
        schema: &Schema,
    ) -> GenerationResult<Data> {
        ctx.check()?;

        match (self.use_examples, &schema.example) {
            (UseExamples::IfPresent | UseExamples::Exclusively, Some(example)) => {
                tracing::trace!(schema_type = %schema.schema_type, "Using schema example");
                Ok(example.clone())
            }
            (UseExamples::Exclusively, None) => {
                Err(GenerationError::MissingExample(schema.schema_type.clone()))
            }
            _ => self.schema_generator.generate_data_by_schema(ctx, schema).await,
        }
    }
}
