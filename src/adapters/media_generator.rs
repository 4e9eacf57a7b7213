use std::sync::Arc;

use async_trait::async_trait;

use crate::config::UseExamples;
use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, MediaGenerator, MediaType,
    SchemaGenerator,
};

/// Generates a response body for a media type.
///
/// Media-level examples are consulted first when the policy allows it, then
/// the media type's schema goes through the top-level schema generator.
pub struct CoordinatingMediaGenerator {
    use_examples: UseExamples,
    schema_generator: Arc<dyn SchemaGenerator>,
}

impl CoordinatingMediaGenerator {
    pub fn new(use_examples: UseExamples, schema_generator: Arc<dyn SchemaGenerator>) -> Self {
        Self {
            use_examples,
            schema_generator,
        }
    }
}

#[async_trait]
impl MediaGenerator for CoordinatingMediaGenerator {
    async fn generate_data(
        &self,
        ctx: &GenerationContext,
        media_type: &MediaType,
    ) -> GenerationResult<Data> {
        ctx.check()?;

        if self.use_examples != UseExamples::No {
            if let Some(example) = media_type.first_example() {
                tracing::trace!("Using media type example");
                return Ok(example.clone());
            }
        }

        let schema = media_type
            .schema
            .as_ref()
            .ok_or(GenerationError::MissingSchema)?;

        self.schema_generator.generate_data_by_schema(ctx, schema).await
    }
}
