use std::sync::Weak;

use async_trait::async_trait;
use rand::Rng;

use super::recursion::SchemaGeneratorSlot;
use crate::config::ArrayOptions;
use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, RecursiveGenerator, Schema,
    SchemaGenerator, TypeGenerator,
};

/// Builds an array of generated `items` values
pub struct ArrayGenerator {
    options: ArrayOptions,
    schema_generator: SchemaGeneratorSlot,
}

impl ArrayGenerator {
    pub fn new(options: ArrayOptions) -> Self {
        Self {
            options,
            schema_generator: SchemaGeneratorSlot::new(),
        }
    }

    fn length_range(&self, schema: &Schema) -> GenerationResult<(usize, usize)> {
        let limit = self.options.max_items_limit;
        let min = schema.min_items.unwrap_or(self.options.min_items);
        let max = match (schema.min_items, schema.max_items) {
            (_, Some(max)) => max,
            // an explicit minItems above the configured default still needs room
            (Some(min), None) => min.max(self.options.max_items),
            (None, None) => self.options.max_items,
        };
        if min > limit {
            return Err(GenerationError::InvalidSchema(format!(
                "minItems {} exceeds the array length limit {}",
                min, limit
            )));
        }
        let max = max.min(limit);
        if min > max {
            return Err(GenerationError::InvalidSchema(format!(
                "minItems {} is greater than maxItems {}",
                min, max
            )));
        }
        Ok((min, max))
    }
}

#[async_trait]
impl TypeGenerator for ArrayGenerator {
    async fn generate(&self, ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data> {
        let items = schema
            .items
            .as_deref()
            .ok_or_else(|| GenerationError::InvalidSchema("array schema has no items".to_string()))?;
        let (min, max) = self.length_range(schema)?;
        let schema_generator = self.schema_generator.get()?;

        let count = rand::thread_rng().gen_range(min..=max);
        let mut values = Vec::new();
        for _ in 0..count {
            ctx.check()?;
            values.push(schema_generator.generate_data_by_schema(ctx, items).await?);
        }

        Ok(Data::Array(values))
    }

    fn as_recursive(&self) -> Option<&dyn RecursiveGenerator> {
        Some(self)
    }
}

impl RecursiveGenerator for ArrayGenerator {
    fn set_schema_generator(&self, generator: Weak<dyn SchemaGenerator>) {
        self.schema_generator.set(generator);
    }
}
