use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;

use crate::config::{IntegerOptions, NumberOptions};
use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, Schema, TypeGenerator,
};

/// Random member of the schema's `enum`, if it declares one.
pub(crate) fn pick_enum(schema: &Schema) -> Option<Data> {
    schema
        .enum_values
        .choose(&mut rand::thread_rng())
        .cloned()
}

fn inverted_bounds(min: impl std::fmt::Display, max: impl std::fmt::Display) -> GenerationError {
    GenerationError::InvalidSchema(format!("minimum {} is greater than maximum {}", min, max))
}

pub struct IntegerGenerator {
    options: IntegerOptions,
}

impl IntegerGenerator {
    pub fn new(options: IntegerOptions) -> Self {
        Self { options }
    }

    fn bounds(&self, schema: &Schema) -> GenerationResult<(i64, i64)> {
        let mut min = schema
            .minimum
            .map(|m| m.ceil() as i64)
            .unwrap_or(self.options.minimum);
        let mut max = match (schema.minimum, schema.maximum) {
            (_, Some(m)) => m.floor() as i64,
            (Some(_), None) => min.max(self.options.maximum),
            (None, None) => self.options.maximum,
        };
        if schema.format.as_deref() == Some("int32") {
            min = min.clamp(i32::MIN as i64, i32::MAX as i64);
            max = max.clamp(i32::MIN as i64, i32::MAX as i64);
        }
        if min > max {
            return Err(inverted_bounds(min, max));
        }
        Ok((min, max))
    }
}

#[async_trait]
impl TypeGenerator for IntegerGenerator {
    async fn generate(&self, _ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data> {
        if let Some(value) = pick_enum(schema) {
            return Ok(value);
        }
        let (min, max) = self.bounds(schema)?;
        Ok(json!(rand::thread_rng().gen_range(min..=max)))
    }
}

pub struct NumberGenerator {
    options: NumberOptions,
}

impl NumberGenerator {
    pub fn new(options: NumberOptions) -> Self {
        Self { options }
    }

    fn bounds(&self, schema: &Schema) -> GenerationResult<(f64, f64)> {
        let min = schema.minimum.unwrap_or(self.options.minimum);
        let max = match (schema.minimum, schema.maximum) {
            (_, Some(m)) => m,
            (Some(_), None) => min.max(self.options.maximum),
            (None, None) => self.options.maximum,
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(GenerationError::InvalidSchema(
                "number bounds must be finite".to_string(),
            ));
        }
        if min > max {
            return Err(inverted_bounds(min, max));
        }
        Ok((min, max))
    }
}

#[async_trait]
impl TypeGenerator for NumberGenerator {
    async fn generate(&self, _ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data> {
        if let Some(value) = pick_enum(schema) {
            return Ok(value);
        }
        let (min, max) = self.bounds(schema)?;
        let mut rng = rand::thread_rng();
        let value = if min == max {
            min
        } else if (max - min).is_finite() {
            rng.gen_range(min..=max)
        } else {
            // width overflows f64; sample on halved bounds
            let half = min / 2.0 + rng.gen::<f64>() * (max / 2.0 - min / 2.0);
            (half * 2.0).clamp(min, max)
        };
        Ok(json!(value))
    }
}

#[derive(Default)]
pub struct BooleanGenerator;

#[async_trait]
impl TypeGenerator for BooleanGenerator {
    async fn generate(&self, _ctx: &GenerationContext, _schema: &Schema) -> GenerationResult<Data> {
        Ok(json!(rand::thread_rng().gen_bool(0.5)))
    }
}
