use std::sync::Weak;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod context;
pub mod error;

pub use context::GenerationContext;
pub use error::{GenerationError, GenerationResult};

/// Generated value. Objects keep property declaration order.
pub type Data = Value;

/// Description of a data shape: a type tag, nested shapes and an optional example.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Type tag used to select a generator ("object", "string", ...)
    #[serde(rename = "type", default)]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Object properties in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Element schema for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Literal example attached by the schema author. JSON `null` means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl Schema {
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            ..Default::default()
        }
    }

    pub fn object() -> Self {
        Self::new("object")
    }

    pub fn string() -> Self {
        Self::new("string")
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new("array")
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}

/// Named example attached to a media type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExampleObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Response content description: a schema plus media-level examples
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, ExampleObject>,
}

impl MediaType {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Default::default()
        }
    }

    /// Media-level example: `example` first, then the first named example with a value.
    pub fn first_example(&self) -> Option<&Value> {
        self.example.as_ref().or_else(|| {
            self.examples
                .values()
                .find_map(|example| example.value.as_ref())
        })
    }
}

/// Anything that can generate a value for a schema.
///
/// Implemented by the dispatcher and by the example-aware wrapper, so either
/// can serve as the top-level generator seen by recursive generators.
#[async_trait]
pub trait SchemaGenerator: Send + Sync {
    async fn generate_data_by_schema(
        &self,
        ctx: &GenerationContext,
        schema: &Schema,
    ) -> GenerationResult<Data>;
}

/// Outward-facing operation called once per response body.
#[async_trait]
pub trait MediaGenerator: Send + Sync {
    async fn generate_data(
        &self,
        ctx: &GenerationContext,
        media_type: &MediaType,
    ) -> GenerationResult<Data>;
}

/// Generator for a single type tag.
#[async_trait]
pub trait TypeGenerator: Send + Sync {
    async fn generate(&self, ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data>;

    /// Capability check used at wiring time. Composite generators return `Some`.
    fn as_recursive(&self) -> Option<&dyn RecursiveGenerator> {
        None
    }
}

/// Type generator that calls back into the top-level generator for nested schemas.
pub trait RecursiveGenerator: Send + Sync {
    fn set_schema_generator(&self, generator: Weak<dyn SchemaGenerator>);
}
