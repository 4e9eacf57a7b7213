//! # Mockgen - schema-driven mock data
//!
//! Mockgen synthesizes plausible sample payloads for a described data shape,
//! such as the body of a mocked API response.
//!
//! ## Features
//!
//! - **Type generators**: object, array, string, integer, number, boolean
//! - **Open registry**: new type tags are added by registering one more generator
//! - **Example policy**: `no`, `if_present` or `exclusively`, applied at every nesting level
//! - **Cancellation**: every call takes a [`GenerationContext`] with a cancel flag and deadline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mockgen::config::GeneratorOptions;
//! use mockgen::domain::{GenerationContext, MediaGenerator, MediaType, Schema};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let generator = mockgen::new(&GeneratorOptions::default());
//!     let media_type = MediaType::new(
//!         Schema::object().with_property("id", Schema::string().with_format("uuid")),
//!     );
//!
//!     let data = generator.generate_data(&GenerationContext::new(), &media_type).await?;
//!     println!("{}", data);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema model, generator traits, context and errors
//! - **Adapters**: dispatcher, example wrapper, media generator and type generators
//! - **Config**: generator options loaded from file, environment and CLI

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use std::sync::Arc;

use crate::adapters::array_generator::ArrayGenerator;
use crate::adapters::coordinating_generator::{CoordinatingSchemaGenerator, GeneratorRegistry};
use crate::adapters::example_generator::ExampleSchemaGenerator;
use crate::adapters::media_generator::CoordinatingMediaGenerator;
use crate::adapters::object_generator::ObjectGenerator;
use crate::adapters::scalar_generator::{BooleanGenerator, IntegerGenerator, NumberGenerator};
use crate::adapters::string_generator::StringGenerator;
use crate::config::{GeneratorOptions, UseExamples};
use crate::domain::{MediaGenerator, SchemaGenerator, TypeGenerator};

pub use crate::domain::{Data, GenerationContext, GenerationError, GenerationResult};

/// Creates the media generator for the given options.
///
/// This is the handle hosts call once per response body.
pub fn new(options: &GeneratorOptions) -> Arc<dyn MediaGenerator> {
    new_with_registry(default_registry(options), options.use_examples)
}

/// Creates a media generator over a custom registry.
pub fn new_with_registry(
    generators_by_type: GeneratorRegistry,
    use_examples: UseExamples,
) -> Arc<dyn MediaGenerator> {
    let schema_generator = build_schema_generator(generators_by_type, use_examples);
    Arc::new(CoordinatingMediaGenerator::new(use_examples, schema_generator))
}

/// Creates the top-level schema generator for the given options.
pub fn new_schema_generator(options: &GeneratorOptions) -> Arc<dyn SchemaGenerator> {
    build_schema_generator(default_registry(options), options.use_examples)
}

/// One generator per supported type tag.
pub fn default_registry(options: &GeneratorOptions) -> GeneratorRegistry {
    let mut generators_by_type: GeneratorRegistry = GeneratorRegistry::new();
    generators_by_type.insert("object".to_string(), Arc::new(ObjectGenerator::new()));
    generators_by_type.insert(
        "array".to_string(),
        Arc::new(ArrayGenerator::new(options.array.clone())),
    );
    generators_by_type.insert(
        "string".to_string(),
        Arc::new(StringGenerator::new(options.string.clone())),
    );
    generators_by_type.insert(
        "integer".to_string(),
        Arc::new(IntegerGenerator::new(options.integer.clone())),
    );
    generators_by_type.insert(
        "number".to_string(),
        Arc::new(NumberGenerator::new(options.number.clone())),
    );
    generators_by_type.insert("boolean".to_string(), Arc::new(BooleanGenerator));
    generators_by_type
}

/// Composes the registry into the top-level schema generator.
///
/// Leaves are built first; the dispatcher and the optional example wrapper
/// are built over them; then every recursive generator is handed the
/// finished top-level generator so the example policy applies at every depth.
pub fn build_schema_generator(
    generators_by_type: GeneratorRegistry,
    use_examples: UseExamples,
) -> Arc<dyn SchemaGenerator> {
    let recursive: Vec<Arc<dyn TypeGenerator>> = generators_by_type
        .values()
        .filter(|generator| generator.as_recursive().is_some())
        .cloned()
        .collect();

    tracing::debug!(
        types = ?generators_by_type.keys().collect::<Vec<_>>(),
        use_examples = %use_examples,
        "Building schema generator"
    );

    let mut schema_generator: Arc<dyn SchemaGenerator> =
        Arc::new(CoordinatingSchemaGenerator::new(generators_by_type));

    if use_examples != UseExamples::No {
        schema_generator = Arc::new(ExampleSchemaGenerator::new(use_examples, schema_generator));
    }

    for generator in &recursive {
        if let Some(recursive_generator) = generator.as_recursive() {
            recursive_generator.set_schema_generator(Arc::downgrade(&schema_generator));
        }
    }

    schema_generator
}
