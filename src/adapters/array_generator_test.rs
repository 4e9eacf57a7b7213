use super::test_support::CancellingGenerator;
use crate::config::{ArrayOptions, GeneratorOptions, UseExamples};
use crate::domain::{GenerationContext, GenerationError, Schema, SchemaGenerator};
use serde_json::json;

#[tokio::test]
async fn test_array_length_within_configured_range() {
    let options = GeneratorOptions {
        array: ArrayOptions {
            min_items: 2,
            max_items: 4,
            ..Default::default()
        },
        ..Default::default()
    };
    let generator = crate::new_schema_generator(&options);
    let schema = Schema::array(Schema::new("integer"));

    for _ in 0..20 {
        let value = generator
            .generate_data_by_schema(&GenerationContext::new(), &schema)
            .await
            .unwrap();
        let items = value.as_array().unwrap();
        assert!((2..=4).contains(&items.len()));
        assert!(items.iter().all(|item| item.is_i64()));
    }
}

#[tokio::test]
async fn test_array_schema_bounds() {
    let generator = crate::new_schema_generator(&GeneratorOptions::default());
    let schema = Schema {
        min_items: Some(3),
        max_items: Some(3),
        ..Schema::array(Schema::string())
    };

    let value = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await
        .unwrap();

    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_array_min_items_above_default_max() {
    let generator = crate::new_schema_generator(&GeneratorOptions::default());
    let schema = Schema {
        min_items: Some(8),
        ..Schema::array(Schema::new("boolean"))
    };

    let value = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await
        .unwrap();

    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_array_without_items() {
    let generator = crate::new_schema_generator(&GeneratorOptions::default());

    let result = generator
        .generate_data_by_schema(&GenerationContext::new(), &Schema::new("array"))
        .await;

    assert!(matches!(result, Err(GenerationError::InvalidSchema(_))));
}

#[tokio::test]
async fn test_array_inverted_bounds() {
    let generator = crate::new_schema_generator(&GeneratorOptions::default());
    let schema = Schema {
        min_items: Some(5),
        max_items: Some(1),
        ..Schema::array(Schema::string())
    };

    let result = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await;

    assert!(matches!(result, Err(GenerationError::InvalidSchema(_))));
}

#[tokio::test]
async fn test_huge_max_items_is_capped_by_limit() {
    let options = GeneratorOptions {
        array: ArrayOptions {
            max_items_limit: 16,
            ..Default::default()
        },
        ..Default::default()
    };
    let generator = crate::new_schema_generator(&options);
    let schema: Schema = serde_json::from_value(json!({
        "type": "array",
        "items": { "type": "boolean" },
        "minItems": 0,
        "maxItems": u64::MAX
    }))
    .unwrap();

    for _ in 0..20 {
        let value = generator
            .generate_data_by_schema(&GenerationContext::new(), &schema)
            .await
            .unwrap();
        assert!(value.as_array().unwrap().len() <= 16);
    }
}

#[tokio::test]
async fn test_min_items_above_limit() {
    let generator = crate::new_schema_generator(&GeneratorOptions::default());
    let schema = Schema {
        min_items: Some(1_000_000),
        ..Schema::array(Schema::new("boolean"))
    };

    let result = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await;

    assert!(matches!(result, Err(GenerationError::InvalidSchema(_))));
}

#[tokio::test]
async fn test_item_example_used_for_every_element() {
    let generator = crate::new_schema_generator(&GeneratorOptions::with_use_examples(
        UseExamples::IfPresent,
    ));
    let schema = Schema {
        min_items: Some(2),
        max_items: Some(2),
        ..Schema::array(Schema::string().with_example(json!("tag")))
    };

    let value = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await
        .unwrap();

    assert_eq!(value, json!(["tag", "tag"]));
}

#[tokio::test]
async fn test_array_cancellation_between_elements() {
    let cancelling = CancellingGenerator::new(1);
    let mut registry = crate::default_registry(&GeneratorOptions::default());
    registry.insert("cancel".to_string(), cancelling.clone());
    let generator = crate::build_schema_generator(registry, UseExamples::No);
    let schema = Schema {
        min_items: Some(50),
        max_items: Some(50),
        ..Schema::array(Schema::new("cancel"))
    };

    let result = generator
        .generate_data_by_schema(&GenerationContext::new(), &schema)
        .await;

    assert_eq!(result, Err(GenerationError::Cancelled));
    assert_eq!(cancelling.calls(), 1);
}
