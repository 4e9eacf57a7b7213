use thiserror::Error;

use crate::config::{GeneratorOptions, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid range for {field}: minimum {min} is greater than maximum {max}")]
    InvalidRange { field: String, min: String, max: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_generator(&settings.generator) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generator(options: &GeneratorOptions) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if options.array.min_items > options.array.max_items {
            errors.push(Self::range_error(
                "generator.array",
                options.array.min_items,
                options.array.max_items,
            ));
        }

        if options.array.max_items > options.array.max_items_limit {
            errors.push(ValidationError::InvalidValue {
                field: "generator.array.max_items".to_string(),
                reason: format!(
                    "Must not exceed max_items_limit ({})",
                    options.array.max_items_limit
                ),
            });
        }

        if options.integer.minimum > options.integer.maximum {
            errors.push(Self::range_error(
                "generator.integer",
                options.integer.minimum,
                options.integer.maximum,
            ));
        }

        if !options.number.minimum.is_finite() || !options.number.maximum.is_finite() {
            errors.push(ValidationError::InvalidValue {
                field: "generator.number".to_string(),
                reason: "Bounds must be finite numbers".to_string(),
            });
        } else if options.number.minimum > options.number.maximum {
            errors.push(Self::range_error(
                "generator.number",
                options.number.minimum,
                options.number.maximum,
            ));
        }

        if options.string.max_length == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.string.max_length".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        } else if options.string.min_length > options.string.max_length {
            errors.push(Self::range_error(
                "generator.string",
                options.string.min_length,
                options.string.max_length,
            ));
        }

        if options.string.max_length > options.string.max_length_limit {
            errors.push(ValidationError::InvalidValue {
                field: "generator.string.max_length".to_string(),
                reason: format!(
                    "Must not exceed max_length_limit ({})",
                    options.string.max_length_limit
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn range_error(field: &str, min: impl ToString, max: impl ToString) -> ValidationError {
        ValidationError::InvalidRange {
            field: field.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
