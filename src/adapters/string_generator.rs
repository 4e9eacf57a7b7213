use async_trait::async_trait;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use rand::Rng;
use serde_json::json;

use super::scalar_generator::pick_enum;
use crate::config::StringOptions;
use crate::domain::{
    Data, GenerationContext, GenerationError, GenerationResult, Schema, TypeGenerator,
};

/// Synthesizes strings, shaped by `format` hints and length bounds
pub struct StringGenerator {
    options: StringOptions,
}

impl StringGenerator {
    pub fn new(options: StringOptions) -> Self {
        Self { options }
    }

    fn length_range(&self, schema: &Schema) -> GenerationResult<(usize, usize)> {
        let limit = self.options.max_length_limit;
        let min = schema.min_length.unwrap_or(self.options.min_length);
        let max = match (schema.min_length, schema.max_length) {
            (_, Some(max)) => max,
            (Some(min), None) => min.max(self.options.max_length),
            (None, None) => self.options.max_length,
        };
        if min > limit {
            return Err(GenerationError::InvalidSchema(format!(
                "minLength {} exceeds the string length limit {}",
                min, limit
            )));
        }
        let max = max.min(limit);
        if min > max {
            return Err(GenerationError::InvalidSchema(format!(
                "minLength {} is greater than maxLength {}",
                min, max
            )));
        }
        Ok((min, max))
    }

    fn generate_formatted(format: &str) -> Option<String> {
        let mut rng = rand::thread_rng();
        let value = match format {
            "date" => random_datetime().date_naive().to_string(),
            "date-time" => random_datetime().to_rfc3339(),
            "email" => SafeEmail().fake::<String>(),
            "uuid" => uuid::Uuid::new_v4().to_string(),
            "hostname" => random_hostname(),
            "uri" | "url" => format!("https://{}/{}", random_hostname(), Word().fake::<String>()),
            "ipv4" => format!(
                "{}.{}.{}.{}",
                rng.gen_range(1..=254u8),
                rng.gen::<u8>(),
                rng.gen::<u8>(),
                rng.gen_range(1..=254u8)
            ),
            "ipv6" => (0..8)
                .map(|_| format!("{:x}", rng.gen::<u16>()))
                .collect::<Vec<_>>()
                .join(":"),
            "byte" => {
                let bytes: Vec<u8> = (0..rng.gen_range(8..=32)).map(|_| rng.gen()).collect();
                base64::engine::general_purpose::STANDARD.encode(bytes)
            }
            _ => return None,
        };
        Some(value)
    }
}

const TEN_YEARS_SECS: i64 = 10 * 365 * 24 * 60 * 60;

fn random_datetime() -> DateTime<Utc> {
    let secs = Utc::now().timestamp() - rand::thread_rng().gen_range(0..TEN_YEARS_SECS);
    Utc.timestamp_opt(secs, 0).single().unwrap_or_else(Utc::now)
}

fn random_hostname() -> String {
    format!("{}.{}", Word().fake::<String>(), DomainSuffix().fake::<String>())
}

/// Pads with words up to `min` characters, then truncates to `max`.
fn fit_length(
    ctx: &GenerationContext,
    mut text: String,
    min: usize,
    max: usize,
) -> GenerationResult<String> {
    let mut len = text.chars().count();
    while len < min {
        ctx.check()?;
        if len > 0 {
            text.push(' ');
            len += 1;
        }
        let word = Word().fake::<String>();
        len += word.chars().count();
        text.push_str(&word);
    }
    if len > max {
        text = text.chars().take(max).collect();
    }
    Ok(text)
}

#[async_trait]
impl TypeGenerator for StringGenerator {
    async fn generate(&self, ctx: &GenerationContext, schema: &Schema) -> GenerationResult<Data> {
        if let Some(value) = pick_enum(schema) {
            return Ok(value);
        }

        if let Some(value) = schema.format.as_deref().and_then(Self::generate_formatted) {
            return Ok(json!(value));
        }

        let (min, max) = self.length_range(schema)?;
        let text = fit_length(ctx, Sentence(1..6).fake::<String>(), min, max)?;
        Ok(json!(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_fit_length_bounds() {
        for (min, max) in [(0, 1), (5, 5), (20, 40), (100, 120)] {
            let text = fit_length(&GenerationContext::new(), "short".to_string(), min, max).unwrap();
            let len = text.chars().count();
            assert!(len >= min && len <= max, "{} not in {}..={}", len, min, max);
        }
    }

    #[test]
    fn test_known_formats() {
        let date = StringGenerator::generate_formatted("date").unwrap();
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());

        let date_time = StringGenerator::generate_formatted("date-time").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&date_time).is_ok());

        let id = StringGenerator::generate_formatted("uuid").unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());

        let email = StringGenerator::generate_formatted("email").unwrap();
        assert!(email.contains('@'));

        let ip: std::net::Ipv4Addr = StringGenerator::generate_formatted("ipv4").unwrap().parse().unwrap();
        assert!(!ip.is_unspecified());

        let ip6 = StringGenerator::generate_formatted("ipv6").unwrap();
        assert!(ip6.parse::<std::net::Ipv6Addr>().is_ok());

        let bytes = StringGenerator::generate_formatted("byte").unwrap();
        assert!(base64::engine::general_purpose::STANDARD.decode(bytes).is_ok());
    }

    #[test]
    fn test_unknown_format_falls_back() {
        assert!(StringGenerator::generate_formatted("color").is_none());
    }

    #[tokio::test]
    async fn test_generate_respects_schema_lengths() {
        let generator = StringGenerator::new(StringOptions::default());
        let schema = Schema {
            min_length: Some(3),
            max_length: Some(8),
            ..Schema::string()
        };

        for _ in 0..20 {
            let value = generator.generate(&GenerationContext::new(), &schema).await.unwrap();
            let len = value.as_str().unwrap().chars().count();
            assert!((3..=8).contains(&len));
        }
    }

    #[tokio::test]
    async fn test_padding_stops_at_deadline() {
        let generator = StringGenerator::new(StringOptions::default());
        let schema = Schema {
            min_length: Some(60_000),
            ..Schema::string()
        };
        let ctx = GenerationContext::new().with_timeout(std::time::Duration::ZERO);

        let result = generator.generate(&ctx, &schema).await;
        assert_eq!(result, Err(GenerationError::DeadlineExceeded));
    }

    #[test]
    fn test_padding_stops_when_cancelled() {
        let ctx = GenerationContext::new();
        ctx.cancel();

        let result = fit_length(&ctx, String::new(), 10, 20);
        assert_eq!(result, Err(GenerationError::Cancelled));
    }

    #[tokio::test]
    async fn test_min_length_above_limit() {
        let generator = StringGenerator::new(StringOptions::default());
        let schema = Schema {
            min_length: Some(200_000),
            ..Schema::string()
        };

        let result = generator.generate(&GenerationContext::new(), &schema).await;
        assert!(matches!(result, Err(GenerationError::InvalidSchema(_))));
    }

    #[tokio::test]
    async fn test_huge_max_length_is_capped() {
        let options = StringOptions {
            max_length_limit: 32,
            ..Default::default()
        };
        let generator = StringGenerator::new(options);
        let schema = Schema {
            min_length: Some(20),
            max_length: Some(usize::MAX),
            ..Schema::string()
        };

        let value = generator.generate(&GenerationContext::new(), &schema).await.unwrap();
        let len = value.as_str().unwrap().chars().count();
        assert!((20..=32).contains(&len));
    }

    #[tokio::test]
    async fn test_generate_picks_enum_member() {
        let generator = StringGenerator::new(StringOptions::default());
        let schema = Schema {
            enum_values: vec![json!("red"), json!("green")],
            ..Schema::string()
        };

        let value = generator.generate(&GenerationContext::new(), &schema).await.unwrap();
        assert!(value == json!("red") || value == json!("green"));
    }

    #[tokio::test]
    async fn test_generate_rejects_inverted_lengths() {
        let generator = StringGenerator::new(StringOptions::default());
        let schema = Schema {
            min_length: Some(10),
            max_length: Some(2),
            ..Schema::string()
        };

        let result = generator.generate(&GenerationContext::new(), &schema).await;
        assert!(matches!(result, Err(GenerationError::InvalidSchema(_))));
    }
}
