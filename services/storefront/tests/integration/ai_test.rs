use atelier_storefront::error::StorefrontError;
use atelier_storefront::infra::rate_limit::RateLimiterBackend;
use atelier_storefront::usecase::describe::{DescribeInput, DescribeUseCase, DescriptionSource};
use atelier_storefront::usecase::synthesize::{MAX_PROMPT_CHARS, SynthesizeUseCase};

use crate::helpers::{MockImageGenerator, MockTextGenerator};

const CLIENT: &str = "203.0.113.7";

fn blend(titles: &[&str], blend_mode: &str, intensity: f64) -> DescribeInput {
    DescribeInput {
        artwork_titles: titles.iter().map(|t| t.to_string()).collect(),
        blend_mode: blend_mode.to_owned(),
        intensity,
    }
}

// ── Describe ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_describe_deterministically_without_provider() {
    let uc = DescribeUseCase {
        generator: None::<MockTextGenerator>,
        limiter: RateLimiterBackend::in_memory(100),
    };

    let first = uc
        .execute(CLIENT, blend(&["Nebula", "Tide"], "Screen", 80.0))
        .await
        .unwrap();
    let second = uc
        .execute(CLIENT, blend(&["Nebula", "Tide"], "screen", 80.0))
        .await
        .unwrap();

    assert_eq!(first.source, DescriptionSource::Fallback);
    assert_eq!(first, second);
    assert!(
        first
            .description
            .starts_with("An overwhelming screen blend of \"Nebula\" and \"Tide\"")
    );
    assert!(first.description.ends_with("at 80% intensity."));
}

#[tokio::test]
async fn should_use_provider_text_when_available() {
    let generator = MockTextGenerator::replying("A tidal nebula swallowing the shoreline.");
    let uc = DescribeUseCase {
        generator: Some(generator.clone()),
        limiter: RateLimiterBackend::in_memory(100),
    };

    let output = uc
        .execute(CLIENT, blend(&["Nebula", "Tide"], "overlay", 42.4))
        .await
        .unwrap();

    assert_eq!(output.source, DescriptionSource::Ai);
    assert_eq!(output.description, "A tidal nebula swallowing the shoreline.");
    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("overlay blend of \"Nebula\" and \"Tide\" at 42% intensity"));
}

#[tokio::test]
async fn should_fall_back_when_provider_fails() {
    let uc = DescribeUseCase {
        generator: Some(MockTextGenerator::failing()),
        limiter: RateLimiterBackend::in_memory(100),
    };

    let output = uc.execute(CLIENT, blend(&["Nebula"], "multiply", 10.0)).await.unwrap();

    assert_eq!(output.source, DescriptionSource::Fallback);
    assert!(output.description.starts_with("A whisper-soft multiply blend of \"Nebula\""));
}

#[tokio::test]
async fn should_validate_blend_before_calling_provider() {
    let generator = MockTextGenerator::replying("unused");
    let uc = DescribeUseCase {
        generator: Some(generator.clone()),
        limiter: RateLimiterBackend::in_memory(100),
    };

    let cases = [
        blend(&[], "screen", 50.0),
        blend(&["  "], "screen", 50.0),
        blend(&["Nebula"], "", 50.0),
        blend(&["Nebula"; 11], "screen", 50.0),
    ];
    for case in cases {
        let result = uc.execute(CLIENT, case).await;
        assert!(matches!(result, Err(StorefrontError::Validation(_))));
    }
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_rate_limit_descriptions_per_client() {
    let generator = MockTextGenerator::replying("A tidal nebula.");
    let uc = DescribeUseCase {
        generator: Some(generator.clone()),
        limiter: RateLimiterBackend::in_memory(2),
    };

    for _ in 0..2 {
        uc.execute(CLIENT, blend(&["Nebula"], "screen", 50.0))
            .await
            .unwrap();
    }
    let limited = uc.execute(CLIENT, blend(&["Nebula"], "screen", 50.0)).await;
    let other = uc
        .execute("198.51.100.4", blend(&["Nebula"], "screen", 50.0))
        .await;

    assert!(matches!(limited, Err(StorefrontError::RateLimited)));
    assert!(other.is_ok());
    assert_eq!(generator.prompts.lock().unwrap().len(), 3);
}

// ── Synthesize ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_generated_image() {
    let uc = SynthesizeUseCase {
        generator: Some(MockImageGenerator {
            image: "https://images.atelier.test/out.png".to_owned(),
        }),
    };

    let image = uc.execute("  a nebula over the sea  ").await.unwrap();

    assert_eq!(image, "https://images.atelier.test/out.png");
}

#[tokio::test]
async fn should_validate_prompt_before_provider_check() {
    let uc = SynthesizeUseCase {
        generator: None::<MockImageGenerator>,
    };

    let blank = uc.execute("   ").await;
    assert!(matches!(blank, Err(StorefrontError::Validation(_))));
    let too_long = uc.execute(&"x".repeat(MAX_PROMPT_CHARS + 1)).await;
    assert!(matches!(too_long, Err(StorefrontError::Validation(_))));

    let unconfigured = uc.execute("a nebula over the sea").await;
    assert!(matches!(
        unconfigured,
        Err(StorefrontError::ProviderNotConfigured(_))
    ));
}
