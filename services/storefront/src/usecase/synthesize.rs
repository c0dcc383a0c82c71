use crate::domain::repository::ImageGenerator;
use crate::error::StorefrontError;

pub const MAX_PROMPT_CHARS: usize = 1_000;

// ── Synthesize ───────────────────────────────────────────────────────────────

pub struct SynthesizeUseCase<G: ImageGenerator> {
    pub generator: Option<G>,
}

impl<G: ImageGenerator> SynthesizeUseCase<G> {
    /// Returns an image URL or data URL.
    pub async fn execute(&self, prompt: &str) -> Result<String, StorefrontError> {
        let prompt = prompt.trim();
        let chars = prompt.chars().count();
        if chars == 0 || chars > MAX_PROMPT_CHARS {
            return Err(StorefrontError::validation(format!(
                "prompt must be 1-{MAX_PROMPT_CHARS} characters"
            )));
        }
        let generator = self
            .generator
            .as_ref()
            .ok_or(StorefrontError::ProviderNotConfigured("image generation"))?;
        generator.generate_image(prompt).await
    }
}
