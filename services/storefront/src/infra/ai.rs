//! AI provider adapter (OpenAI-compatible chat and image endpoints).

use anyhow::Context as _;
use serde::Deserialize;
use serde_json::json;

use crate::domain::repository::{ImageGenerator, TextGenerator};
use crate::error::StorefrontError;

#[derive(Clone)]
pub struct OpenAiClient {
    pub client: reqwest::Client,
    /// Base URL without trailing slash, e.g. `https://api.openai.com`.
    pub api_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl OpenAiClient {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url.trim_end_matches('/'))
    }

    async fn post_json<T>(&self, path: &str, body: serde_json::Value) -> anyhow::Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("send request to {path}"))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "AI provider returned {status} for {path}: {}",
                body.chars().take(200).collect::<String>()
            );
        }
        response
            .json()
            .await
            .with_context(|| format!("decode response from {path}"))
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl ImageData {
    fn into_image(self) -> Option<String> {
        self.url
            .or_else(|| self.b64_json.map(|b64| format!("data:image/png;base64,{b64}")))
    }
}

impl TextGenerator for OpenAiClient {
    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, StorefrontError> {
        let body = json!({
            "model": self.text_model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": prompt},
            ],
            "max_tokens": 300,
            "temperature": 0.9,
        });
        let response: ChatResponse = self.post_json("/v1/chat/completions", body).await?;
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .context("chat completion without content")?;
        Ok(text)
    }
}

impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, StorefrontError> {
        let body = json!({
            "model": self.image_model,
            "prompt": prompt,
            "n": 1,
            "size": "1024x1024",
        });
        let response: ImageResponse = self.post_json("/v1/images/generations", body).await?;
        let image = response
            .data
            .into_iter()
            .next()
            .and_then(ImageData::into_image)
            .context("image generation without image data")?;
        Ok(image)
    }
}
