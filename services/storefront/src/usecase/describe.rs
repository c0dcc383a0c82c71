//! Descriptions of blended artworks, written by the AI provider when one is
//! configured and composed locally otherwise.

use serde::Serialize;
use tracing::warn;

use crate::domain::repository::{RateLimiter, TextGenerator};
use crate::error::StorefrontError;

pub const MAX_TITLES: usize = 10;
const MAX_TITLE_CHARS: usize = 200;
const MAX_BLEND_MODE_CHARS: usize = 40;

const CURATOR_SYSTEM_PROMPT: &str = "You are a gallery curator. Write evocative, concise \
    descriptions of artworks in two or three sentences. Do not use lists or headings.";

const IMAGERY: [&str; 6] = [
    "threads of starlight",
    "tidal shimmer",
    "folded auroras",
    "quiet geometry",
    "molten twilight",
    "drifting prisms",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    pub description: String,
    pub source: DescriptionSource,
}

pub struct DescribeInput {
    pub artwork_titles: Vec<String>,
    pub blend_mode: String,
    /// Clamped to 0..=100.
    pub intensity: f64,
}

/// Validated, normalised describe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendSpec {
    pub titles: Vec<String>,
    pub blend_mode: String,
    pub intensity: u8,
}

impl BlendSpec {
    pub fn parse(input: DescribeInput) -> Result<Self, StorefrontError> {
        let titles: Vec<String> = input
            .artwork_titles
            .iter()
            .map(|t| t.trim().to_owned())
            .collect();
        if titles.is_empty() || titles.len() > MAX_TITLES {
            return Err(StorefrontError::validation(format!(
                "artworkTitles must contain 1-{MAX_TITLES} titles"
            )));
        }
        if titles
            .iter()
            .any(|t| t.is_empty() || t.chars().count() > MAX_TITLE_CHARS)
        {
            return Err(StorefrontError::validation(format!(
                "each title must be 1-{MAX_TITLE_CHARS} characters"
            )));
        }
        let blend_mode = input.blend_mode.trim().to_lowercase();
        let mode_chars = blend_mode.chars().count();
        if mode_chars == 0 || mode_chars > MAX_BLEND_MODE_CHARS {
            return Err(StorefrontError::validation(format!(
                "blendMode must be 1-{MAX_BLEND_MODE_CHARS} characters"
            )));
        }
        let intensity = if input.intensity.is_nan() {
            0
        } else {
            input.intensity.round().clamp(0.0, 100.0) as u8
        };
        Ok(Self {
            titles,
            blend_mode,
            intensity,
        })
    }

    fn prompt(&self) -> String {
        format!(
            "Describe an artwork created by a {} blend of {} at {}% intensity.",
            self.blend_mode,
            quoted_list(&self.titles),
            self.intensity
        )
    }
}

fn quoted_list(titles: &[String]) -> String {
    let quoted: Vec<String> = titles.iter().map(|t| format!("\"{t}\"")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn mood(intensity: u8) -> &'static str {
    match intensity {
        0..=24 => "whisper-soft",
        25..=49 => "dreamlike",
        50..=74 => "luminous",
        _ => "overwhelming",
    }
}

/// FNV-1a; stable across processes and releases.
fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    bytes.into_iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Local description used without a provider. Same spec, same text.
pub fn fallback_description(spec: &BlendSpec) -> String {
    let seed = fnv1a(
        spec.titles
            .iter()
            .flat_map(|t| t.bytes().chain([0x1f]))
            .chain(spec.blend_mode.bytes()),
    );
    let imagery = IMAGERY[(seed % IMAGERY.len() as u64) as usize];
    let mood = mood(spec.intensity);
    let article = if mood.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "An"
    } else {
        "A"
    };
    format!(
        "{article} {mood} {} blend of {} where {imagery} dissolve into one another at {}% intensity.",
        spec.blend_mode,
        quoted_list(&spec.titles),
        spec.intensity
    )
}

// ── Describe ─────────────────────────────────────────────────────────────────

pub struct DescribeUseCase<T: TextGenerator, L: RateLimiter> {
    pub generator: Option<T>,
    pub limiter: L,
}

fn rate_limit_key(client_ip: &str) -> String {
    format!("describe:{client_ip}")
}

impl<T: TextGenerator, L: RateLimiter> DescribeUseCase<T, L> {
    /// Provider failures degrade to the local description; only the rate limit
    /// and validation fail.
    pub async fn execute(
        &self,
        client_ip: &str,
        input: DescribeInput,
    ) -> Result<DescribeOutput, StorefrontError> {
        if !self.limiter.allow(&rate_limit_key(client_ip)).await? {
            return Err(StorefrontError::RateLimited);
        }

        let spec = BlendSpec::parse(input)?;

        if let Some(generator) = &self.generator {
            match generator
                .generate_text(CURATOR_SYSTEM_PROMPT, &spec.prompt())
                .await
            {
                Ok(description) => {
                    return Ok(DescribeOutput {
                        description,
                        source: DescriptionSource::Ai,
                    });
                }
                Err(e) => warn!(error = %e, "AI description failed; using fallback"),
            }
        }

        Ok(DescribeOutput {
            description: fallback_description(&spec),
            source: DescriptionSource::Fallback,
        })
    }
}
