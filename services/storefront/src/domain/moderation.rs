//! Comment content rules.

/// Maximum comment length, in characters, after trimming.
pub const MAX_COMMENT_CHARS: usize = 500;

/// Case-insensitive substrings that reject a comment wherever they appear.
pub const BANNED_WORDS: &[&str] = &[
    "spam",
    "scam",
    "phishing",
    "casino",
    "viagra",
    "crypto giveaway",
    "free money",
    "click here",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentViolation {
    Empty,
    TooLong { chars: usize },
}

impl ContentViolation {
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "content must not be empty".to_owned(),
            Self::TooLong { chars } => {
                format!("content must be at most {MAX_COMMENT_CHARS} characters (got {chars})")
            }
        }
    }
}

/// Trim `content` and check its length in characters.
pub fn normalize_comment(content: &str) -> Result<&str, ContentViolation> {
    let trimmed = content.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(ContentViolation::Empty);
    }
    if chars > MAX_COMMENT_CHARS {
        return Err(ContentViolation::TooLong { chars });
    }
    Ok(trimmed)
}

/// First banned word found in `content`, if any.
pub fn find_banned_word(content: &str) -> Option<&'static str> {
    let lowered = content.to_lowercase();
    BANNED_WORDS
        .iter()
        .copied()
        .find(|word| lowered.contains(word))
}
