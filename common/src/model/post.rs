use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article. Stored in one list covering both published and draft
/// entries; the public site only ever sees `Published` posts, sorted by
/// publication date descending at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Opaque identifier, unique within the collection. Empty on a new
    /// editor draft; assigned by the repository on first save.
    pub id: String,
    pub title: String,
    /// URL-safe address of the post, derived from the title once at
    /// creation. Never recomputed on later edits, so published URLs stay
    /// stable even when the title changes.
    pub slug: String,
    pub category: String,
    pub featured_image_url: String,
    pub excerpt: String,
    /// Full body as HTML.
    pub content: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub status: PostStatus,
    /// Estimated reading time in minutes.
    pub read_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Published,
    Draft,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "Published",
            PostStatus::Draft => "Draft",
        }
    }
}

/// Derives a URL-safe slug from a post title: lowercased, spaces replaced
/// with hyphens, everything outside `[a-z0-9_-]` dropped.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("5 Ways AI Can Save Time"), "5-ways-ai-can-save-time");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(
            slugify("AI Chatbots vs. Human Support: Finding the Right Balance"),
            "ai-chatbots-vs-human-support-finding-the-right-balance"
        );
        assert_eq!(slugify("What's Next?"), "whats-next");
    }

    #[test]
    fn slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("Q3_2025 Report"), "q3_2025-report");
    }
}
