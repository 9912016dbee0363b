//! Rule-based field extractors for business card text.

pub mod email;
pub mod keywords;
pub mod patterns;
pub mod phone;
pub mod social;
pub mod website;

pub use email::{extract_emails, EmailExtractor};
pub use keywords::{KeywordSet, LineCategory, KEYWORDS};
pub use phone::{extract_phones, PhoneExtractor};
pub use social::{extract_social_links, social_links, LinkedInExtractor, TwitterExtractor};
pub use website::{extract_website, WebsiteExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value extracted from card text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Normalized value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
