//! Social profile extraction (LinkedIn, Twitter).

use super::patterns::{LINKEDIN, TWITTER_HANDLE, TWITTER_HANDLE_WORD};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::contact::SocialLinks;

/// LinkedIn profile/company page extractor. Values carry an `https://` scheme.
#[derive(Debug, Clone, Copy)]
pub struct LinkedInExtractor;

impl FieldExtractor for LinkedInExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        LINKEDIN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(format!("https://{}", m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Twitter handle extractor. Values keep the leading `@`.
///
/// Any `@word` counts, including the one inside an email address, unless
/// `word_start_only` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterExtractor {
    word_start_only: bool,
}

impl TwitterExtractor {
    pub fn new() -> Self {
        Self {
            word_start_only: false,
        }
    }

    /// Only accept handles at the start of a word.
    pub fn with_word_start_only(mut self, word_start_only: bool) -> Self {
        self.word_start_only = word_start_only;
        self
    }
}

impl FieldExtractor for TwitterExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let handles: Vec<_> = if self.word_start_only {
            TWITTER_HANDLE_WORD
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .collect()
        } else {
            TWITTER_HANDLE.find_iter(text).collect()
        };

        handles
            .into_iter()
            .map(|handle| {
                ExtractionMatch::new(handle.as_str().to_string(), handle.as_str())
                    .with_position(handle.start(), handle.end())
            })
            .collect()
    }
}

/// Extract the first LinkedIn and Twitter profile from text.
pub fn extract_social_links(text: &str) -> SocialLinks {
    social_links(text, &TwitterExtractor::new())
}

/// Extract social links using the given Twitter extractor.
pub fn social_links(text: &str, twitter: &TwitterExtractor) -> SocialLinks {
    SocialLinks {
        linkedin: LinkedInExtractor
            .extract(text)
            .map(|m| m.value)
            .unwrap_or_default(),
        twitter: twitter.extract(text).map(|m| m.value).unwrap_or_default(),
    }
}
