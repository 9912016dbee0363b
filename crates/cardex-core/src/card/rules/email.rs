//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::contact::{EmailEntry, EmailType};

/// Email field extractor.
///
/// Values are lower-cased and deduplicated in first-seen order.
#[derive(Debug, Clone, Copy)]
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract labelled entries: the first address is the primary work
    /// address, the rest are personal.
    pub fn entries(&self, text: &str) -> Vec<EmailEntry> {
        self.extract_all(text)
            .into_iter()
            .enumerate()
            .map(|(index, m)| {
                let kind = if index == 0 {
                    EmailType::Work
                } else {
                    EmailType::Personal
                };
                EmailEntry::new(kind, m.value, index == 0)
            })
            .collect()
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for m in EMAIL.find_iter(text) {
            let email = m.as_str().to_lowercase();

            if results.iter().any(|r| r.value == email) {
                continue;
            }

            results.push(ExtractionMatch::new(email, m.as_str()).with_position(m.start(), m.end()));
        }

        results
    }
}

/// Extract labelled email entries from text.
pub fn extract_emails(text: &str) -> Vec<EmailEntry> {
    EmailExtractor::new().entries(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_emails_labels() {
        let text = "Jane Doe\njane@acme.com\njane.doe@gmail.com";
        let emails = extract_emails(text);

        assert_eq!(
            emails,
            vec![
                EmailEntry::new(EmailType::Work, "jane@acme.com", true),
                EmailEntry::new(EmailType::Personal, "jane.doe@gmail.com", false),
            ]
        );
    }

    #[test]
    fn test_dedup_is_case_insensitive() {
        let text = "Jane@Acme.com | jane@acme.com | JANE@ACME.COM";
        let emails = extract_emails(text);

        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].value, "jane@acme.com");
        assert!(emails[0].is_primary);
    }

    #[test]
    fn test_no_emails() {
        assert!(extract_emails("Jane Doe\nCEO").is_empty());
    }

    #[test]
    fn test_match_position() {
        let m = EmailExtractor::new().extract("mail: jane@acme.com").unwrap();
        assert_eq!(m.position, Some((6, 19)));
        assert_eq!(m.source, "jane@acme.com");
    }
}
