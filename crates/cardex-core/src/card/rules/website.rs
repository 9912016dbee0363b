//! Website extraction.

use std::ops::Range;

use super::patterns::{EMAIL, WEBSITE};
use super::{ExtractionMatch, FieldExtractor};

/// Host names that belong to other contact fields.
const EXCLUDED_HOSTS: [&str; 4] = ["linkedin", "twitter", "facebook", "instagram"];

/// Website field extractor.
///
/// Skips candidates containing `@` or pointing at a social platform, and
/// prefixes bare domains with `https://`. The domain of an email address is
/// still a candidate unless `skip_email_domains` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebsiteExtractor {
    skip_email_domains: bool,
}

impl WebsiteExtractor {
    pub fn new() -> Self {
        Self {
            skip_email_domains: false,
        }
    }

    /// Also skip candidates that overlap an email address.
    pub fn with_skip_email_domains(mut self, skip: bool) -> Self {
        self.skip_email_domains = skip;
        self
    }
}

impl FieldExtractor for WebsiteExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let email_spans: Vec<Range<usize>> = if self.skip_email_domains {
            EMAIL.find_iter(text).map(|m| m.range()).collect()
        } else {
            Vec::new()
        };

        WEBSITE
            .find_iter(text)
            .filter(|m| {
                !email_spans
                    .iter()
                    .any(|span| m.start() < span.end && span.start < m.end())
            })
            .filter(|m| is_candidate(m.as_str()))
            .map(|m| {
                ExtractionMatch::new(normalize_url(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

fn is_candidate(url: &str) -> bool {
    let lower = url.to_lowercase();
    !lower.contains('@') && !EXCLUDED_HOSTS.iter().any(|host| lower.contains(host))
}

/// Prefix a URL with `https://` unless it already has an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    if url.to_lowercase().starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Extract the first website from text, or an empty string.
pub fn extract_website(text: &str) -> String {
    WebsiteExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_website() {
        assert_eq!(extract_website("www.acme.com"), "https://www.acme.com");
        assert_eq!(extract_website("Visit acme.io/team"), "https://acme.io/team");
        assert_eq!(extract_website("http://acme.com"), "http://acme.com");
    }

    #[test]
    fn test_email_domain_is_a_candidate_by_default() {
        assert_eq!(extract_website("jane@acme.com"), "https://acme.com");
        assert_eq!(
            extract_website("jane@acme.com\nwww.acme-labs.com"),
            "https://acme.com"
        );
    }

    #[test]
    fn test_skip_email_domains() {
        let extractor = WebsiteExtractor::new().with_skip_email_domains(true);

        assert!(extractor.extract("jane@acme.com").is_none());
        assert!(extractor.extract("jane.doe@acme.com").is_none());
        assert_eq!(
            extractor
                .extract("jane@acme.com\nwww.acme-labs.com")
                .map(|m| m.value),
            Some("https://www.acme-labs.com".to_string())
        );
    }

    #[test]
    fn test_social_hosts_are_skipped() {
        let text = "linkedin.com/in/janedoe\ninstagram.com/jane\nacme.com";
        assert_eq!(extract_website(text), "https://acme.com");
    }

    #[test]
    fn test_no_website() {
        assert_eq!(extract_website("Jane Doe\nCEO\nAcme Corp Inc."), "");
    }
}
