//! Business card parser combining pattern extraction and line classification.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::contact::ParsedContact;

use super::address::assemble_address;
use super::classifier::{LineClassifier, TaggedLine};
use super::rules::keywords::{KeywordSet, LineCategory};
use super::rules::{
    social_links, EmailExtractor, FieldExtractor, PhoneExtractor, TwitterExtractor,
    WebsiteExtractor,
};
use super::CardParser;

/// Result of parsing a card with a report of how it was interpreted.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Parsed contact.
    pub contact: ParsedContact,
    /// Raw OCR text.
    pub raw_text: String,
    /// Content lines and their tags.
    pub tagged_lines: Vec<TaggedLine>,
    /// Fields a reviewer should check.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Heuristic business card parser.
#[derive(Debug, Clone)]
pub struct BusinessCardParser {
    emails: EmailExtractor,
    phones: PhoneExtractor,
    website: WebsiteExtractor,
    twitter: TwitterExtractor,
    classifier: LineClassifier,
}

impl BusinessCardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            emails: EmailExtractor::new(),
            phones: PhoneExtractor::new(),
            website: WebsiteExtractor::new(),
            twitter: TwitterExtractor::new(),
            classifier: LineClassifier::new(),
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let keywords = KeywordSet::default()
            .with_keywords(LineCategory::JobTitle, &config.extra_job_titles)
            .with_keywords(LineCategory::Company, &config.extra_company_suffixes)
            .with_keywords(LineCategory::Address, &config.extra_address_keywords);

        Self::new()
            .with_max_phones(config.max_phones)
            .with_phone_digits(config.min_phone_digits, config.max_phone_digits)
            .with_name_length(config.min_name_length, config.max_name_length)
            .with_email_line_ratio(config.email_line_ratio)
            .with_strict_links(config.strict_links)
            .with_keyword_set(keywords)
    }

    /// Set the maximum number of phone numbers kept.
    pub fn with_max_phones(mut self, max: usize) -> Self {
        self.phones = self.phones.with_max_results(max);
        self
    }

    /// Set the accepted phone digit count range.
    pub fn with_phone_digits(mut self, min: usize, max: usize) -> Self {
        self.phones = self.phones.with_digit_range(min, max);
        self
    }

    /// Set the accepted name length range.
    pub fn with_name_length(mut self, min: usize, max: usize) -> Self {
        self.classifier = self.classifier.with_name_length(min, max);
        self
    }

    /// Set the email share above which a line is not classified.
    pub fn with_email_line_ratio(mut self, ratio: f32) -> Self {
        self.classifier = self.classifier.with_email_line_ratio(ratio);
        self
    }

    /// Keep email domains out of the website and Twitter fields.
    pub fn with_strict_links(mut self, strict: bool) -> Self {
        self.website = self.website.with_skip_email_domains(strict);
        self.twitter = self.twitter.with_word_start_only(strict);
        self
    }

    /// Add a keyword to the built-in tables.
    pub fn with_keyword(mut self, category: LineCategory, keyword: &str) -> Self {
        let keywords = self.classifier.keywords().clone().with_keyword(category, keyword);
        self.classifier = self.classifier.with_keywords(keywords);
        self
    }

    /// Replace the keyword tables.
    pub fn with_keyword_set(mut self, keywords: KeywordSet) -> Self {
        self.classifier = self.classifier.with_keywords(keywords);
        self
    }

    fn assemble(&self, text: &str) -> (ParsedContact, Vec<TaggedLine>) {
        if text.trim().is_empty() {
            debug!("Empty card text, returning empty contact");
            return (ParsedContact::empty(), Vec::new());
        }

        let emails = self.emails.entries(text);
        let phones = self.phones.entries(text);
        let website = self
            .website
            .extract(text)
            .map(|m| m.value)
            .unwrap_or_default();
        let social_links = social_links(text, &self.twitter);

        debug!(
            "Extracted {} emails, {} phones, website: {:?}",
            emails.len(),
            phones.len(),
            website
        );

        let classified = self.classifier.classify(text);
        let address = assemble_address(classified.address_lines.as_slice());

        let full_name = classified.full_name.unwrap_or_default();
        let (first_name, last_name) = split_name(&full_name);

        let contact = ParsedContact {
            full_name,
            first_name,
            last_name,
            job_title: classified.job_title.unwrap_or_default(),
            company: classified.company.unwrap_or_default(),
            emails,
            phones,
            address,
            website,
            social_links,
            notes: String::new(),
            tags: Vec::new(),
        };

        (contact, classified.tagged)
    }
}

impl Default for BusinessCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for BusinessCardParser {
    fn parse(&self, text: &str) -> ParsedContact {
        info!("Parsing business card from {} characters of text", text.len());
        self.assemble(text).0
    }

    fn parse_with_report(&self, text: &str) -> ScanResult {
        let start = Instant::now();

        info!("Parsing business card from {} characters of text", text.len());

        let (contact, tagged_lines) = self.assemble(text);

        let mut warnings = Vec::new();
        if contact.full_name.is_empty() {
            warnings.push("Could not extract name".to_string());
        }
        if contact.primary_email().is_none() {
            warnings.push("Could not extract email".to_string());
        }
        if contact.primary_phone().is_none() {
            warnings.push("Could not extract phone number".to_string());
        }
        if contact.company.is_empty() {
            warnings.push("Could not extract company".to_string());
        }
        if contact.job_title.is_empty() {
            warnings.push("Could not extract job title".to_string());
        }

        debug!(
            "Parsed contact {:?} with {} warnings",
            contact.full_name,
            warnings.len()
        );

        ScanResult {
            contact,
            raw_text: text.to_string(),
            tagged_lines,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Split a full name into first name and the remaining words.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}
