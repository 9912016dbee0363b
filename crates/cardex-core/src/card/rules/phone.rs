//! Phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::contact::{digit_count, PhoneEntry, PhoneType};

/// Fewest digits a phone number may have.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Most digits a phone number may have.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Most phone numbers kept per card.
pub const MAX_PHONES: usize = 3;

/// Phone field extractor.
///
/// Matches are searched line by line so a number never runs into the next
/// line of the card.
#[derive(Debug, Clone)]
pub struct PhoneExtractor {
    min_digits: usize,
    max_digits: usize,
    max_results: usize,
}

impl PhoneExtractor {
    /// Create a new phone extractor accepting 7 to 15 digits, at most 3 numbers.
    pub fn new() -> Self {
        Self {
            min_digits: MIN_PHONE_DIGITS,
            max_digits: MAX_PHONE_DIGITS,
            max_results: MAX_PHONES,
        }
    }

    /// Narrow the accepted digit count range. Bounds outside 7..=15 are
    /// clamped.
    pub fn with_digit_range(mut self, min: usize, max: usize) -> Self {
        self.min_digits = min.clamp(MIN_PHONE_DIGITS, MAX_PHONE_DIGITS);
        self.max_digits = max.clamp(MIN_PHONE_DIGITS, MAX_PHONE_DIGITS);
        self
    }

    /// Lower the maximum number of phone numbers returned (at most 3).
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max.min(MAX_PHONES);
        self
    }

    /// Extract labelled entries: the first number is the primary mobile,
    /// the rest are office numbers.
    pub fn entries(&self, text: &str) -> Vec<PhoneEntry> {
        self.extract_all(text)
            .into_iter()
            .enumerate()
            .map(|(index, m)| {
                let kind = if index == 0 {
                    PhoneType::Mobile
                } else {
                    PhoneType::Office
                };
                PhoneEntry::new(kind, m.value, index == 0)
            })
            .collect()
    }

    fn accepts(&self, phone: &str) -> bool {
        (self.min_digits..=self.max_digits).contains(&digit_count(phone))
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();
        let mut offset = 0;

        for line in text.split('\n') {
            for m in PHONE.find_iter(line) {
                if results.len() >= self.max_results {
                    return results;
                }

                let phone = normalize_phone(m.as_str());
                if !self.accepts(&phone) || results.iter().any(|r| r.value == phone) {
                    continue;
                }

                results.push(
                    ExtractionMatch::new(phone, m.as_str())
                        .with_position(offset + m.start(), offset + m.end()),
                );
            }
            offset += line.len() + 1;
        }

        results
    }
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_phone(phone: &str) -> String {
    phone.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract labelled phone entries from text with the default limits.
pub fn extract_phones(text: &str) -> Vec<PhoneEntry> {
    PhoneExtractor::new().entries(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_phone_formats() {
        let extractor = PhoneExtractor::new();

        for (text, expected) in [
            ("+1 415-555-0100", "+1 415-555-0100"),
            ("(415) 555-0100", "(415) 555-0100"),
            ("415.555.0100", "415.555.0100"),
            ("Tel: 020 7946 0958", "020 7946 0958"),
        ] {
            let m = extractor.extract(text).unwrap();
            assert_eq!(m.value, expected, "input: {}", text);
        }
    }

    #[test]
    fn test_short_numbers_rejected() {
        assert!(extract_phones("Suite 1200").is_empty());
        assert!(extract_phones("Est. 1998").is_empty());
    }

    #[test]
    fn test_labels_dedup_and_cap() {
        let text = "415-555-0100\n415-555-0100\n415-555-0101\n415-555-0102\n415-555-0103";
        let phones = extract_phones(text);

        assert_eq!(
            phones,
            vec![
                PhoneEntry::new(PhoneType::Mobile, "415-555-0100", true),
                PhoneEntry::new(PhoneType::Office, "415-555-0101", false),
                PhoneEntry::new(PhoneType::Office, "415-555-0102", false),
            ]
        );
    }

    #[test]
    fn test_does_not_span_lines() {
        let text = "+1 415-555-0100\n123 Main Street";
        let phones = extract_phones(text);

        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].value, "+1 415-555-0100");
    }

    #[test]
    fn test_position_is_relative_to_text() {
        let text = "Jane\n415-555-0100";
        let m = PhoneExtractor::new().extract(text).unwrap();
        assert_eq!(m.position, Some((5, 17)));
    }

    #[test]
    fn test_custom_limits() {
        let extractor = PhoneExtractor::new().with_max_results(1);
        assert_eq!(extractor.extract_all("415-555-0100\n415-555-0101").len(), 1);

        let extractor = PhoneExtractor::new().with_digit_range(11, 15);
        assert!(extractor.extract_all("415-555-0100").is_empty());
    }

    #[test]
    fn test_limits_cannot_be_widened() {
        let extractor = PhoneExtractor::new()
            .with_max_results(10)
            .with_digit_range(3, 20);

        let text = "415-555-0100\n415-555-0101\n415-555-0102\n415-555-0103";
        assert_eq!(extractor.extract_all(text).len(), MAX_PHONES);
        assert!(extractor.extract_all("Suite 1200").is_empty());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(" +1  415\t555 0100 "), "+1 415 555 0100");
    }
}
