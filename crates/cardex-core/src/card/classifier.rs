//! Line classification for business card text.
//!
//! Content lines are tagged by an ordered rule chain: address, company,
//! job title, name. Address lines accumulate; every other category is
//! filled by the first line that qualifies.

use serde::Serialize;
use tracing::{debug, trace};

use super::rules::keywords::{KeywordSet, LineCategory};
use super::rules::patterns::{EMAIL, POSTAL_CODE};

/// A content line with the category it was tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LineCategory>,
}

/// Result of classifying the lines of one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLines {
    /// Lines that survived the email/URL/phone pre-filter, in order.
    pub tagged: Vec<TaggedLine>,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub address_lines: Vec<String>,
    /// Whether the name was taken from the first content line because no
    /// line qualified on its own.
    pub name_from_fallback: bool,
}

impl ClassifiedLines {
    fn is_assigned(&self, category: LineCategory) -> bool {
        match category {
            LineCategory::Address => !self.address_lines.is_empty(),
            LineCategory::Company => self.company.is_some(),
            LineCategory::JobTitle => self.job_title.is_some(),
            LineCategory::Name => self.full_name.is_some(),
        }
    }

    fn assign(&mut self, category: LineCategory, line: &str) {
        match category {
            LineCategory::Address => self.address_lines.push(line.to_string()),
            LineCategory::Company => self.company = Some(line.to_string()),
            LineCategory::JobTitle => self.job_title = Some(line.to_string()),
            LineCategory::Name => self.full_name = Some(line.to_string()),
        }
    }
}

/// One step of the classification chain.
struct Rule {
    category: LineCategory,
    /// Repeatable rules keep accepting lines after their first match.
    repeatable: bool,
    predicate: fn(&LineClassifier, &str) -> bool,
}

/// Classification precedence, highest first.
const RULES: [Rule; 4] = [
    Rule {
        category: LineCategory::Address,
        repeatable: true,
        predicate: LineClassifier::is_address,
    },
    Rule {
        category: LineCategory::Company,
        repeatable: false,
        predicate: LineClassifier::is_company,
    },
    Rule {
        category: LineCategory::JobTitle,
        repeatable: false,
        predicate: LineClassifier::is_job_title,
    },
    Rule {
        category: LineCategory::Name,
        repeatable: false,
        predicate: LineClassifier::is_name,
    },
];

/// Heuristic line classifier.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    keywords: KeywordSet,
    email_line_ratio: f32,
    min_name_length: usize,
    max_name_length: usize,
}

impl LineClassifier {
    /// Create a classifier with the built-in keyword tables.
    pub fn new() -> Self {
        Self {
            keywords: KeywordSet::default(),
            email_line_ratio: 0.5,
            min_name_length: 3,
            max_name_length: 49,
        }
    }

    /// Replace the keyword set.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the share of a line an email must exceed for the line to be dropped.
    pub fn with_email_line_ratio(mut self, ratio: f32) -> Self {
        self.email_line_ratio = ratio;
        self
    }

    /// Set the accepted name length range (characters, inclusive).
    pub fn with_name_length(mut self, min: usize, max: usize) -> Self {
        self.min_name_length = min;
        self.max_name_length = max;
        self
    }

    /// Keywords used by this classifier.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Trimmed, non-empty lines that are neither mostly an email, a URL, nor
    /// a bare phone number.
    pub fn content_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| self.is_content_line(line))
            .collect()
    }

    /// Classify the lines of a card.
    pub fn classify(&self, text: &str) -> ClassifiedLines {
        let lines = self.content_lines(text);
        let mut result = ClassifiedLines::default();

        for line in &lines {
            let category = RULES
                .iter()
                .find(|rule| {
                    (rule.repeatable || !result.is_assigned(rule.category))
                        && (rule.predicate)(self, line)
                })
                .map(|rule| rule.category);

            trace!("Line {:?} tagged as {:?}", line, category);

            if let Some(category) = category {
                result.assign(category, line);
            }
            result.tagged.push(TaggedLine {
                text: (*line).to_string(),
                category,
            });
        }

        if result.full_name.is_none() {
            if let Some(first) = lines.first() {
                debug!("No line qualified as a name, using first content line");
                result.full_name = Some((*first).to_string());
                result.name_from_fallback = true;
            }
        }

        debug!(
            "Classified {} content lines ({} address lines)",
            lines.len(),
            result.address_lines.len()
        );

        result
    }

    fn is_content_line(&self, line: &str) -> bool {
        let length = line.chars().count();

        if let Some(email) = EMAIL.find(line) {
            if email.as_str().chars().count() as f32 > length as f32 * self.email_line_ratio {
                return false;
            }
        }

        let lower = line.to_lowercase();
        if lower.contains("www.") || lower.contains("http") {
            return false;
        }

        // What is left after removing phone characters
        let residue = line
            .chars()
            .filter(|c| !(c.is_ascii_digit() || c.is_whitespace() || "-().+".contains(*c)))
            .count();
        residue >= 3
    }

    fn is_address(&self, line: &str) -> bool {
        self.keywords.matches(LineCategory::Address, line) || POSTAL_CODE.is_match(line)
    }

    fn is_company(&self, line: &str) -> bool {
        self.keywords.matches(LineCategory::Company, line)
    }

    fn is_job_title(&self, line: &str) -> bool {
        self.keywords.matches(LineCategory::JobTitle, line)
    }

    fn is_name(&self, line: &str) -> bool {
        let length = line.chars().count();

        !line.chars().any(|c| c.is_ascii_digit())
            && (self.min_name_length..=self.max_name_length).contains(&length)
            && !self.is_company(line)
            && !self.is_job_title(line)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pre_filter() {
        let classifier = LineClassifier::new();
        let text = "Jane Doe\n  \njane@acme.com\nwww.acme.com\n+1 (415) 555-0100\nHTTPS://acme.com\nCEO";

        assert_eq!(classifier.content_lines(text), vec!["Jane Doe", "CEO"]);
    }

    #[test]
    fn test_rule_precedence() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Sales Director, Acme Solutions\nJane Doe");

        assert_eq!(result.company.as_deref(), Some("Sales Director, Acme Solutions"));
        assert_eq!(result.job_title, None);
        assert_eq!(result.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_address_beats_company() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Acme Building, Suite 5\nAcme Inc");

        assert_eq!(result.address_lines, vec!["Acme Building, Suite 5"]);
        assert_eq!(result.company.as_deref(), Some("Acme Inc"));
    }

    #[test]
    fn test_address_lines_accumulate() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Jane Doe\n500 Oak Avenue\nFloor 3\nBoston, MA 02110");

        assert_eq!(
            result.address_lines,
            vec!["500 Oak Avenue", "Floor 3", "Boston, MA 02110"]
        );
    }

    #[test]
    fn test_second_company_line_falls_through() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Acme Inc\nGlobal Partners\nJane Doe");

        assert_eq!(result.company.as_deref(), Some("Acme Inc"));
        assert_eq!(result.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.tagged[1].category, None);
    }

    #[test]
    fn test_name_fallback() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Agent 007\nCEO");

        assert_eq!(result.full_name.as_deref(), Some("Agent 007"));
        assert!(result.name_from_fallback);
        assert_eq!(result.job_title.as_deref(), Some("CEO"));
    }

    #[test]
    fn test_name_length_limits() {
        let classifier = LineClassifier::new();

        let result = classifier.classify("Al\nJane Doe");
        assert_eq!(result.full_name.as_deref(), Some("Jane Doe"));

        let long = "A".repeat(50);
        let result = classifier.classify(&format!("{}\nJane Doe", long));
        assert_eq!(result.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_mostly_email_line_is_skipped_even_with_title() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Jane Doe\nCEO jane@acme.com");

        assert_eq!(result.job_title, None);
        assert_eq!(result.tagged.len(), 1);
    }

    #[test]
    fn test_minority_email_line_is_classified() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("Jane Doe\nChief Executive Officer jane@acme.com");

        assert_eq!(
            result.job_title.as_deref(),
            Some("Chief Executive Officer jane@acme.com")
        );
    }

    #[test]
    fn test_empty_text() {
        let result = LineClassifier::new().classify("");
        assert_eq!(result, ClassifiedLines::default());
    }
}
