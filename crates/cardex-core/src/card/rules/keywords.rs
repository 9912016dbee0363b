//! Keyword tables for line classification.
//!
//! Keywords match case-insensitively on whole words. A multi-word keyword
//! matches a contiguous run of words, and punctuation around words is
//! ignored, so `Inc` also matches `Inc.` and `Inc,`.

use serde::{Deserialize, Serialize};

/// Category a content line of a card can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Address,
    Company,
    JobTitle,
    Name,
}

use LineCategory::{Address, Company, JobTitle};

/// Built-in keyword table.
pub static KEYWORDS: &[(&str, LineCategory)] = &[
    // Address
    ("Street", Address),
    ("St", Address),
    ("Avenue", Address),
    ("Ave", Address),
    ("Road", Address),
    ("Rd", Address),
    ("Boulevard", Address),
    ("Blvd", Address),
    ("Drive", Address),
    ("Lane", Address),
    ("Plaza", Address),
    ("Suite", Address),
    ("Ste", Address),
    ("Floor", Address),
    ("Building", Address),
    ("PO Box", Address),
    ("P.O. Box", Address),
    // Company suffixes
    ("Inc", Company),
    ("LLC", Company),
    ("LLP", Company),
    ("Ltd", Company),
    ("PLC", Company),
    ("GmbH", Company),
    ("Corp", Company),
    ("Corporation", Company),
    ("Co", Company),
    ("Company", Company),
    ("Group", Company),
    ("Holdings", Company),
    ("Partners", Company),
    ("Solutions", Company),
    ("Services", Company),
    ("Technologies", Company),
    ("Labs", Company),
    ("Consulting", Company),
    ("Agency", Company),
    ("International", Company),
    ("Global", Company),
    ("Enterprises", Company),
    // Job titles
    ("CEO", JobTitle),
    ("CTO", JobTitle),
    ("CFO", JobTitle),
    ("COO", JobTitle),
    ("CMO", JobTitle),
    ("CIO", JobTitle),
    ("Chief", JobTitle),
    ("President", JobTitle),
    ("Vice President", JobTitle),
    ("VP", JobTitle),
    ("Director", JobTitle),
    ("Manager", JobTitle),
    ("Lead", JobTitle),
    ("Head", JobTitle),
    ("Engineer", JobTitle),
    ("Developer", JobTitle),
    ("Designer", JobTitle),
    ("Architect", JobTitle),
    ("Analyst", JobTitle),
    ("Consultant", JobTitle),
    ("Specialist", JobTitle),
    ("Coordinator", JobTitle),
    ("Associate", JobTitle),
    ("Assistant", JobTitle),
    ("Senior", JobTitle),
    ("Junior", JobTitle),
    ("Executive", JobTitle),
    ("Officer", JobTitle),
    ("Administrator", JobTitle),
    ("Sales", JobTitle),
    ("Marketing", JobTitle),
    ("Finance", JobTitle),
    ("Operations", JobTitle),
    ("Partner", JobTitle),
    ("Founder", JobTitle),
    ("Co-Founder", JobTitle),
    ("Owner", JobTitle),
    ("Principal", JobTitle),
    ("Attorney", JobTitle),
    ("Recruiter", JobTitle),
];

/// A compiled set of keywords, grouped by category.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    entries: Vec<(Vec<String>, LineCategory)>,
}

impl KeywordSet {
    /// Create an empty keyword set.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a keyword set from a table.
    pub fn from_table(table: &[(&str, LineCategory)]) -> Self {
        table
            .iter()
            .fold(Self::empty(), |set, (keyword, category)| {
                set.with_keyword(*category, keyword)
            })
    }

    /// Add a keyword. Blank keywords are ignored.
    pub fn with_keyword(mut self, category: LineCategory, keyword: &str) -> Self {
        let words = words(keyword);
        if !words.is_empty() {
            self.entries.push((words, category));
        }
        self
    }

    /// Add several keywords of one category.
    pub fn with_keywords<I, S>(self, category: LineCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keywords
            .into_iter()
            .fold(self, |set, keyword| set.with_keyword(category, keyword.as_ref()))
    }

    /// Number of keywords registered for a category.
    pub fn count(&self, category: LineCategory) -> usize {
        self.entries.iter().filter(|(_, c)| *c == category).count()
    }

    /// Check whether the line contains any keyword of the category.
    pub fn matches(&self, category: LineCategory, line: &str) -> bool {
        self.find(category, line).is_some()
    }

    /// First keyword of the category found in the line, as lowercase words.
    pub fn find(&self, category: LineCategory, line: &str) -> Option<String> {
        let line_words = words(line);

        self.entries
            .iter()
            .filter(|(_, c)| *c == category)
            .find(|(keyword, _)| {
                line_words
                    .windows(keyword.len())
                    .any(|window| window == keyword.as_slice())
            })
            .map(|(keyword, _)| keyword.join(" "))
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_table(KEYWORDS)
    }
}

/// Split text into lowercase words. Hyphens inside a word are kept so that
/// `Co-Founder` stays one word.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .map(|word| word.trim_matches('-'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
