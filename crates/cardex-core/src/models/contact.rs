//! Contact data models handed to the contact editing form.
//!
//! Field names serialize in camelCase, which is the shape the editing form
//! and the persistence layer consume.

use serde::{Deserialize, Serialize};

use crate::card::rules::patterns::EMAIL_EXACT;

/// A contact record inferred from business card text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedContact {
    /// Full name as printed on the card.
    pub full_name: String,

    /// First whitespace-separated token of the full name.
    pub first_name: String,

    /// Remaining tokens of the full name.
    pub last_name: String,

    /// Job title line.
    pub job_title: String,

    /// Company line.
    pub company: String,

    /// Email addresses, primary first.
    pub emails: Vec<EmailEntry>,

    /// Phone numbers, primary first.
    pub phones: Vec<PhoneEntry>,

    /// Postal address.
    pub address: Address,

    /// Company or personal website.
    pub website: String,

    /// Social profiles.
    pub social_links: SocialLinks,

    /// Free-form notes (user populated).
    pub notes: String,

    /// Tags (user populated).
    pub tags: Vec<String>,
}

/// An email address with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    #[serde(rename = "type")]
    pub kind: EmailType,
    pub value: String,
    pub is_primary: bool,
}

/// A phone number with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneEntry {
    #[serde(rename = "type")]
    pub kind: PhoneType,
    pub value: String,
    pub is_primary: bool,
}

/// Email label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    #[default]
    Work,
    Personal,
    Other,
}

/// Phone label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    #[default]
    Mobile,
    Office,
    Home,
    Fax,
}

/// Postal address. Every part is independently optional (empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Street name and number.
    pub street: String,

    /// City name.
    pub city: String,

    /// Two-letter state or province code.
    pub state: String,

    /// US ZIP or Canadian postal code.
    pub postal_code: String,

    /// Country.
    pub country: String,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// LinkedIn profile or company URL.
    pub linkedin: String,

    /// Twitter handle including the leading `@`.
    pub twitter: String,
}

impl EmailEntry {
    pub fn new(kind: EmailType, value: impl Into<String>, is_primary: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            is_primary,
        }
    }
}

impl PhoneEntry {
    pub fn new(kind: PhoneType, value: impl Into<String>, is_primary: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            is_primary,
        }
    }
}

impl Address {
    /// Check if the address has any data.
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Format the address for display, one part per line.
    ///
    /// The country is omitted for US addresses.
    pub fn format(&self) -> String {
        let mut parts = Vec::new();

        if !self.street.is_empty() {
            parts.push(self.street.clone());
        }

        if !self.city.is_empty() {
            let mut city_line = self.city.clone();
            if !self.state.is_empty() {
                city_line.push_str(", ");
                city_line.push_str(&self.state);
            }
            if !self.postal_code.is_empty() {
                city_line.push(' ');
                city_line.push_str(&self.postal_code);
            }
            parts.push(city_line);
        } else {
            if !self.state.is_empty() {
                parts.push(self.state.clone());
            }
            if !self.postal_code.is_empty() {
                parts.push(self.postal_code.clone());
            }
        }

        if !self.country.is_empty() && self.country != "USA" && self.country != "US" {
            parts.push(self.country.clone());
        }

        parts.join("\n")
    }
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_empty() && self.twitter.is_empty()
    }
}

impl ParsedContact {
    /// The canonical empty contact: blank strings, one placeholder email and
    /// phone entry, no tags.
    pub fn empty() -> Self {
        Self {
            full_name: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            job_title: String::new(),
            company: String::new(),
            emails: vec![EmailEntry::new(EmailType::Work, "", true)],
            phones: vec![PhoneEntry::new(PhoneType::Mobile, "", true)],
            address: Address::default(),
            website: String::new(),
            social_links: SocialLinks::default(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    /// Primary email address, if one with a value exists.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.is_primary && !e.value.is_empty())
            .map(|e| e.value.as_str())
    }

    /// Primary phone number, if one with a value exists.
    pub fn primary_phone(&self) -> Option<&str> {
        self.phones
            .iter()
            .find(|p| p.is_primary && !p.value.is_empty())
            .map(|p| p.value.as_str())
    }

    /// Initials of up to `max` words of the full name, `"?"` without a name.
    pub fn initials(&self, max: usize) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .take(max)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Validate the contact for review before saving.
    ///
    /// Returns a list of issues; empty values are not checked.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.full_name.trim().is_empty() {
            issues.push("Name is required".to_string());
        }

        for (index, email) in self.emails.iter().enumerate() {
            if !email.value.is_empty() && !EMAIL_EXACT.is_match(&email.value) {
                issues.push(format!("Invalid email address #{}: {}", index + 1, email.value));
            }
        }

        for (index, phone) in self.phones.iter().enumerate() {
            if !phone.value.is_empty() && !is_valid_phone(&phone.value) {
                issues.push(format!("Invalid phone number #{}: {}", index + 1, phone.value));
            }
        }

        if !self.website.is_empty() && url::Url::parse(&self.website).is_err() {
            issues.push(format!("Invalid website URL: {}", self.website));
        }

        issues
    }
}

impl Default for ParsedContact {
    fn default() -> Self {
        Self::empty()
    }
}

/// Count ASCII digits in a string.
pub(crate) fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

fn is_valid_phone(phone: &str) -> bool {
    (7..=15).contains(&digit_count(phone))
}

/// Format a phone number for display.
///
/// US numbers are rendered as `(415) 555-0100` or `+1 (415) 555-0100`;
/// anything else is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => phone.to_string(),
    }
}
