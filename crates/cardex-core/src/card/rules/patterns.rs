//! Common regex patterns for business card extraction.
//!
//! All patterns are compiled once and only used through `find`,
//! `find_iter`, `captures` and `is_match`, which keep no state between calls.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email address anywhere in the text
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Whole-string email, used for validation
    pub static ref EMAIL_EXACT: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();

    // Phone number tolerant of spaces, dashes, dots, parentheses and a leading +
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?1?[-.\s]?)?\(?[0-9]{2,4}\)?[-.\s]?[0-9]{2,4}[-.\s]?[0-9]{2,4}(?:[-.\s]?[0-9]{1,4})?"
    ).unwrap();

    // Domain-like website, optional scheme and www
    pub static ref WEBSITE: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?[a-z0-9][a-z0-9-]+\.[a-z]{2,}(?:/\S*)?"
    ).unwrap();

    // LinkedIn profile or company page
    pub static ref LINKEDIN: Regex = Regex::new(
        r"(?i)linkedin\.com/(?:in|company)/[a-z0-9-]+"
    ).unwrap();

    // Twitter handle anywhere in the text
    pub static ref TWITTER_HANDLE: Regex = Regex::new(
        r"@[A-Za-z0-9_]+"
    ).unwrap();

    // Twitter handle starting a word, captured in group 1
    pub static ref TWITTER_HANDLE_WORD: Regex = Regex::new(
        r"(?:^|\s)(@[A-Za-z0-9_]+)"
    ).unwrap();

    // US ZIP (5 or 9 digits) or Canadian postal code
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"\b[0-9]{5}(?:-[0-9]{4})?\b|\b[A-Z][0-9][A-Z]\s?[0-9][A-Z][0-9]\b"
    ).unwrap();

    // Two-letter uppercase state/province code
    pub static ref STATE_CODE: Regex = Regex::new(
        r"\b[A-Z]{2}\b"
    ).unwrap();
}
