//! Core library for business card OCR text processing.
//!
//! This crate provides:
//! - Pattern extraction for emails, phones, websites and social profiles
//! - Keyword-driven line classification (name, job title, company, address)
//! - Postal address assembly from classified lines
//! - The `ParsedContact` model handed to the contact editing form

pub mod card;
pub mod error;
pub mod models;

pub use card::{BusinessCardParser, CardParser, ScanResult};
pub use error::{CardexError, Result};
pub use models::config::{CardexConfig, ExtractionConfig};
pub use models::contact::{
    format_phone, Address, EmailEntry, EmailType, ParsedContact, PhoneEntry, PhoneType,
    SocialLinks,
};

/// Parse OCR text of a business card with the default settings.
pub fn parse_business_card(text: &str) -> ParsedContact {
    BusinessCardParser::new().parse(text)
}
