//! Postal address assembly from address-tagged lines.

use tracing::debug;

use super::rules::patterns::{POSTAL_CODE, STATE_CODE};
use crate::models::contact::Address;

/// Country assumed for addresses with more than this many comma-separated parts.
const COUNTRY_SEGMENT_THRESHOLD: usize = 3;
const DEFAULT_COUNTRY: &str = "USA";

/// Assemble a structured address from address lines, in card order.
///
/// The lines are joined with `", "`. The first segment is the street and the
/// second, minus any state or postal code, is the city. The state is the
/// last two-letter uppercase token so that a trailing state wins over an
/// abbreviation earlier in the text.
pub fn assemble_address<S: AsRef<str>>(lines: &[S]) -> Address {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.trim().is_empty() {
        return Address::default();
    }

    let postal_code = POSTAL_CODE
        .find(&joined)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let state = STATE_CODE
        .find_iter(&joined)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let segments: Vec<&str> = joined.split(',').map(str::trim).collect();

    let street = segments.first().map(|s| s.to_string()).unwrap_or_default();
    let city = segments
        .get(1)
        .map(|segment| {
            let without_state = STATE_CODE.replace_all(segment, "");
            POSTAL_CODE
                .replace_all(&without_state, "")
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    let country = if segments.len() > COUNTRY_SEGMENT_THRESHOLD {
        DEFAULT_COUNTRY.to_string()
    } else {
        String::new()
    };

    debug!(
        "Assembled address from {} segments (postal code: {:?}, state: {:?})",
        segments.len(),
        postal_code,
        state
    );

    Address {
        street,
        city,
        state,
        postal_code,
        country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line_address() {
        let address = assemble_address(&["123 Main Street, Springfield, IL 62704"]);

        assert_eq!(
            address,
            Address {
                street: "123 Main Street".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62704".to_string(),
                country: String::new(),
            }
        );
    }

    #[test]
    fn test_multi_line_address() {
        let address = assemble_address(&["500 Oak Avenue", "Boston MA 02110"]);

        assert_eq!(address.street, "500 Oak Avenue");
        assert_eq!(address.city, "Boston");
        assert_eq!(address.state, "MA");
        assert_eq!(address.postal_code, "02110");
        assert_eq!(address.country, "");
    }

    #[test]
    fn test_country_default_needs_four_segments() {
        let address = assemble_address(&["500 Oak Avenue", "Floor 3", "Boston", "MA 02110"]);
        assert_eq!(address.country, "USA");
        assert_eq!(address.city, "Floor 3");
    }

    #[test]
    fn test_last_state_code_wins() {
        let address = assemble_address(&["1 NW Plaza", "Portland, OR 97209"]);
        assert_eq!(address.state, "OR");
        assert_eq!(address.city, "Portland");
    }

    #[test]
    fn test_canadian_postal_code() {
        let address = assemble_address(&["80 Wellington Street", "Ottawa ON K1A 0A2"]);
        assert_eq!(address.postal_code, "K1A 0A2");
        assert_eq!(address.state, "ON");
        assert_eq!(address.city, "Ottawa");
    }

    #[test]
    fn test_no_lines() {
        let empty: [&str; 0] = [];
        assert_eq!(assemble_address(&empty), Address::default());
    }
}
