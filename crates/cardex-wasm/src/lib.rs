//! WASM bindings for business card OCR text parsing.
//!
//! This crate provides WebAssembly bindings for the card capture front-end.
//! Contacts cross the boundary as plain JS objects in camelCase.

use wasm_bindgen::prelude::*;

use cardex_core::{
    format_phone as format_phone_number, parse_business_card, Address, BusinessCardParser,
    CardParser as _, CardexConfig, ParsedContact,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse the OCR text of a business card into a contact.
///
/// Anything other than a string yields the empty contact.
#[wasm_bindgen(js_name = parseBusinessCard)]
pub fn parse_card(value: JsValue) -> Result<JsValue, JsValue> {
    let contact = match value.as_string() {
        Some(text) => parse_business_card(&text),
        None => ParsedContact::empty(),
    };
    to_js(&contact)
}

/// The placeholder contact used to seed an empty editing form.
#[wasm_bindgen(js_name = createEmptyContact)]
pub fn create_empty_contact() -> Result<JsValue, JsValue> {
    to_js(&ParsedContact::empty())
}

/// Validate a contact object, returning the list of issues.
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact(value: JsValue) -> Result<Vec<String>, JsValue> {
    let contact: ParsedContact = from_js(value)?;
    Ok(contact.validate())
}

/// Format a phone number for display.
#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone(phone: &str) -> String {
    format_phone_number(phone)
}

/// Format an address object as display lines.
#[wasm_bindgen(js_name = formatAddress)]
pub fn format_address(value: JsValue) -> Result<String, JsValue> {
    let address: Address = from_js(value)?;
    Ok(address.format())
}

/// Card parser class for browser use.
#[wasm_bindgen(js_name = CardParser)]
pub struct WasmCardParser {
    parser: BusinessCardParser,
}

#[wasm_bindgen(js_class = CardParser)]
impl WasmCardParser {
    /// Create a parser, optionally from a JSON configuration string.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<WasmCardParser, JsValue> {
        let parser = match config {
            Some(json) => {
                let config: CardexConfig = serde_json::from_str(&json)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                config
                    .extraction
                    .validate()
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                BusinessCardParser::from_config(&config.extraction)
            }
            None => BusinessCardParser::new(),
        };

        Ok(Self { parser })
    }

    /// Parse card text into a contact.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }
}
