//! Phone number location.
//!
//! The phone is the anchor of every listing line: the text before it is the
//! customer name, the text after it carries capacity and request.

use super::patterns::{PHONE, WHITESPACE};
use super::{ExtractionMatch, FieldExtractor};

/// Phone field extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
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
        PHONE.find(text).map(|m| {
            ExtractionMatch::new(normalize_phone(m.as_str())).with_position(m.start(), m.end())
        })
    }
}

/// A line split around its phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneSplit<'a> {
    /// Trimmed text before the phone.
    pub name: &'a str,
    /// Normalized phone number.
    pub phone: String,
    /// Text after the phone, leading whitespace stripped.
    pub tail: &'a str,
}

/// Find the first phone-shaped substring and split the line around it.
pub fn locate_phone(line: &str) -> Option<PhoneSplit<'_>> {
    let found = PhoneExtractor::new().extract(line)?;
    Some(PhoneSplit {
        name: found.before(line).trim(),
        tail: found.after(line).trim_start(),
        phone: found.value,
    })
}

/// Collapse internal whitespace to a single space.
pub fn normalize_phone(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
