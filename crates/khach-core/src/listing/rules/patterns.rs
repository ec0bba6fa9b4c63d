//! Common regex patterns for customer listing extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Phone: 3-4 digits, optional single space, 6-7 digits. ASCII word
    // boundaries, so a phone glued to an accented letter still matches.
    pub static ref PHONE: Regex = Regex::new(
        r"(?-u:\b)[0-9]{3,4}\s?[0-9]{6,7}(?-u:\b)"
    ).unwrap();

    // Financial capacity: optional "Đầu tư", < or >, number or range, "tỷ"
    pub static ref CAPACITY: Regex = Regex::new(
        r"(?i)(?:Đầu tư\s*)?[<>]\s*[0-9]+(?:[\s-]*[0-9]+)?\s*tỷ"
    ).unwrap();

    // First number of a capacity expression, with optional range upper bound
    pub static ref CAPACITY_NUMBER: Regex = Regex::new(
        r"([0-9]+)(?:\s*-\s*([0-9]+))?"
    ).unwrap();

    // Leading separators left after the capacity expression
    pub static ref LEADING_SEPARATORS: Regex = Regex::new(
        r"^[,\s]+"
    ).unwrap();

    // Company marker in a customer name
    pub static ref COMPANY: Regex = Regex::new(
        r"(?i)công\s+ty"
    ).unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(
        r"\s+"
    ).unwrap();
}
