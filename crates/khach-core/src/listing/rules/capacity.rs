//! Financial capacity extraction.
//!
//! A capacity expression is a threshold in billions of dong, written as a
//! comparison marker, a number or range and the unit word, e.g. `>3 tỷ`,
//! `<2-3 tỷ` or `Đầu tư >10 tỷ`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::record::SortKey;

use super::patterns::{CAPACITY, CAPACITY_NUMBER, LEADING_SEPARATORS};
use super::{ExtractionMatch, FieldExtractor};

/// Capacity field extractor. The value is the trimmed, verbatim expression.
pub struct CapacityExtractor;

impl CapacityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CapacityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CapacityExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        CAPACITY.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().trim().to_string()).with_position(m.start(), m.end())
        })
    }
}

/// The tail of a line split around its capacity expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacitySplit<'a> {
    /// Verbatim capacity expression, empty when none was found.
    pub capacity: String,
    /// Text left for the field segmenter.
    pub remainder: &'a str,
}

/// Split the text after the phone into capacity and remainder.
///
/// Without a capacity expression the whole tail is the remainder.
pub fn extract_capacity(tail: &str) -> CapacitySplit<'_> {
    match CapacityExtractor::new().extract(tail) {
        Some(found) => {
            let after = found.after(tail);
            let skip = LEADING_SEPARATORS.find(after).map_or(0, |m| m.end());
            CapacitySplit {
                capacity: found.value,
                remainder: &after[skip..],
            }
        }
        None => CapacitySplit {
            capacity: String::new(),
            remainder: tail,
        },
    }
}

/// Derive the ranking key from a capacity expression.
///
/// Uses the first number, which is the lower bound of a range. Numbers too
/// large for `Decimal` saturate to `Decimal::MAX`.
pub fn sort_key(capacity: &str) -> SortKey {
    CAPACITY_NUMBER
        .captures(capacity)
        .map(|caps| Decimal::from_str(&caps[1]).unwrap_or(Decimal::MAX))
        .map_or(SortKey::Unbounded, SortKey::Amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_capacity() {
        let split = extract_capacity(">3 tỷ cần gấp");
        assert_eq!(split.capacity, ">3 tỷ");
        assert_eq!(split.remainder, "cần gấp");
    }

    #[test]
    fn test_extract_range_strips_separators() {
        let split = extract_capacity("<2-3 tỷ,  xem nhà cuối tuần | Lê Lợi");
        assert_eq!(split.capacity, "<2-3 tỷ");
        assert_eq!(split.remainder, "xem nhà cuối tuần | Lê Lợi");
    }

    #[test]
    fn test_extract_with_qualifier_case_insensitive() {
        let split = extract_capacity("đầu tư > 10 TỶ, mua đất nền");
        assert_eq!(split.capacity, "đầu tư > 10 TỶ");
        assert_eq!(split.remainder, "mua đất nền");
    }

    #[test]
    fn test_capacity_in_middle_of_tail() {
        let split = extract_capacity("cần nhà hẻm xe hơi >4 tỷ, quận 3");
        assert_eq!(split.capacity, ">4 tỷ");
        assert_eq!(split.remainder, "quận 3");
    }

    #[test]
    fn test_no_capacity_keeps_tail() {
        let split = extract_capacity("  thuê căn hộ 2 phòng");
        assert_eq!(split.capacity, "");
        assert_eq!(split.remainder, "  thuê căn hộ 2 phòng");

        // A number without a comparison marker is not a capacity
        let split = extract_capacity("3 tỷ mua nhà");
        assert_eq!(split.capacity, "");
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(sort_key(">3 tỷ"), SortKey::Amount(Decimal::from(3)));
        assert_eq!(sort_key("<2-3 tỷ"), SortKey::Amount(Decimal::from(2)));
        assert_eq!(sort_key("Đầu tư >15 tỷ"), SortKey::Amount(Decimal::from(15)));
        assert_eq!(sort_key(""), SortKey::Unbounded);
    }

    #[test]
    fn test_sort_key_saturates_oversized_amount() {
        let key = sort_key(">99999999999999999999999999999 tỷ");
        assert_eq!(key, SortKey::Amount(Decimal::MAX));
        assert_eq!(key.rank_cmp(&SortKey::Unbounded), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_extract_takes_first_expression() {
        let found = CapacityExtractor::new().extract("cần >3 tỷ hoặc <5 tỷ").unwrap();
        assert_eq!(found.value, ">3 tỷ");
        assert_eq!(found.position, (6, 13));
    }
}
