//! Rule-based listing parser: one input line in, at most one record out.

use std::fmt;

use tracing::{debug, info, warn};

use crate::models::record::{RankedRecord, Record, Schema};

use super::records::{RecordSet, rank};
use super::rules::{FieldSegmenter, extract_capacity, locate_phone, segmenter_for, sort_key, title_case};

/// A rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the raw text.
    pub line: usize,
    /// Trimmed content of the line.
    pub content: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no phone number found on line {}: {}", self.line, self.content)
    }
}

/// What became of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming; ignored silently.
    Blank,
    /// No phone number; dropped.
    Rejected(Diagnostic),
    /// A record with its sort key, not yet ranked.
    Parsed(RankedRecord),
}

/// Result of parsing a whole text.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Records ranked by financial capacity.
    pub records: RecordSet,
    /// One entry per rejected line, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Trait for listing parsing.
pub trait ListingParser {
    /// Parse every line of the text into a ranked record set.
    fn parse(&self, text: &str) -> ParseOutcome;
}

/// Regex-driven parser for one schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleListingParser {
    schema: Schema,
}

impl RuleListingParser {
    /// Create a parser for the base schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Parse one raw line. `line_number` is 1-based and only used for
    /// diagnostics.
    pub fn parse_line(&self, line_number: usize, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        let Some(split) = locate_phone(line) else {
            return LineOutcome::Rejected(Diagnostic {
                line: line_number,
                content: line.to_string(),
            });
        };

        let capacity = extract_capacity(split.tail);
        let segments = segmenter_for(self.schema).segment(capacity.remainder);
        let key = sort_key(&capacity.capacity);

        let name = if self.schema.title_cases_names() {
            title_case(split.name)
        } else {
            split.name.to_string()
        };

        debug!("Line {}: phone {} sort key {}", line_number, split.phone, key.as_f64());

        LineOutcome::Parsed(RankedRecord::new(
            Record {
                name,
                phone: split.phone,
                financial_capacity: capacity.capacity,
                request: segments.request,
                extension: segments.extension,
            },
            key,
        ))
    }
}

impl ListingParser for RuleListingParser {
    fn parse(&self, text: &str) -> ParseOutcome {
        let mut ranked = Vec::new();
        let mut diagnostics = Vec::new();
        let mut line_count = 0;

        for (index, line) in text.split('\n').enumerate() {
            line_count += 1;
            match self.parse_line(index + 1, line) {
                LineOutcome::Blank => {}
                LineOutcome::Rejected(diagnostic) => {
                    warn!("{}", diagnostic);
                    diagnostics.push(diagnostic);
                }
                LineOutcome::Parsed(record) => ranked.push(record),
            }
        }

        let records = RecordSet::new(rank(ranked));

        info!(
            "Parsed {} records from {} lines ({} schema, {} rejected)",
            records.len(),
            line_count,
            self.schema,
            diagnostics.len()
        );

        ParseOutcome {
            records,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{RecordExtension, SortKey};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn parsed(outcome: LineOutcome) -> RankedRecord {
        match outcome {
            LineOutcome::Parsed(record) => record,
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_base_line() {
        let parser = RuleListingParser::new();
        let ranked = parsed(parser.parse_line(1, "Nguyen Van A 0901234567 >3 tỷ cần gấp"));

        assert_eq!(
            ranked.record,
            Record {
                name: "Nguyen Van A".to_string(),
                phone: "0901234567".to_string(),
                financial_capacity: ">3 tỷ".to_string(),
                request: "cần gấp".to_string(),
                extension: None,
            }
        );
        assert_eq!(ranked.sort_key, SortKey::Amount(Decimal::from(3)));
    }

    #[test]
    fn test_parse_extended_line() {
        let parser = RuleListingParser::new().with_schema(Schema::Extended);
        let ranked = parsed(parser.parse_line(
            1,
            "0909 888777 <2-3 tỷ, xem nhà cuối tuần | Lê Lợi | ưu tiên thiện chí",
        ));

        assert_eq!(
            ranked.record,
            Record {
                name: String::new(),
                phone: "0909 888777".to_string(),
                financial_capacity: "<2-3 tỷ".to_string(),
                request: "xem nhà cuối tuần".to_string(),
                extension: Some(RecordExtension {
                    street: "Lê Lợi".to_string(),
                    note: "ưu tiên thiện chí".to_string(),
                }),
            }
        );
        assert_eq!(ranked.sort_key, SortKey::Amount(Decimal::from(2)));
    }

    #[test]
    fn test_extended_title_cases_name() {
        let parser = RuleListingParser::new().with_schema(Schema::Extended);
        let ranked = parsed(parser.parse_line(1, "chị THU hà 0911222333 >1 tỷ"));
        assert_eq!(ranked.record.name, "Chị Thu Hà");

        let base = parsed(RuleListingParser::new().parse_line(1, "chị THU hà 0911222333 >1 tỷ"));
        assert_eq!(base.record.name, "chị THU hà");
    }

    #[test]
    fn test_without_capacity_request_is_tail() {
        let ranked = parsed(RuleListingParser::new().parse_line(1, "Anh Bảo 0987654321 thuê mặt bằng"));
        assert_eq!(ranked.record.financial_capacity, "");
        assert_eq!(ranked.record.request, "thuê mặt bằng");
        assert_eq!(ranked.sort_key, SortKey::Unbounded);
    }

    #[test]
    fn test_rejected_line() {
        let outcome = RuleListingParser::new().parse_line(4, "  không có số điện thoại ở đây ");
        assert_eq!(
            outcome,
            LineOutcome::Rejected(Diagnostic {
                line: 4,
                content: "không có số điện thoại ở đây".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(RuleListingParser::new().parse_line(1, " \t "), LineOutcome::Blank);
    }

    #[test]
    fn test_parse_counts_lines_including_blanks() {
        let text = "Anh Nam 0901234567 >2 tỷ\n\nkhông có số điện thoại ở đây\r\nChị Hoa 0912345678";
        let outcome = RuleListingParser::new().parse(text);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic {
                line: 3,
                content: "không có số điện thoại ở đây".to_string(),
            }]
        );
        assert_eq!(
            outcome.diagnostics[0].to_string(),
            "no phone number found on line 3: không có số điện thoại ở đây"
        );
    }

    #[test]
    fn test_parse_orders_by_capacity() {
        let text = "Khách không tài chính 0900000001 hỏi giá\n\
                    Khách năm tỷ 0900000002 >5 tỷ\n\
                    Khách hai tỷ 0900000003 <2-4 tỷ\n\
                    Khách năm tỷ nữa 0900000004 Đầu tư >5 tỷ";
        let outcome = RuleListingParser::new().parse(text);

        let phones: Vec<&str> = outcome.records.iter().map(|r| r.phone.as_str()).collect();
        assert_eq!(
            phones,
            vec!["0900000002", "0900000004", "0900000003", "0900000001"]
        );
    }

    #[test]
    fn test_phone_glued_to_name_is_accepted() {
        let ranked = parsed(RuleListingParser::new().parse_line(1, "Chị Hà0901234567 >3 tỷ"));
        assert_eq!(ranked.record.name, "Chị Hà");
        assert_eq!(ranked.record.phone, "0901234567");
        assert_eq!(ranked.record.financial_capacity, ">3 tỷ");
    }

    #[test]
    fn test_oversized_amount_ranks_before_missing_capacity() {
        let text = "Không tiền 0900000001 hỏi giá
                    Đại gia 0900000002 >99999999999999999999999999999 tỷ";
        let outcome = RuleListingParser::new().parse(text);

        let phones: Vec<&str> = outcome.records.iter().map(|r| r.phone.as_str()).collect();
        assert_eq!(phones, vec!["0900000002", "0900000001"]);
    }

    #[test]
    fn test_parse_empty_text() {
        let outcome = RuleListingParser::new().parse("");
        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }
}
