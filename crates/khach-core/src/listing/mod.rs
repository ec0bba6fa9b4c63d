//! Customer listing extraction module.

mod parser;
mod records;
pub mod rules;

pub use parser::{Diagnostic, LineOutcome, ListingParser, ParseOutcome, RuleListingParser};
pub use records::{RecordSet, rank};
