//! Customer record models.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Record layout variant.
///
/// The schema only changes how the text after the financial capacity is
/// segmented, and whether names are title-cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// `name phone capacity request`.
    #[default]
    Base,
    /// `name phone capacity request | street | note`.
    Extended,
}

impl Schema {
    /// Whether the name segment is title-cased after extraction.
    pub fn title_cases_names(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// Stable identifier used for store keys and config values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" | "v1" => Ok(Self::Base),
            "extended" | "v2" => Ok(Self::Extended),
            other => Err(format!("unknown schema: {}", other)),
        }
    }
}

/// One structured customer entry derived from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Customer name, possibly empty.
    pub name: String,

    /// Phone number with at most one separating space.
    pub phone: String,

    /// Verbatim financial-capacity expression (e.g. `>3 tỷ`), or empty.
    pub financial_capacity: String,

    /// Free-text request.
    pub request: String,

    /// Street and note, present only for the extended schema.
    #[serde(flatten)]
    pub extension: Option<RecordExtension>,
}

/// Trailing fields of the extended schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordExtension {
    /// Title-cased street name.
    pub street: String,

    /// Everything after the street, pipe-joined.
    pub note: String,
}

impl Record {
    /// Street name, empty outside the extended schema.
    pub fn street(&self) -> &str {
        self.extension.as_ref().map_or("", |e| e.street.as_str())
    }

    /// Note, empty outside the extended schema.
    pub fn note(&self) -> &str {
        self.extension.as_ref().map_or("", |e| e.note.as_str())
    }

    /// All fields a user can see, in display order.
    pub fn visible_fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.financial_capacity.as_str(),
            self.request.as_str(),
            self.street(),
            self.note(),
        ]
    }

    /// Case-insensitive substring match over the visible fields.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.visible_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Sort key derived from the financial capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// First number of the capacity expression, in billions.
    Amount(Decimal),
    /// No capacity expression, or no number in it. Treated as `+inf`.
    Unbounded,
}

impl SortKey {
    /// Numeric view of the key; `Unbounded` is positive infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Amount(amount) => amount.to_f64().unwrap_or(f64::INFINITY),
            Self::Unbounded => f64::INFINITY,
        }
    }

    /// Ordering used for ranking: larger amounts first, unbounded last.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Amount(a), Self::Amount(b)) => b.cmp(a),
            (Self::Amount(_), Self::Unbounded) => Ordering::Less,
            (Self::Unbounded, Self::Amount(_)) => Ordering::Greater,
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
        }
    }
}

/// A record paired with its transient sort key.
///
/// Only exists between building and ranking; the key never reaches a
/// [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecord {
    pub record: Record,
    pub sort_key: SortKey,
}

impl RankedRecord {
    pub fn new(record: Record, sort_key: SortKey) -> Self {
        Self { record, sort_key }
    }

    /// Drop the sort key.
    pub fn into_record(self) -> Record {
        self.record
    }
}

/// A record annotated with its 1-based position for export.
#[derive(Debug, Clone, Serialize)]
pub struct NumberedRecord<'a> {
    pub position: usize,
    #[serde(flatten)]
    pub record: &'a Record,
}
