//! The ranked record set: ordering, search and numbering.

use serde::Serialize;

use crate::models::record::{NumberedRecord, RankedRecord, Record};

/// Sort by descending amount, keeping input order on ties, and drop the
/// sort keys.
pub fn rank(mut ranked: Vec<RankedRecord>) -> Vec<Record> {
    // `sort_by` is stable.
    ranked.sort_by(|a, b| a.sort_key.rank_cmp(&b.sort_key));
    ranked.into_iter().map(RankedRecord::into_record).collect()
}

/// Records in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Wrap records that are already ranked.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }

    /// Records matching the query, in ranked order.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + use<'a> {
        let query = query.to_lowercase();
        self.records.iter().filter(move |r| r.matches(&query))
    }

    /// Owned copy of the records matching the query.
    pub fn filtered(&self, query: &str) -> RecordSet {
        RecordSet::new(self.search(query).cloned().collect())
    }

    /// Attach 1-based positions for export.
    pub fn numbered(records: &[Record]) -> Vec<NumberedRecord<'_>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| NumberedRecord {
                position: i + 1,
                record,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
