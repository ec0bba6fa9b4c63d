//! Trailing-field segmentation, the only schema-dependent stage.

use crate::models::record::{RecordExtension, Schema};

use super::text::title_case;

const FIELD_DELIMITER: char = '|';
const NOTE_SEPARATOR: &str = " | ";

/// Fields cut from the remainder after the financial capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub request: String,
    pub extension: Option<RecordExtension>,
}

/// Strategy that splits the remainder into schema fields.
pub trait FieldSegmenter {
    fn segment(&self, remainder: &str) -> Segments;
}

/// Base schema: the whole remainder is the request.
pub struct BaseSegmenter;

impl FieldSegmenter for BaseSegmenter {
    fn segment(&self, remainder: &str) -> Segments {
        Segments {
            request: remainder.to_string(),
            extension: None,
        }
    }
}

/// Extended schema: `request | street | note...`.
pub struct ExtendedSegmenter;

impl FieldSegmenter for ExtendedSegmenter {
    fn segment(&self, remainder: &str) -> Segments {
        let parts: Vec<&str> = remainder.split(FIELD_DELIMITER).map(str::trim).collect();

        let request = parts.first().copied().unwrap_or_default().to_string();
        let street = parts.get(1).map(|s| title_case(s)).unwrap_or_default();
        let note = if parts.len() > 2 {
            parts[2..].join(NOTE_SEPARATOR)
        } else {
            String::new()
        };

        Segments {
            request,
            extension: Some(RecordExtension { street, note }),
        }
    }
}

/// Pick the segmenter for a schema.
pub fn segmenter_for(schema: Schema) -> &'static dyn FieldSegmenter {
    match schema {
        Schema::Base => &BaseSegmenter,
        Schema::Extended => &ExtendedSegmenter,
    }
}
