//! Rule-based field extractors for customer listing lines.

pub mod capacity;
pub mod patterns;
pub mod phone;
pub mod segment;
pub mod text;

pub use capacity::{CapacityExtractor, extract_capacity, sort_key};
pub use phone::{PhoneExtractor, locate_phone};
pub use segment::{BaseSegmenter, ExtendedSegmenter, FieldSegmenter, Segments, segmenter_for};
pub use text::{compact_phone, display_name, is_company, title_case};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A located field: the normalized value plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span of the match in the searched text.
    pub position: (usize, usize),
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            position: (0, 0),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = (start, end);
        self
    }

    /// Text before the match.
    pub fn before<'t>(&self, text: &'t str) -> &'t str {
        &text[..self.position.0]
    }

    /// Text after the match.
    pub fn after<'t>(&self, text: &'t str) -> &'t str {
        &text[self.position.1..]
    }
}
