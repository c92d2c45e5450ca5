//! Rule-based field extractors for GST invoices.

pub mod amounts;
pub mod gstin;
pub mod invoice_number;
pub mod patterns;
pub mod states;

pub use amounts::{extract_numbers, parse_noisy_number, scan_tax_amounts, TaxAmounts};
pub use gstin::{extract_gstin_pair, extract_gstins, GstinPair};
pub use invoice_number::{extract_invoice_number, InvoiceNumberExtractor};
pub use states::{derive_state, state_name};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value with a confidence score.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            source: source.into(),
        }
    }
}
