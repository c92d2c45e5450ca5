//! Invoice number extraction.

use super::patterns::{INVOICE_NUMBER, INVOICE_NUMBER_LOOSE};
use super::{ExtractionMatch, FieldExtractor};

/// Invoice number field extractor.
pub struct InvoiceNumberExtractor {
    allow_loose: bool,
}

impl InvoiceNumberExtractor {
    /// Create a new extractor with the loose fallback enabled.
    pub fn new() -> Self {
        Self { allow_loose: true }
    }

    /// Set whether to fall back to the first loose token when no
    /// labeled match exists.
    pub fn with_loose_fallback(mut self, allow_loose: bool) -> Self {
        self.allow_loose = allow_loose;
        self
    }
}

impl Default for InvoiceNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labeled matches first, in document order
        for caps in INVOICE_NUMBER.captures_iter(text) {
            let full_match = caps.get(0).unwrap();
            results.push(ExtractionMatch::new(
                caps[1].to_string(),
                0.95,
                full_match.as_str(),
            ));
        }

        // Loose fallback: first plausible token anywhere. Low precision,
        // so the result is a hint rather than a verified field.
        if results.is_empty() && self.allow_loose {
            if let Some(m) = INVOICE_NUMBER_LOOSE.find(text) {
                results.push(ExtractionMatch::new(m.as_str().to_string(), 0.3, m.as_str()));
            }
        }

        results
    }
}

/// Extract the invoice number from text.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    InvoiceNumberExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_invoice_number() {
        assert_eq!(
            extract_invoice_number("Invoice No: INV-2024/001"),
            Some("INV-2024/001".to_string())
        );
        assert_eq!(
            extract_invoice_number("Invoice Number GST/22-23/112"),
            Some("GST/22-23/112".to_string())
        );
        assert_eq!(
            extract_invoice_number("INVOICE NO. : 42"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_first_labeled_match_wins() {
        let text = "Invoice No: A-1\nreference to Invoice No: B-2";
        assert_eq!(extract_invoice_number(text), Some("A-1".to_string()));
    }

    #[test]
    fn test_loose_fallback_is_low_confidence() {
        let extractor = InvoiceNumberExtractor::new();
        let matches = extractor.extract_all("Bill ref 2024/001 enclosed");
        assert_eq!(matches[0].value, "Bill");
        assert!(matches[0].confidence < 0.5);
    }

    #[test]
    fn test_loose_fallback_can_be_disabled() {
        let extractor = InvoiceNumberExtractor::new().with_loose_fallback(false);
        assert!(extractor.extract("no label here").is_none());
    }
}
