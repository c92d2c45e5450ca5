//! Common regex patterns for GST invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled invoice number: "Invoice No" / "Invoice Number", then a
    // token of alphanumerics, hyphens, and slashes.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)invoice\s*n(?:o|umber)\.?\s*[:#]?\s*([A-Za-z0-9/\-]+)"
    ).unwrap();

    // Loose fallback: any token of at least three such characters.
    pub static ref INVOICE_NUMBER_LOOSE: Regex = Regex::new(
        r"[A-Za-z0-9][A-Za-z0-9/\-]{2,}"
    ).unwrap();

    // GSTIN structural pattern: 2-digit state code, 5 letters + 4 digits
    // + 1 letter (PAN), entity code, literal Z, checksum character.
    // Matched against text flattened to uppercase alphanumerics.
    pub static ref GSTIN: Regex = Regex::new(
        r"\d{2}[A-Z]{5}\d{4}[A-Z][A-Z\d]Z[A-Z\d]"
    ).unwrap();

    // A numeric-looking token, tolerating the O-for-0 OCR confusion and
    // thousands separators.
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9Oo][0-9Oo,]*(?:\.[0-9Oo]+)?"
    ).unwrap();
}
