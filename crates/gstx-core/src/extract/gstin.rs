//! GSTIN extraction.
//!
//! GSTINs are matched structurally against the document text flattened
//! to uppercase alphanumerics, so OCR-inserted spaces or punctuation
//! inside a code do not break the match.

use super::patterns::GSTIN;

/// The seller/buyer GSTIN pair recovered from a document.
///
/// Positional convention: the first structural match is the seller, the
/// second the buyer. Invoices print the seller block first often enough
/// for this to hold, but some layouts swap the blocks; the assignment is
/// an ordering convention, not a semantic guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GstinPair {
    pub seller: String,
    pub buyer: String,
}

/// Flatten text to uppercase ASCII alphanumerics.
fn flatten(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// All GSTIN-shaped substrings in the text, in document order.
pub fn extract_gstins(text: &str) -> Vec<String> {
    let flat = flatten(text);
    GSTIN
        .find_iter(&flat)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The first two GSTIN matches as the seller/buyer pair.
///
/// Missing positions stay empty; a document with a single GSTIN yields
/// a seller and an empty buyer.
pub fn extract_gstin_pair(text: &str) -> GstinPair {
    let mut matches = extract_gstins(text).into_iter();
    GstinPair {
        seller: matches.next().unwrap_or_default(),
        buyer: matches.next().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_gstins_assign_seller_then_buyer() {
        let text = "Seller: 27AAAAA0000A1Z5\nBuyer: 07BBBBB1111B2Z6";
        let pair = extract_gstin_pair(text);
        assert_eq!(pair.seller, "27AAAAA0000A1Z5");
        assert_eq!(pair.buyer, "07BBBBB1111B2Z6");
        assert_eq!(pair.seller.len(), 15);
        assert_eq!(pair.buyer.len(), 15);
    }

    #[test]
    fn test_single_gstin_leaves_buyer_empty() {
        let pair = extract_gstin_pair("GSTIN 29ABCDE1234F1Z8 only");
        assert_eq!(pair.seller, "29ABCDE1234F1Z8");
        assert_eq!(pair.buyer, "");
    }

    #[test]
    fn test_ocr_noise_inside_code_is_tolerated() {
        // spaces and punctuation injected by OCR disappear on flattening
        let gstins = extract_gstins("gstin: 27 aaaaa-0000 a1z5");
        assert_eq!(gstins, ["27AAAAA0000A1Z5"]);
    }

    #[test]
    fn test_structural_mismatch_is_rejected() {
        // wrong letter/digit layout, missing Z
        assert!(extract_gstins("27AAAA00000A1X5").is_empty());
        assert!(extract_gstins("no codes at all").is_empty());
    }
}
