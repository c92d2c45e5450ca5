//! The extraction output record.

use serde::{Deserialize, Serialize};

/// Structured fields recovered from one invoice document.
///
/// Every field is always present: textual fields default to `""` and
/// amounts to `0.0` when their pattern was not found, so serializing a
/// record yields the same flat key set for every document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number. May be a loose best-effort match when no label
    /// was found in the text.
    #[serde(rename = "Invoice_Number")]
    pub invoice_number: String,

    /// Seller GSTIN (first structural match in the document).
    #[serde(rename = "Seller_GST")]
    pub seller_gst: String,

    /// Buyer GSTIN (second structural match in the document).
    #[serde(rename = "Buyer_GST")]
    pub buyer_gst: String,

    /// Seller state name derived from the GSTIN prefix.
    #[serde(rename = "Seller_State")]
    pub seller_state: String,

    /// Two-digit seller state code.
    #[serde(rename = "Seller_State_Code")]
    pub seller_state_code: String,

    /// Buyer state name derived from the GSTIN prefix.
    #[serde(rename = "Buyer_State")]
    pub buyer_state: String,

    /// Two-digit buyer state code.
    #[serde(rename = "Buyer_State_Code")]
    pub buyer_state_code: String,

    /// Taxable value before taxes.
    #[serde(rename = "Taxable_Value")]
    pub taxable_value: f64,

    /// Integrated GST amount.
    #[serde(rename = "IGST")]
    pub igst: f64,

    /// Central GST amount.
    #[serde(rename = "CGST")]
    pub cgst: f64,

    /// State GST amount.
    #[serde(rename = "SGST")]
    pub sgst: f64,

    /// Taxable value plus all recovered tax components.
    #[serde(rename = "Total_Amount")]
    pub total_amount: f64,

    /// Opaque source label the caller supplied with the document.
    #[serde(rename = "FileName")]
    pub file_name: String,
}

impl InvoiceRecord {
    /// Create an empty record tagged with its source label.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Recompute the total from the taxable value and tax components.
    pub fn compute_total(&mut self) {
        self.total_amount = self.taxable_value + self.igst + self.cgst + self.sgst;
    }

    /// The record as a flat field-name → value map.
    pub fn field_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_empty_and_zero() {
        let record = InvoiceRecord::new("invoice.pdf");
        assert_eq!(record.invoice_number, "");
        assert_eq!(record.seller_gst, "");
        assert_eq!(record.taxable_value, 0.0);
        assert_eq!(record.total_amount, 0.0);
        assert_eq!(record.file_name, "invoice.pdf");
    }

    #[test]
    fn test_compute_total_sums_all_components() {
        let mut record = InvoiceRecord::new("invoice.pdf");
        record.taxable_value = 1000.0;
        record.cgst = 90.0;
        record.sgst = 90.0;
        record.compute_total();
        assert_eq!(record.total_amount, 1180.0);
    }

    #[test]
    fn test_field_map_never_omits_a_key() {
        let map = InvoiceRecord::default().field_map();
        for key in [
            "Invoice_Number",
            "Seller_GST",
            "Buyer_GST",
            "Seller_State",
            "Seller_State_Code",
            "Buyer_State",
            "Buyer_State_Code",
            "Taxable_Value",
            "IGST",
            "CGST",
            "SGST",
            "Total_Amount",
            "FileName",
        ] {
            assert!(map.contains_key(key), "missing field {}", key);
        }
        assert_eq!(map.len(), 13);
    }
}
