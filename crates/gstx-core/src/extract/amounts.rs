//! Numeric normalization and tax amount extraction.

use tracing::trace;

use super::patterns::NUMBER_TOKEN;

/// Parse a noisy numeric token into a float.
///
/// Currency markers, thousands separators, and any other stray
/// characters are discarded; the OCR O-for-0 confusion is corrected.
/// Total over all inputs: unparsable or non-finite residues become 0.0.
pub fn parse_noisy_number(token: &str) -> f64 {
    let token = strip_currency_prefix(token);
    let mut cleaned = String::with_capacity(token.len());

    for c in token.chars() {
        match c {
            'O' | 'o' => cleaned.push('0'),
            '0'..='9' | '.' | '+' | '-' | 'e' | 'E' => cleaned.push(c),
            _ => {}
        }
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Strip a leading currency marker so the dot in "Rs." is not taken
/// for a decimal point by the character sweep.
fn strip_currency_prefix(token: &str) -> &str {
    let token = token.trim_start_matches(|c: char| c == '₹' || c == '$' || c.is_whitespace());
    for marker in ["Rs.", "RS.", "rs.", "Rs", "RS", "rs", "INR", "inr"] {
        if let Some(rest) = token.strip_prefix(marker) {
            return rest;
        }
    }
    token
}

/// All numeric values found on a line.
///
/// Tokens made purely of O-confusions (a stray "o" inside a word) carry
/// no real digit and are ignored.
pub fn extract_numbers(line: &str) -> Vec<f64> {
    NUMBER_TOKEN
        .find_iter(line)
        .filter(|m| m.as_str().bytes().any(|b| b.is_ascii_digit()))
        .map(|m| parse_noisy_number(m.as_str()))
        .collect()
}

/// Tax amounts accumulated over a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxAmounts {
    pub taxable_value: f64,
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
}

impl TaxAmounts {
    /// Taxable value plus every tax component; absent components are 0.
    pub fn total(&self) -> f64 {
        self.taxable_value + self.igst + self.cgst + self.sgst
    }
}

/// Scan normalized lines for labeled tax amounts.
///
/// A label often appears twice: once in a column header next to a
/// placeholder and once next to the real figure. Taking the maximum
/// over every line carrying the label keeps the real figure. The four
/// categories accumulate independently.
pub fn scan_tax_amounts<'a, I>(lines: I) -> TaxAmounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut amounts = TaxAmounts::default();

    for line in lines {
        let upper = line.to_uppercase();

        if upper.contains("TAXABLE") {
            amounts.taxable_value = amounts.taxable_value.max(line_max(line));
        }
        if upper.contains("IGST") {
            amounts.igst = amounts.igst.max(line_max(line));
        }
        if upper.contains("CGST") {
            amounts.cgst = amounts.cgst.max(line_max(line));
        }
        if upper.contains("SGST") {
            amounts.sgst = amounts.sgst.max(line_max(line));
        }
    }

    trace!(
        "tax scan: taxable={} igst={} cgst={} sgst={}",
        amounts.taxable_value,
        amounts.igst,
        amounts.cgst,
        amounts.sgst
    );
    amounts
}

fn line_max(line: &str) -> f64 {
    extract_numbers(line).into_iter().fold(0.0, f64::max)
}
