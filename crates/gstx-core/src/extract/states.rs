//! GST state-code table and state derivation from GSTIN prefixes.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// GST state codes, one entry per Indian state/union territory.
    ///
    /// Read-only after initialization; safe for unsynchronized
    /// concurrent lookups.
    pub static ref STATE_CODES: HashMap<&'static str, &'static str> = [
        ("01", "Jammu & Kashmir"),
        ("02", "Himachal Pradesh"),
        ("03", "Punjab"),
        ("04", "Chandigarh"),
        ("05", "Uttarakhand"),
        ("06", "Haryana"),
        ("07", "Delhi"),
        ("08", "Rajasthan"),
        ("09", "Uttar Pradesh"),
        ("10", "Bihar"),
        ("11", "Sikkim"),
        ("12", "Arunachal Pradesh"),
        ("13", "Nagaland"),
        ("14", "Manipur"),
        ("15", "Mizoram"),
        ("16", "Tripura"),
        ("17", "Meghalaya"),
        ("18", "Assam"),
        ("19", "West Bengal"),
        ("20", "Jharkhand"),
        ("21", "Odisha"),
        ("22", "Chhattisgarh"),
        ("23", "Madhya Pradesh"),
        ("24", "Gujarat"),
        ("25", "Daman & Diu"),
        ("26", "Dadra & Nagar Haveli"),
        ("27", "Maharashtra"),
        ("28", "Andhra Pradesh (Old)"),
        ("29", "Karnataka"),
        ("30", "Goa"),
        ("31", "Lakshadweep"),
        ("32", "Kerala"),
        ("33", "Tamil Nadu"),
        ("34", "Puducherry"),
        ("35", "Andaman & Nicobar Islands"),
        ("36", "Telangana"),
        ("37", "Andhra Pradesh"),
    ]
    .into_iter()
    .collect();
}

/// Look up a two-digit state code; unknown codes map to `""`.
pub fn state_name(code: &str) -> &'static str {
    STATE_CODES.get(code).copied().unwrap_or("")
}

/// The two-digit state-code prefix of a GSTIN, if both characters are
/// digits.
pub fn state_code_of(gstin: &str) -> Option<&str> {
    // get() rejects short input and byte index 2 landing inside a
    // multi-byte character
    let prefix = gstin.get(..2)?;
    prefix
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some(prefix)
}

/// Derive `(state name, state code)` from a GSTIN.
///
/// Absent or non-numeric prefixes yield two empty strings; a valid
/// code missing from the table yields the code with an empty name.
pub fn derive_state(gstin: &str) -> (String, String) {
    match state_code_of(gstin) {
        Some(code) => (state_name(code).to_string(), code.to_string()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_has_one_entry_per_territory() {
        assert_eq!(STATE_CODES.len(), 37);
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(state_name("27"), "Maharashtra");
        assert_eq!(state_name("07"), "Delhi");
        assert_eq!(state_name("29"), "Karnataka");
    }

    #[test]
    fn test_unknown_code_maps_to_empty_name() {
        assert_eq!(state_name("99"), "");
        assert_eq!(state_name("00"), "");
    }

    #[test]
    fn test_derive_state_from_gstin() {
        let (name, code) = derive_state("27AAAAA0000A1Z5");
        assert_eq!(name, "Maharashtra");
        assert_eq!(code, "27");
    }

    #[test]
    fn test_derive_state_tolerates_bad_input() {
        assert_eq!(derive_state(""), (String::new(), String::new()));
        assert_eq!(derive_state("7"), (String::new(), String::new()));
        assert_eq!(derive_state("AB12345"), (String::new(), String::new()));
        // multi-byte characters around the prefix boundary must not panic
        assert_eq!(derive_state("€"), (String::new(), String::new()));
        assert_eq!(derive_state("₹₹27"), (String::new(), String::new()));

        // valid digits but unknown code: code kept, name empty
        let (name, code) = derive_state("99XXXXX0000X1Z9");
        assert_eq!(name, "");
        assert_eq!(code, "99");
    }
}
