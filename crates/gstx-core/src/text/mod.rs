//! Line normalization and multi-source line merging.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MULTI_SPACE: Regex = Regex::new(r" {2,}").unwrap();
}

/// Known OCR misreads of the tax-label tokens.
///
/// All replacements are fixed points: no corrected form contains a
/// misread form, so normalization is idempotent.
const LABEL_FIXES: [(&str, &str); 8] = [
    ("C6ST", "CGST"),
    ("CG5T", "CGST"),
    ("5GST", "SGST"),
    ("SG5T", "SGST"),
    ("1GST", "IGST"),
    ("lGST", "IGST"),
    ("IG5T", "IGST"),
    ("TAXA8LE", "TAXABLE"),
];

/// Clean one raw text line: trim, collapse runs of two-or-more spaces,
/// and correct known OCR misreads of the tax labels.
///
/// Callers drop empty and whitespace-only lines before normalizing.
pub fn normalize_line(line: &str) -> String {
    let mut text = MULTI_SPACE.replace_all(line.trim(), " ").into_owned();

    for (misread, label) in LABEL_FIXES {
        if text.contains(misread) {
            text = text.replace(misread, label);
        }
    }

    text
}

/// An insertion-ordered set of unique normalized lines.
///
/// Text-layer lines are seeded first in their original order; OCR lines
/// are appended only when not already present, so the text layer keeps
/// priority while OCR can still contribute lines it alone recovered.
#[derive(Debug, Default)]
pub struct LineSet {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a normalized line; returns false if it was already present.
    pub fn push(&mut self, line: String) -> bool {
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);
        true
    }

    /// Split raw text into lines, drop blank ones, normalize the rest,
    /// and add them in order.
    pub fn extend_from_text(&mut self, text: &str) {
        for raw in text.lines() {
            if raw.trim().is_empty() {
                continue;
            }
            self.push(normalize_line(raw));
        }
    }

    /// The merged lines in first-seen order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines, for whole-document matching.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims_and_collapses_spaces() {
        assert_eq!(normalize_line("  CGST   9%    1234.50  "), "CGST 9% 1234.50");
    }

    #[test]
    fn test_normalize_fixes_label_misreads() {
        assert_eq!(normalize_line("C6ST 100.00"), "CGST 100.00");
        assert_eq!(normalize_line("5GST 100.00"), "SGST 100.00");
        assert_eq!(normalize_line("1GST @ 18%"), "IGST @ 18%");
        assert_eq!(normalize_line("TAXA8LE VALUE"), "TAXABLE VALUE");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let lines = [
            "CGST 9%  1234.50",
            "  5GST 1,000.00 ",
            "Invoice No: INV-2024/001",
            "TAXA8LE   VALUE  10,000",
        ];
        for line in lines {
            let once = normalize_line(line);
            assert_eq!(normalize_line(&once), once);
        }
    }

    #[test]
    fn test_line_set_deduplicates_and_preserves_order() {
        let mut set = LineSet::new();
        set.extend_from_text("alpha\nbeta\n\n  \ngamma");
        set.extend_from_text("beta\ndelta\nalpha");

        assert_eq!(set.lines(), ["alpha", "beta", "gamma", "delta"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_line_set_dedupes_after_normalization() {
        let mut set = LineSet::new();
        set.extend_from_text("CGST  1234.50");
        set.extend_from_text("  CGST 1234.50  ");

        assert_eq!(set.lines(), ["CGST 1234.50"]);
    }

    #[test]
    fn test_push_reports_duplicates() {
        let mut set = LineSet::new();
        assert!(set.push("one".to_string()));
        assert!(!set.push("one".to_string()));
    }
}
