// Record types for question and glossary data.
// Rows are immutable once the loader has built them.

use std::cmp::Ordering;
use std::fmt;

/// Section key for rows loaded from a file without a section column.
pub const IMPLICIT_SECTION: &str = "General";

/// Question identifier as written in the data file.
///
/// Numeric cells keep their text so "007" and "2.10" display as written.
#[derive(Debug, Clone)]
pub enum QuestionNumber {
    Numeric { value: f64, text: String },
    Text(String),
}

impl QuestionNumber {
    /// Parse a cell, preferring a numeric reading. Decimals such as "2.1"
    /// are numeric; "inf" and "NaN" stay text.
    pub fn parse(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(QuestionNumber::Numeric {
                value,
                text: cell.to_string(),
            }),
            _ => Some(QuestionNumber::Text(cell.to_string())),
        }
    }

    /// The cell text as loaded.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionNumber::Numeric { text, .. } => text,
            QuestionNumber::Text(text) => text,
        }
    }
}

impl Ord for QuestionNumber {
    /// Numbers compare numerically and sort before any text identifier.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (QuestionNumber::Numeric { value: a, .. }, QuestionNumber::Numeric { value: b, .. }) => {
                a.total_cmp(b)
            }
            (QuestionNumber::Numeric { .. }, QuestionNumber::Text(_)) => Ordering::Less,
            (QuestionNumber::Text(_), QuestionNumber::Numeric { .. }) => Ordering::Greater,
            (QuestionNumber::Text(a), QuestionNumber::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for QuestionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the sort key, so "2" and "2.0" are the same question number.
impl PartialEq for QuestionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QuestionNumber {}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single viva question with its model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Section label, absent when the file has no section column.
    /// A blank cell in a section column is `Some("")`, its own section.
    pub section: Option<String>,
    pub question_number: Option<QuestionNumber>,
    pub question_text: String,
    pub answer_text: String,
}

impl QuestionRecord {
    /// Key used for section filtering.
    pub fn section_key(&self) -> &str {
        self.section.as_deref().unwrap_or(IMPLICIT_SECTION)
    }
}

/// All loaded questions plus their distinct sections.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pub records: Vec<QuestionRecord>,
    /// Distinct section keys in first-appearance order.
    pub sections: Vec<String>,
}

impl QuestionBank {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        let sections = crate::state::distinct_sections(&records);
        Self { records, sections }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryRecord {
    pub term: String,
    pub definition: String,
}

impl GlossaryRecord {
    /// Case-insensitive match against term or definition.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.term.to_lowercase().contains(needle)
            || self.definition.to_lowercase().contains(needle)
    }
}
