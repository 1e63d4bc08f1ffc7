// Session navigation state for the Q&A tab.
// Plain value passed into and returned from each interaction handler.

use rand::Rng;

use crate::data::QuestionRecord;

use super::cursor::{NavAction, NavigationCursor};
use super::filter::filter_and_order;

/// Cursor position and ordered section selection for one running session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionNavigationState {
    cursor: NavigationCursor,
    selected_sections: Vec<String>,
}

impl SessionNavigationState {
    /// Default state for a freshly loaded bank: every section, first question.
    pub fn for_sections(sections: &[String]) -> Self {
        Self {
            cursor: NavigationCursor::default(),
            selected_sections: sections.to_vec(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn selected_sections(&self) -> &[String] {
        &self.selected_sections
    }

    pub fn is_selected(&self, section: &str) -> bool {
        self.selected_sections.iter().any(|s| s == section)
    }

    /// 1-based position of `section` in the selection order.
    pub fn selection_rank(&self, section: &str) -> Option<usize> {
        self.selected_sections
            .iter()
            .position(|s| s == section)
            .map(|i| i + 1)
    }

    /// Rows visible under the current selection, in display order.
    pub fn filtered<'a>(&self, rows: &'a [QuestionRecord]) -> Vec<&'a QuestionRecord> {
        filter_and_order(rows, &self.selected_sections)
    }

    /// Index of the record to display among `len` filtered rows.
    pub fn position(&self, len: usize) -> Option<usize> {
        self.cursor.position(len)
    }

    /// Apply a navigation action over `len` filtered rows.
    pub fn apply<R: Rng>(mut self, action: NavAction, len: usize, rng: &mut R) -> Self {
        let before = self.cursor.index();
        self.cursor.apply(action, len, rng);
        tracing::debug!(
            ?action,
            len,
            from = before,
            to = self.cursor.index(),
            "navigate"
        );
        self
    }

    /// Replace the selection and clamp the cursor to the new row count.
    pub fn with_selection(mut self, sections: Vec<String>, rows: &[QuestionRecord]) -> Self {
        self.selected_sections = sections;
        let len = self.filtered(rows).len();
        self.cursor.clamp(len);
        tracing::debug!(
            sections = ?self.selected_sections,
            len,
            index = self.cursor.index(),
            "selection changed"
        );
        self
    }

    /// Select `section` at the end of the order, or deselect it if selected.
    pub fn toggle_section(self, section: &str, rows: &[QuestionRecord]) -> Self {
        let mut sections = self.selected_sections.clone();
        if let Some(i) = sections.iter().position(|s| s == section) {
            sections.remove(i);
        } else {
            sections.push(section.to_string());
        }
        self.with_selection(sections, rows)
    }

    pub fn select_all(self, all: &[String], rows: &[QuestionRecord]) -> Self {
        self.with_selection(all.to_vec(), rows)
    }

    pub fn clear_selection(self, rows: &[QuestionRecord]) -> Self {
        self.with_selection(Vec::new(), rows)
    }
}
