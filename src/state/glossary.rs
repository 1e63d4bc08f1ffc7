// Glossary tab state management.
// Handles the loaded terms, table scrolling, and the search query.

use ratatui::widgets::TableState;

use crate::data::GlossaryRecord;

use super::loading::LoadingState;

/// Rows moved by Page Up / Page Down.
const PAGE_SIZE: usize = 10;

/// Complete state for the Glossary tab.
#[derive(Debug, Default)]
pub struct GlossaryTabState {
    pub data: LoadingState<Vec<GlossaryRecord>>,
    pub table_state: TableState,
    /// Whether the search input line is capturing keys.
    pub search_active: bool,
    pub search_query: String,
}

impl GlossaryTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&mut self, records: Vec<GlossaryRecord>) {
        self.data = LoadingState::Loaded(records);
        self.reset_selection();
    }

    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.table_state.select(None);
    }

    /// Total number of loaded terms.
    pub fn total(&self) -> usize {
        self.data.data().map(Vec::len).unwrap_or(0)
    }

    /// Rows matching the search query, in load order.
    pub fn visible(&self) -> Vec<&GlossaryRecord> {
        let needle = self.search_query.trim().to_lowercase();
        match self.data.data() {
            Some(records) => records.iter().filter(|r| r.matches(&needle)).collect(),
            None => Vec::new(),
        }
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_prev(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        self.move_by(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_by(-(PAGE_SIZE as isize));
    }

    pub fn select_first(&mut self) {
        self.reset_selection();
    }

    pub fn select_last(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    pub fn start_search(&mut self) {
        if self.data.is_loaded() {
            self.search_active = true;
        }
    }

    /// Stop capturing keys but keep the query applied.
    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.reset_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.reset_selection();
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.table_state.select(Some(next as usize));
    }

    fn reset_selection(&mut self) {
        if self.visible().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }
}
