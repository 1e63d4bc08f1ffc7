// Viva Q&A tab state management.
// Holds the question bank, the session navigation state, and the section picker.

use rand::Rng;
use ratatui::widgets::ListState;

use crate::data::{QuestionBank, QuestionRecord};

use super::cursor::NavAction;
use super::loading::LoadingState;
use super::session::SessionNavigationState;

/// Counts shown in the Q&A status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStats {
    pub shown: usize,
    pub total: usize,
    pub selected_sections: usize,
    pub total_sections: usize,
}

/// Everything the Q&A renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionView<'a> {
    /// Nothing loaded yet.
    Idle,
    /// The question file could not be loaded.
    Failed(&'a str),
    /// The selection filters out every question.
    Empty(SelectionStats),
    /// One record on screen.
    Active {
        record: &'a QuestionRecord,
        /// 0-based position in the filtered sequence.
        position: usize,
        stats: SelectionStats,
    },
}

/// Section picker popup state.
#[derive(Debug, Clone, Default)]
pub struct SectionPicker {
    pub open: bool,
    pub list_state: ListState,
}

/// Complete state for the Viva Q&A tab.
#[derive(Debug, Default)]
pub struct VivaTabState {
    pub data: LoadingState<QuestionBank>,
    pub session: SessionNavigationState,
    pub picker: SectionPicker,
}

impl VivaTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a freshly loaded bank and reset the session to its defaults.
    pub fn set_loaded(&mut self, bank: QuestionBank) {
        self.session = SessionNavigationState::for_sections(&bank.sections);
        self.picker = SectionPicker::default();
        self.data = LoadingState::Loaded(bank);
    }

    pub fn set_error(&mut self, error: String) {
        self.session = SessionNavigationState::default();
        self.picker = SectionPicker::default();
        self.data = LoadingState::Error(error);
    }

    /// Number of rows under the current selection.
    pub fn filtered_len(&self) -> usize {
        self.data
            .data()
            .map(|bank| self.session.filtered(&bank.records).len())
            .unwrap_or(0)
    }

    /// Whether navigation controls are enabled.
    pub fn can_navigate(&self) -> bool {
        self.filtered_len() > 0
    }

    pub fn navigate<R: Rng>(&mut self, action: NavAction, rng: &mut R) {
        let len = self.filtered_len();
        self.session = std::mem::take(&mut self.session).apply(action, len, rng);
    }

    /// Build the render model for the current frame.
    pub fn view(&self) -> QuestionView<'_> {
        let bank = match &self.data {
            LoadingState::Idle => return QuestionView::Idle,
            LoadingState::Error(e) => return QuestionView::Failed(e),
            LoadingState::Loaded(bank) => bank,
        };

        let filtered = self.session.filtered(&bank.records);
        let stats = SelectionStats {
            shown: filtered.len(),
            total: bank.len(),
            selected_sections: self.session.selected_sections().len(),
            total_sections: bank.sections.len(),
        };

        match self.session.position(filtered.len()) {
            Some(position) => QuestionView::Active {
                record: filtered[position],
                position,
                stats,
            },
            None => QuestionView::Empty(stats),
        }
    }

    pub fn open_picker(&mut self) {
        if self.data.is_loaded() {
            self.picker.open = true;
            if self.picker.list_state.selected().is_none() {
                self.picker.list_state.select(Some(0));
            }
        }
    }

    pub fn close_picker(&mut self) {
        self.picker.open = false;
    }

    pub fn picker_next(&mut self) {
        let count = self.section_count();
        if count == 0 {
            return;
        }
        let i = match self.picker.list_state.selected() {
            Some(i) if i >= count - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.picker.list_state.select(Some(i));
    }

    pub fn picker_prev(&mut self) {
        if self.section_count() == 0 {
            return;
        }
        let i = match self.picker.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.picker.list_state.select(Some(i));
    }

    /// Toggle the highlighted section in the picker.
    pub fn toggle_highlighted(&mut self) {
        let Some(bank) = self.data.data() else {
            return;
        };
        let Some(section) = self
            .picker
            .list_state
            .selected()
            .and_then(|i| bank.sections.get(i))
        else {
            return;
        };
        self.session = std::mem::take(&mut self.session).toggle_section(section, &bank.records);
    }

    pub fn select_all_sections(&mut self) {
        if let Some(bank) = self.data.data() {
            self.session =
                std::mem::take(&mut self.session).select_all(&bank.sections, &bank.records);
        }
    }

    pub fn clear_sections(&mut self) {
        if let Some(bank) = self.data.data() {
            self.session = std::mem::take(&mut self.session).clear_selection(&bank.records);
        }
    }

    fn section_count(&self) -> usize {
        self.data.data().map(|bank| bank.sections.len()).unwrap_or(0)
    }
}
