// App state and main event loop.
// Manages tabs, loads the data files, and dispatches keyboard input.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::config::Config;
use crate::data::{self, QuestionBank};
use crate::state::{GlossaryTabState, NavAction, StatusLog, StatusMessage, VivaTabState};
use crate::ui::{self, Logo};

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Viva,
    Glossary,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Viva, Tab::Glossary];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Viva => "Viva Q&A",
            Tab::Glossary => "Glossary",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Viva => Tab::Glossary,
            Tab::Glossary => Tab::Viva,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs: cycling either way lands on the other one.
        self.next()
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    pub viva: VivaTabState,
    pub glossary: GlossaryTabState,
    /// Header logo, decoded once at start-up.
    pub logo: Logo,
    pub status: StatusLog,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            viva: VivaTabState::new(),
            glossary: GlossaryTabState::new(),
            logo: Logo::Text,
            status: StatusLog::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Build the app and load every input named by `config`.
    /// A failed load only affects its own tab.
    pub fn load(config: &Config) -> Self {
        let mut app = Self::new();
        app.logo = Logo::load(&config.logo_path);

        match data::load_questions(&config.viva_path, config.schema) {
            Ok(bank) => app.attach_questions(bank, &config.viva_path.display().to_string()),
            Err(e) => {
                app.status.push(StatusMessage::error(format!(
                    "Could not load {}: {}",
                    config.viva_path.display(),
                    e
                )));
                app.viva.set_error(e.to_string());
            }
        }

        match data::load_glossary(&config.glossary_path) {
            Ok(records) => {
                app.status.push(StatusMessage::info(format!(
                    "Loaded {} terms from {}",
                    records.len(),
                    config.glossary_path.display()
                )));
                app.glossary.set_loaded(records);
            }
            Err(e) => {
                app.status.push(StatusMessage::error(format!(
                    "Could not load {}: {}",
                    config.glossary_path.display(),
                    e
                )));
                app.glossary.set_error(e.to_string());
            }
        }

        app
    }

    fn attach_questions(&mut self, bank: QuestionBank, source: &str) {
        self.status.push(StatusMessage::info(format!(
            "Loaded {} questions in {} sections from {}",
            bank.len(),
            bank.sections.len(),
            source
        )));
        self.viva.set_loaded(bank);
    }

    /// Main event loop. Every handled event is followed by a full redraw.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll for one terminal event.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Dispatch a key press to the overlay, popup, or tab that owns it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.active_tab == Tab::Glossary && self.glossary.search_active {
            self.handle_search_key(key);
            return;
        }

        if self.active_tab == Tab::Viva && self.viva.picker.open {
            self.handle_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            _ => match self.active_tab {
                Tab::Viva => self.handle_viva_key(key),
                Tab::Glossary => self.handle_glossary_key(key),
            },
        }
    }

    fn handle_viva_key(&mut self, key: KeyEvent) {
        let action = match key.code {
            KeyCode::Home | KeyCode::Char('g') => Some(NavAction::First),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(NavAction::Previous),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(NavAction::Next),
            KeyCode::End | KeyCode::Char('G') => Some(NavAction::Last),
            KeyCode::Char('r') => Some(NavAction::Random),
            KeyCode::Char('f') => {
                self.viva.open_picker();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            if self.viva.can_navigate() {
                self.viva.navigate(action, &mut rand::rng());
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => self.viva.close_picker(),
            KeyCode::Up | KeyCode::Char('k') => self.viva.picker_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.viva.picker_next(),
            KeyCode::Char(' ') | KeyCode::Enter => self.viva.toggle_highlighted(),
            KeyCode::Char('a') => self.viva.select_all_sections(),
            KeyCode::Char('c') => self.viva.clear_sections(),
            _ => {}
        }
    }

    fn handle_glossary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.glossary.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.glossary.select_prev(),
            KeyCode::PageDown => self.glossary.page_down(),
            KeyCode::PageUp => self.glossary.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.glossary.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.glossary.select_last(),
            KeyCode::Char('/') => self.glossary.start_search(),
            KeyCode::Esc => self.glossary.clear_search(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.glossary.clear_search(),
            KeyCode::Enter => self.glossary.finish_search(),
            KeyCode::Backspace => self.glossary.pop_search_char(),
            KeyCode::Down => self.glossary.select_next(),
            KeyCode::Up => self.glossary.select_prev(),
            KeyCode::Char(c) => self.glossary.push_search_char(c),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::QuestionView;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn config(dir: &TempDir) -> Config {
        Config {
            viva_path: dir.path().join("viva.csv"),
            glossary_path: dir.path().join("glossary.csv"),
            logo_path: PathBuf::from("does/not/exist.png"),
            ..Config::default()
        }
    }

    fn write_fixtures(dir: &TempDir) {
        std::fs::write(
            dir.path().join("viva.csv"),
            "Section,Question Number,Question,Answer\n\
             SectionA,1,Q1,A1\n\
             SectionA,2,Q2,A2\n\
             SectionB,1,Q3,A3\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("glossary.csv"),
            "Term,Definition\nOntology,Being\nEpistemology,Knowing\n",
        )
        .unwrap();
    }

    fn current_question(app: &App) -> Option<String> {
        match app.viva.view() {
            QuestionView::Active { record, .. } => Some(record.question_text.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_load_and_navigate() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);
        let mut app = App::load(&config(&dir));

        assert_eq!(current_question(&app).as_deref(), Some("Q1"));
        press(&mut app, KeyCode::Right);
        assert_eq!(current_question(&app).as_deref(), Some("Q2"));
        press(&mut app, KeyCode::End);
        assert_eq!(current_question(&app).as_deref(), Some("Q3"));
        press(&mut app, KeyCode::Right);
        assert_eq!(current_question(&app).as_deref(), Some("Q3"));
        press(&mut app, KeyCode::Home);
        assert_eq!(current_question(&app).as_deref(), Some("Q1"));
        press(&mut app, KeyCode::Left);
        assert_eq!(current_question(&app).as_deref(), Some("Q1"));
        assert_eq!(app.glossary.total(), 2);
    }

    #[test]
    fn test_failed_load_affects_only_its_tab() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);
        std::fs::write(dir.path().join("viva.csv"), b"Question,Answer\nQ\x81,A\n").unwrap();

        let app = App::load(&config(&dir));
        assert!(matches!(app.viva.view(), QuestionView::Failed(_)));
        assert!(app.glossary.data.is_loaded());
        assert!(app.status.latest().is_some());
    }

    #[test]
    fn test_picker_keys_change_selection() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);
        let mut app = App::load(&config(&dir));

        press(&mut app, KeyCode::Char('f'));
        assert!(app.viva.picker.open);
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.viva.can_navigate());
        // Navigation keys are ignored while the picker is open.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.viva.picker.open);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('r'));
        assert!(current_question(&app).is_none());

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.viva.session.selected_sections(), &["SectionB"]);
        assert_eq!(current_question(&app).as_deref(), Some("Q3"));
    }

    #[test]
    fn test_glossary_search_captures_keys() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);
        let mut app = App::load(&config(&dir));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Glossary);
        press(&mut app, KeyCode::Char('/'));
        for c in "know".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.glossary.search_query, "knowq");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.glossary.visible().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.glossary.visible().len(), 2);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_tab_cycles() {
        assert_eq!(Tab::Viva.next(), Tab::Glossary);
        assert_eq!(Tab::Glossary.next(), Tab::Viva);
        assert_eq!(Tab::Viva.prev(), Tab::Glossary);
    }
}
