// UI module for rendering the TUI.
// Contains the tab bar, header, Q&A and glossary views, and overlays.

mod common;
mod glossary;
mod header;
mod modal;
mod tabs;
mod viva;

pub use header::Logo;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::StatusLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    header::draw_header(frame, &app.logo, chunks[1]);

    match app.active_tab {
        Tab::Viva => viva::draw_viva_tab(frame, &mut app.viva, chunks[2]),
        Tab::Glossary => glossary::draw_glossary_tab(frame, &mut app.glossary, chunks[2]),
    }

    draw_status_bar(frame, app, chunks[3]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints and the latest status message.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::raw(key),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut hints: Vec<Span> = match app.active_tab {
        Tab::Viva if app.viva.picker.open => [
            hint(" ↑↓ ", "Move"),
            hint("  Space ", "Toggle"),
            hint("  Esc ", "Close"),
        ]
        .concat(),
        Tab::Viva => [
            hint(" ←→ ", "Prev/Next"),
            hint("  g/G ", "First/Last"),
            hint("  r ", "Random"),
            hint("  f ", "Sections"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
        .concat(),
        Tab::Glossary if app.glossary.search_active => [
            hint(" type ", "Search"),
            hint("  ↵ ", "Done"),
            hint("  Esc ", "Clear"),
        ]
        .concat(),
        Tab::Glossary => [
            hint(" ↑↓ ", "Scroll"),
            hint("  PgUp/Dn ", "Page"),
            hint("  / ", "Search"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
        .concat(),
    };

    if let Some(msg) = app.status.latest() {
        let color = match msg.level {
            StatusLevel::Error => Color::Red,
            StatusLevel::Warn => Color::Yellow,
            StatusLevel::Info => Color::DarkGray,
        };
        hints.push(Span::styled(
            format!("  │ {} ({})", msg.message, common::format_relative_time(&msg.timestamp)),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 56.min(area.width);
    let popup_height = 22.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Color::Cyan)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  Home/g        ", "First question"),
        key("  ←/h/p         ", "Previous question"),
        key("  →/l/n         ", "Next question"),
        key("  End/G         ", "Last question"),
        key("  r             ", "Random question"),
        key("  f             ", "Filter and order sections"),
        key("  ↑/↓ j/k       ", "Scroll glossary"),
        key("  PgUp/PgDn     ", "Page glossary"),
        key("  /             ", "Search glossary"),
        key("  Tab           ", "Switch tabs"),
        key("  ?             ", "Show/hide this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled(header::BRAND, Style::default().fg(Color::Gray)),
            Span::styled(
                format!("  {}", header::BRAND_URL),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SchemaPolicy, read_glossary, read_questions};
    use crate::state::NavAction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    const VIVA: &str = "Section,Question Number,Question,Answer\n\
        SectionA,1,What is your contribution?,A new method.\n\
        SectionA,2,Why this design?,It isolates the effect.\n\
        SectionB,1,What would you change?,A larger sample.\n";

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with_questions() -> App {
        let mut app = App::new();
        app.viva
            .set_loaded(read_questions(VIVA.as_bytes(), SchemaPolicy::Declared).unwrap());
        app
    }

    #[test]
    fn test_active_question_view() {
        let mut app = app_with_questions();
        let screen = render(&mut app);

        assert!(screen.contains("PhD Viva Q&A"));
        assert!(screen.contains("thinkingML"));
        assert!(screen.contains("Showing 3 of 3 questions (2/2)"));
        assert!(screen.contains("Question 1 of 3"));
        assert!(screen.contains("SectionA  Q1"));
        assert!(screen.contains("What is your contribution?"));
        assert!(screen.contains("Answer:"));
        assert!(screen.contains("A new method."));
    }

    #[test]
    fn test_progress_follows_cursor() {
        let mut app = app_with_questions();
        app.viva.navigate(NavAction::Last, &mut StdRng::seed_from_u64(0));
        let screen = render(&mut app);
        assert!(screen.contains("Question 3 of 3"));
        assert!(screen.contains("SectionB  Q1"));
    }

    #[test]
    fn test_missing_section_and_number_fall_back_to_position() {
        let mut app = App::new();
        app.viva.set_loaded(
            read_questions(b"Question,Answer\nFirst?,Yes\nSecond?,No\n", SchemaPolicy::Declared)
                .unwrap(),
        );
        app.viva.navigate(NavAction::Next, &mut StdRng::seed_from_u64(0));
        let screen = render(&mut app);
        assert!(screen.contains("2  Q2"));
        assert!(screen.contains("Second?"));
    }

    #[test]
    fn test_empty_selection_shows_warning_and_no_record() {
        let mut app = app_with_questions();
        app.viva.clear_sections();
        let screen = render(&mut app);

        assert!(screen.contains("Showing 0 of 3 questions (0/2)"));
        assert!(screen.contains("No questions to display"));
        assert!(screen.contains("First"));
        assert!(!screen.contains("Question 1 of"));
        assert!(!screen.contains("Answer:"));
    }

    #[test]
    fn test_load_failure_shows_error_and_no_record() {
        let mut app = App::new();
        let err = read_questions(b"Question,Answer\nQ\x8f,A\n", SchemaPolicy::Declared).unwrap_err();
        app.viva.set_error(err.to_string());
        let screen = render(&mut app);

        assert!(screen.contains("Could not load viva data"));
        assert!(screen.contains("cp1252"));
        assert!(!screen.contains("Showing"));
        assert!(!screen.contains("Answer:"));
    }

    #[test]
    fn test_multiline_answer_keeps_line_breaks() {
        let mut app = App::new();
        let data = "Section,Question Number,Question,Answer\n\
            Methods,007,\"Why this design?\nBe specific.\",\"First point.\nSecond point.\"\n";
        app.viva
            .set_loaded(read_questions(data.as_bytes(), SchemaPolicy::Declared).unwrap());
        let screen = render(&mut app);

        assert!(screen.contains("Methods  Q007"));
        assert!(!screen.contains("First point.Second point."));
        assert!(!screen.contains("design?Be"));
        let rows: Vec<&str> = screen.lines().map(str::trim_end).collect();
        assert!(rows.iter().any(|row| row.ends_with("First point.")));
        assert!(rows.iter().any(|row| row.ends_with("Second point.")));
        assert!(rows.iter().any(|row| row.ends_with("Be specific.")));
    }

    #[test]
    fn test_blank_section_is_labelled_in_picker() {
        let mut app = App::new();
        let data = "Section,Question Number,Question,Answer\n\
            General,1,Named?,Yes.\n\
            ,2,Unlabelled?,Also yes.\n";
        app.viva
            .set_loaded(read_questions(data.as_bytes(), SchemaPolicy::Declared).unwrap());
        app.viva.navigate(NavAction::Last, &mut StdRng::seed_from_u64(0));
        let screen = render(&mut app);
        assert!(screen.contains("2  Q2"));

        app.viva.open_picker();
        let screen = render(&mut app);
        assert!(screen.contains("1. General"));
        assert!(screen.contains("2. (blank section)"));
    }

    #[test]
    fn test_section_picker_lists_order() {
        let mut app = app_with_questions();
        app.viva.open_picker();
        app.viva.toggle_highlighted();
        app.viva.toggle_highlighted();
        let screen = render(&mut app);

        assert!(screen.contains("Filter Sections (2/2)"));
        assert!(screen.contains("[x]  2. SectionA"));
        assert!(screen.contains("[x]  1. SectionB"));
    }

    #[test]
    fn test_glossary_table() {
        let mut app = App::new();
        app.active_tab = Tab::Glossary;
        app.glossary.set_loaded(
            read_glossary(b"Term,Definition\nOntology,The nature of being\nAxiology,The study of values\n")
                .unwrap(),
        );
        let screen = render(&mut app);

        assert!(screen.contains("Glossary contains 2 terms"));
        assert!(screen.contains("Term"));
        assert!(screen.contains("Definition"));
        assert!(screen.contains("Ontology"));
        assert!(screen.contains("The study of values"));
        assert!(screen.find("Ontology") < screen.find("Axiology"));
    }

    #[test]
    fn test_glossary_search_line() {
        let mut app = App::new();
        app.active_tab = Tab::Glossary;
        app.glossary.set_loaded(
            read_glossary(b"Term,Definition\nOntology,Being\nAxiology,Values\n").unwrap(),
        );
        app.glossary.start_search();
        for c in "axi".chars() {
            app.glossary.push_search_char(c);
        }
        let screen = render(&mut app);

        assert!(screen.contains("Glossary contains 2 terms (1 matching \"axi\")"));
        assert!(screen.contains("/axi"));
        assert!(!screen.contains("Ontology"));
    }

    #[test]
    fn test_glossary_failure() {
        let mut app = app_with_questions();
        app.active_tab = Tab::Glossary;
        app.glossary.set_error("file contains no records".to_string());
        let screen = render(&mut app);
        assert!(screen.contains("Could not load glossary data"));
        assert!(!screen.contains("Glossary contains"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new();
        app.show_help = true;
        let screen = render(&mut app);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("https://thinkingml.com"));
    }
}
