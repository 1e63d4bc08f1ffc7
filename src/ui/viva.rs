// Viva Q&A tab rendering.
// Status line, progress gauge, navigation buttons, and the current record.

use ratatui::{prelude::*, widgets::*};

use crate::data::QuestionRecord;
use crate::state::{NavAction, QuestionView, SelectionStats, VivaTabState};

use super::common::{render_empty, render_failure, render_info};
use super::modal;

pub const EMPTY_SELECTION_WARNING: &str =
    "No questions to display. Please select at least one section.";

/// Draw the Viva Q&A tab.
pub fn draw_viva_tab(frame: &mut Frame, viva: &mut VivaTabState, area: Rect) {
    match viva.view() {
        QuestionView::Idle => render_empty(frame, area, "No question data loaded"),
        QuestionView::Failed(e) => render_failure(frame, area, "Could not load viva data", e),
        QuestionView::Empty(stats) => draw_empty(frame, stats, area),
        QuestionView::Active {
            record,
            position,
            stats,
        } => draw_active(frame, record, position, stats, area),
    }

    if viva.picker.open {
        modal::draw_section_picker(frame, viva);
    }
}

fn status_text(stats: &SelectionStats) -> String {
    format!(
        "Showing {} of {} questions ({}/{})",
        stats.shown, stats.total, stats.selected_sections, stats.total_sections
    )
}

fn draw_empty(frame: &mut Frame, stats: SelectionStats, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Warning
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(area);

    render_info(frame, chunks[0], status_text(&stats));

    let warning = Paragraph::new(Line::from(vec![
        Span::styled(" ⚠ ", Style::default().fg(Color::Yellow)),
        Span::styled(EMPTY_SELECTION_WARNING, Style::default().fg(Color::Yellow)),
        Span::styled("  (f to choose sections)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(warning, chunks[1]);

    draw_buttons(frame, false, chunks[3]);
}

fn draw_active(
    frame: &mut Frame,
    record: &QuestionRecord,
    position: usize,
    stats: SelectionStats,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Buttons
            Constraint::Min(3),    // Record
        ])
        .split(area);

    render_info(frame, chunks[0], status_text(&stats));

    let ratio = (position + 1) as f64 / stats.shown.max(1) as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("Question {} of {}", position + 1, stats.shown));
    frame.render_widget(gauge, chunks[1]);

    draw_buttons(frame, true, chunks[2]);
    draw_record(frame, record, position, chunks[3]);
}

/// Draw the five navigation buttons, dimmed when disabled.
fn draw_buttons(frame: &mut Frame, enabled: bool, area: Rect) {
    let (key_style, label_style) = if enabled {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    };

    let mut spans = Vec::new();
    for action in NavAction::ALL {
        spans.push(Span::styled(" [", label_style));
        spans.push(Span::styled(action.key_hint(), key_style));
        spans.push(Span::styled(format!(" {}]", action.label()), label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_record(frame: &mut Frame, record: &QuestionRecord, position: usize, area: Rect) {
    let fallback = (position + 1).to_string();
    let section = record
        .section
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&fallback);
    let number = record
        .question_number
        .as_ref()
        .map(|n| n.to_string())
        .unwrap_or_else(|| fallback.clone());

    // Quoted cells may span several lines; keep each as its own `Line`.
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}  Q{}", section, number),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        Text::styled(
            record.question_text.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .lines,
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Answer:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        Text::styled(
            record.answer_text.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )
        .lines,
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
