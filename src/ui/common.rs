// Shared rendering helpers.
// Empty/error states, the info line, relative times, and word wrapping.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a load failure: a heading plus the underlying error.
pub fn render_failure(frame: &mut Frame, area: Rect, heading: &str, error: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("⚠ {}", heading),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render a one-line informational banner.
pub fn render_info(frame: &mut Frame, area: Rect, message: String) {
    let text = Paragraph::new(Line::from(vec![
        Span::styled(" ℹ ", Style::default().fg(Color::Cyan)),
        Span::styled(message, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(text, area);
}

/// Wrap text to fit within `width` columns, breaking at word boundaries.
/// Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                result.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            result.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > width {
            result.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || result.is_empty() {
        result.push(current);
    }
    result
}
