// Section picker popup.
// Checkbox list of sections showing each selected section's position in the order.

use ratatui::{prelude::*, widgets::*};

use crate::state::VivaTabState;

/// Picker label for rows whose section cell was blank.
const BLANK_SECTION_LABEL: &str = "(blank section)";

/// Draw the section picker on top of the Q&A tab.
pub fn draw_section_picker(frame: &mut Frame, viva: &mut VivaTabState) {
    let Some(bank) = viva.data.data() else {
        return;
    };
    let area = frame.area();

    let modal_width = 60.min(area.width);
    let modal_height = (bank.sections.len() as u16 + 4).clamp(6, 20).min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Section list
            Constraint::Length(1), // Instructions
        ])
        .split(modal_area);

    let selected = viva.session.selected_sections().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Filter Sections ({}/{}) ", selected, bank.sections.len()));

    let items: Vec<ListItem> = bank
        .sections
        .iter()
        .map(|section| {
            let label = if section.is_empty() {
                BLANK_SECTION_LABEL.to_string()
            } else {
                section.clone()
            };
            match viva.session.selection_rank(section) {
                Some(rank) => ListItem::new(Line::from(vec![
                    Span::styled("[x] ", Style::default().fg(Color::Green)),
                    Span::styled(format!("{:>2}. ", rank), Style::default().fg(Color::DarkGray)),
                    Span::styled(label, Style::default().fg(Color::White)),
                ])),
                None => ListItem::new(Line::from(vec![
                    Span::styled("[ ] ", Style::default().fg(Color::DarkGray)),
                    Span::raw("    "),
                    Span::styled(label, Style::default().fg(Color::Gray)),
                ])),
            }
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, chunks[0], &mut viva.picker.list_state);

    let instructions = Line::from(vec![
        Span::styled(" Space", Style::default().fg(Color::Yellow)),
        Span::styled(" = Toggle  ", Style::default().fg(Color::DarkGray)),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::styled(" = All  ", Style::default().fg(Color::DarkGray)),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::styled(" = Clear  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(instructions_widget, chunks[1]);
}
