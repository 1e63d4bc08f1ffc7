// Glossary tab rendering.
// Two-column term/definition table with wrapped rows and an optional search line.

use ratatui::{prelude::*, widgets::*};

use crate::state::{GlossaryTabState, LoadingState};

use super::common::{render_empty, render_failure, render_info, wrap_text};

/// Share of the table width given to the term column.
const TERM_PERCENT: u16 = 30;

/// Draw the Glossary tab.
pub fn draw_glossary_tab(frame: &mut Frame, glossary: &mut GlossaryTabState, area: Rect) {
    if glossary.data.is_loaded() {
        draw_table(frame, glossary, area);
        return;
    }
    match &glossary.data {
        LoadingState::Error(e) => render_failure(frame, area, "Could not load glossary data", e),
        _ => render_empty(frame, area, "No glossary data loaded"),
    }
}

fn draw_table(frame: &mut Frame, glossary: &mut GlossaryTabState, area: Rect) {
    let show_search = glossary.search_active || !glossary.search_query.is_empty();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Count
            Constraint::Min(3),    // Table
            Constraint::Length(if show_search { 1 } else { 0 }),
        ])
        .split(area);

    // Inner width minus borders, highlight symbol, and column spacing.
    let inner = chunks[1].width.saturating_sub(2 + 2 + 1) as usize;
    let term_width = inner * TERM_PERCENT as usize / 100;
    let definition_width = inner.saturating_sub(term_width);

    let visible = glossary.visible();
    let total = glossary.total();
    let info = if glossary.search_query.is_empty() {
        format!("Glossary contains {} terms", total)
    } else {
        format!(
            "Glossary contains {} terms ({} matching \"{}\")",
            total,
            visible.len(),
            glossary.search_query
        )
    };

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let term = wrap_text(&record.term, term_width.max(1));
            let definition = wrap_text(&record.definition, definition_width.max(1));
            let height = term.len().max(definition.len()) as u16;

            let style = if i % 2 == 1 {
                Style::default().bg(Color::Indexed(236))
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(Text::from(
                    term.into_iter().map(Line::from).collect::<Vec<_>>(),
                ))
                .style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(Text::from(
                    definition.into_iter().map(Line::from).collect::<Vec<_>>(),
                ))
                .style(Style::default().fg(Color::Gray)),
            ])
            .height(height.max(1))
            .style(style)
        })
        .collect();
    let empty = rows.is_empty();

    render_info(frame, chunks[0], info);

    if empty {
        let block = Block::default().borders(Borders::ALL).title(" Glossary ");
        let text = Paragraph::new("No matching terms")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, chunks[1]);
    } else {
        let header = Row::new(vec!["Term", "Definition"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(TERM_PERCENT),
                Constraint::Percentage(100 - TERM_PERCENT),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Glossary "))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
        frame.render_stateful_widget(table, chunks[1], &mut glossary.table_state);
    }

    if show_search {
        let cursor = if glossary.search_active { "█" } else { "" };
        let search_line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(glossary.search_query.clone()),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]);
        let search_widget = Paragraph::new(search_line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(search_widget, chunks[2]);
    }
}
