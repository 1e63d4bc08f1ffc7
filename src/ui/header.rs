// Page header with title and brand logo.
// The logo PNG is shrunk to a half-block thumbnail; plain styled text is the fallback.

use std::path::Path;

use image::imageops::FilterType;
use ratatui::{prelude::*, widgets::*};

pub const TITLE: &str = "PhD Viva Q&A";
pub const BRAND: &str = "thinkingML";
pub const BRAND_URL: &str = "https://thinkingml.com";

/// Thumbnail width in terminal cells.
const LOGO_COLS: u32 = 4;
/// Thumbnail height in terminal cells; each cell holds two pixel rows.
const LOGO_ROWS: u32 = 2;

/// Brand colour used for the text link and the fallback.
const BRAND_COLOR: Color = Color::Rgb(0x5f, 0x6f, 0x8c);

/// Decoded header logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    /// Cell rows of (top, bottom) pixel colours, `None` where transparent.
    Image(Vec<Vec<(Option<Color>, Option<Color>)>>),
    /// Styled brand text only.
    Text,
}

impl Logo {
    /// Decode the logo at `path`, falling back to text if it is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match image::open(path) {
            Ok(img) => {
                let rgba = img
                    .resize_exact(LOGO_COLS, LOGO_ROWS * 2, FilterType::Triangle)
                    .to_rgba8();
                let pixel = |x: u32, y: u32| {
                    let [r, g, b, a] = rgba.get_pixel(x, y).0;
                    (a >= 128).then_some(Color::Rgb(r, g, b))
                };
                let rows = (0..LOGO_ROWS)
                    .map(|row| {
                        (0..LOGO_COLS)
                            .map(|x| (pixel(x, row * 2), pixel(x, row * 2 + 1)))
                            .collect()
                    })
                    .collect();
                tracing::debug!(path = %path.display(), "logo decoded");
                Logo::Image(rows)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "logo unavailable, using text");
                Logo::Text
            }
        }
    }

    /// Lines for the right-hand side of the header.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let brand = Span::styled(
            BRAND,
            Style::default()
                .fg(BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        );
        match self {
            Logo::Text => vec![Line::from(brand)],
            Logo::Image(rows) => rows
                .iter()
                .enumerate()
                .map(|(i, cells)| {
                    let mut spans: Vec<Span<'static>> = cells
                        .iter()
                        .map(|(top, bottom)| half_block(*top, *bottom))
                        .collect();
                    if i == 0 {
                        spans.push(Span::raw("  "));
                        spans.push(brand.clone());
                    }
                    Line::from(spans)
                })
                .collect(),
        }
    }
}

fn half_block(top: Option<Color>, bottom: Option<Color>) -> Span<'static> {
    match (top, bottom) {
        (None, None) => Span::raw(" "),
        (Some(fg), None) => Span::styled("▀", Style::default().fg(fg)),
        (None, Some(fg)) => Span::styled("▄", Style::default().fg(fg)),
        (Some(fg), Some(bg)) => Span::styled("▀", Style::default().fg(fg).bg(bg)),
    }
}

/// Draw the title on the left and the logo on the right.
pub fn draw_header(frame: &mut Frame, logo: &Logo, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let logo_widget = Paragraph::new(logo.lines()).alignment(Alignment::Right);
    frame.render_widget(logo_widget, chunks[1]);
}
