use crate::app::App;
use crate::app::pagination::{page_items, PageItem, MARGIN_PAGES_DISPLAYED, PAGE_RANGE_DISPLAYED};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Whether the pager should take up space at all
pub fn has_pagination(app: &App) -> bool {
    app.results.total_pages() > 1
}

/// Renders the page buttons, current page in brackets
pub fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let total_pages = app.results.total_pages();
    let items = page_items(app.page, total_pages, PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED);

    let dim = Style::default().fg(Color::Gray);
    let disabled = Style::default().fg(Color::DarkGray);
    let previous_style = if app.page > 1 { dim } else { disabled };
    let next_style = if app.page < total_pages { dim } else { disabled };

    let mut spans = vec![Span::styled("← ", previous_style)];

    for item in items {
        let span = match item {
            PageItem::Page { number, active: true } => Span::styled(
                format!("[{}]", number),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            PageItem::Page { number, active: false } => {
                Span::styled(format!(" {} ", number), Style::default().fg(Color::White))
            }
            PageItem::Ellipsis => Span::styled(" … ", dim),
        };
        spans.push(span);
    }

    spans.push(Span::styled(" →", next_style));

    let pager = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(pager, area);
}
