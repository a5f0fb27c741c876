use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the search bar at the top of the screen
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (border_color, title) = if app.searching {
        (Color::Yellow, "Search movies")
    } else {
        (Color::Reset, "Movies")
    };

    let search_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if app.searching {
        Line::from(vec![
            Span::raw(app.search_input.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if app.query.is_empty() {
        Line::from(Span::styled(
            "Press (/) to search movies",
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Results for ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.query.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(search_block), area);
}
