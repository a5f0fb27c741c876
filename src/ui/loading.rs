use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX, WhichUse};

/// Renders the loading indicator while a search is in flight
pub fn render_loading(frame: &mut Frame, app: &mut App, area: Rect) {
    let loading_block = Block::default()
        .title("Loading Movies")
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    let [_, spinner_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(32),
        Constraint::Fill(1),
    ])
    .areas(row);

    let label = if app.results.is_placeholder_data() {
        format!("Loading page {}...", app.page)
    } else {
        format!("Searching for \"{}\"...", app.query)
    };

    let throbber = Throbber::default()
        .label(label)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    frame.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
}
