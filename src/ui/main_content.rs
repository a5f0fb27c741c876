use crate::app::App;
use crate::app::fetch::ResultView;
use crate::app::tmdb::{CatalogError, Movie};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use super::loading::render_loading;

pub const ERROR_MESSAGE: &str = "There was an error, please try again...";

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

/// Renders the result area: loading, error, or the movie grid
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.results.view() {
        ResultView::Idle => render_idle(frame, area),
        ResultView::Loading => render_loading(frame, app, area),
        ResultView::Error(CatalogError::MissingCredential) => render_missing_api_key(frame, area),
        ResultView::Error(_) => render_error(frame, area),
        ResultView::Results(page) if page.results.is_empty() => {
            let empty_block = Block::default()
                .title("No movies found")
                .borders(Borders::ALL)
                .style(Style::default());

            frame.render_widget(empty_block, area);
        }
        ResultView::Results(_) => render_grid(frame, app, area),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let empty_block = Block::default()
        .title("No search yet - press '/' to search")
        .borders(Borders::ALL)
        .style(Style::default());

    frame.render_widget(empty_block, area);
}

fn render_error(frame: &mut Frame, area: Rect) {
    let error_block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .style(Style::default());

    let error_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            ERROR_MESSAGE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];

    let error_paragraph = Paragraph::new(error_text)
        .block(error_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

/// Renders missing API key error with big text
fn render_missing_api_key(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Big text
            Constraint::Min(5),     // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["API KEY".into(), "REQUIRED!".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please set a TMDB credential to search movies",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1. Get a key at: https://www.themoviedb.org/settings/api",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "2. export TMDB_API_KEY=your_key or TMDB_ACCESS_TOKEN=your_token",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "3. Restart the application",
            Style::default().fg(Color::White),
        )),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let total_results = app
        .results
        .data()
        .and_then(|page| page.total_results)
        .map(|total| format!(" of {} results", total))
        .unwrap_or_default();

    let grid_block = Block::default()
        .title(format!("Page {}{} - (Enter) for details", app.page, total_results))
        .borders(Borders::ALL);
    let inner = grid_block.inner(area);
    frame.render_widget(grid_block, area);

    let columns = usize::from((inner.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    app.grid_columns = columns;

    let cursor_row = app.cursor / columns;
    let first_row = (cursor_row + 1).saturating_sub(visible_rows);
    let cursor = app.cursor;

    let movies = app.visible_movies();
    for (index, movie) in movies.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let column = index % columns;

        let card_area = Rect {
            x: inner.x + column as u16 * CARD_WIDTH,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        }
        .intersection(inner);

        render_card(frame, movie, index == cursor, card_area);
    }
}

fn render_card(frame: &mut Frame, movie: &Movie, highlighted: bool, area: Rect) {
    let border_style = if highlighted {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if highlighted {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(movie.title.as_str(), title_style))];

    // Entries without a poster get no poster line at all
    if movie.poster_path.is_some() {
        lines.push(Line::from(Span::styled(
            "▣ poster",
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(year) = movie.release_date.as_deref().and_then(|date| date.get(..4)) {
        lines.push(Line::from(Span::styled(
            year.to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}
