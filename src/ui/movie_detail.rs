use crate::app::App;
use crate::app::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{StatefulImage, Resize, protocol::StatefulProtocol};

/// Renders the detail overlay for the selected movie, if any
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(movie) = app.selected.clone() else {
        return;
    };

    let popup = centered_rect(area, 80, 80);
    frame.render_widget(Clear, popup);

    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default());

    let inner_area = outer_block.inner(popup);
    frame.render_widget(outer_block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Poster and info
            Constraint::Length(1), // Footer
        ])
        .split(inner_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);

    render_poster_section(frame, columns[0], app);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[1]);

    render_title_section(frame, info[0], &movie);
    render_content_section(frame, info[1], &movie);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press (Esc), (b) or (q) to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    if let Some(protocol) = &mut app.poster_protocol {
        let image = StatefulImage::<StatefulProtocol>::default()
            .resize(Resize::Fit(None));

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
        return;
    }

    let message = if app.loading_poster {
        "Downloading poster..."
    } else {
        "No poster available"
    };

    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(poster_block);

    frame.render_widget(placeholder, area);
}

/// Renders the title section with basic info
fn render_title_section(frame: &mut Frame, area: Rect, movie: &Movie) {
    let mut heading = vec![Span::styled(
        movie.title.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(date) = movie.release_date.as_deref().filter(|date| !date.is_empty()) {
        heading.push(Span::raw(" "));
        heading.push(Span::styled(format!("({})", date), Style::default().fg(Color::Cyan)));
    }

    let mut rating = vec![Span::styled("Rating: ", Style::default().fg(Color::Gray))];
    match movie.vote_average {
        Some(score) => rating.push(Span::styled(
            format!("{:.1}/10", score),
            Style::default().fg(get_rating_color(score)).add_modifier(Modifier::BOLD),
        )),
        None => rating.push(Span::styled("N/A", Style::default().fg(Color::White))),
    }

    let title_paragraph = Paragraph::new(vec![Line::from(heading), Line::from(rating)]);
    frame.render_widget(title_paragraph, area);
}

/// Renders the overview
fn render_content_section(frame: &mut Frame, area: Rect, movie: &Movie) {
    let overview = movie
        .overview
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or("No overview available.");

    let content = vec![
        Line::from(Span::styled(
            "Overview:",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(overview, Style::default().fg(Color::White))),
    ];

    let content_paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true });

    frame.render_widget(content_paragraph, area);
}

fn get_rating_color(score: f64) -> Color {
    if score >= 7.0 {
        Color::Green
    } else if score >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
