mod app;
use app::App;

mod logging;
mod ui;

use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

use crate::app::CurrentScreen;
use crate::app::config::Config;
use crate::app::tmdb::TmdbClient;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    logging::init(&config);
    tracing::info!(
        base_url = %config.base_url,
        has_credential = config.credential.is_some(),
        "starting"
    );

    let initial_query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Must run after entering the alternate screen, it queries the terminal
    let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "terminal graphics query failed, using halfblocks");
        Picker::halfblocks()
    });

    let catalog = Arc::new(TmdbClient::new(&config.base_url, config.credential.clone()));
    let mut app = App::new(catalog).with_picker(picker);
    if !initial_query.trim().is_empty() {
        app.submit_search(&initial_query);
    }

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.poll_messages();
        app.on_tick();
        terminal.draw(|f| ui::ui(f, app))?;

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                if handle_key(app, key) {
                    tracing::info!("quit");
                    return Ok(());
                }
            }
        }
    }
}

/// Returns `true` when the app should exit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Handle search input when searching is active
    if app.searching {
        match key.code {
            KeyCode::Char(c) => {
                app.search_input.push(c);
            }
            KeyCode::Backspace => {
                app.search_input.pop();
            }
            KeyCode::Enter => {
                app.searching = false;
                let input = std::mem::take(&mut app.search_input);
                app.submit_search(&input);
            }
            KeyCode::Esc => {
                app.searching = false;
                app.search_input.clear();
            }
            _ => {}
        }
        return false;
    }

    // The overlay only knows how to close
    if app.selected.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q')) {
            app.close_overlay();
        }
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => match key.code {
            KeyCode::Char('q') => {
                app.current_screen = CurrentScreen::Exiting;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                app.searching = true;
            }
            KeyCode::Right | KeyCode::Char('l') => app.next_movie(),
            KeyCode::Left | KeyCode::Char('h') => app.previous_movie(),
            KeyCode::Down | KeyCode::Char('j') => app.movie_below(),
            KeyCode::Up | KeyCode::Char('k') => app.movie_above(),
            KeyCode::Enter => app.select_current(),
            KeyCode::PageDown | KeyCode::Char(']') => app.next_page(),
            KeyCode::PageUp | KeyCode::Char('[') => app.previous_page(),
            _ => {}
        },
        CurrentScreen::Exiting => match key.code {
            KeyCode::Char('y') | KeyCode::Char('q') => {
                return true;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                app.current_screen = CurrentScreen::Main;
            }
            _ => {}
        },
    }

    false
}
