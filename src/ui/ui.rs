use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::footer::render_footer;
use super::header::render_header;
use super::main_content::render_main_content;
use super::movie_detail::render_movie_detail;
use super::pagination::{has_pagination, render_pagination};
use super::toast::render_toasts;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let pager_height = if has_pagination(app) { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Search bar
            Constraint::Min(1),               // Results
            Constraint::Length(pager_height), // Pagination
            Constraint::Length(3),            // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    if pager_height > 0 {
        render_pagination(frame, app, chunks[2]);
    }
    render_footer(frame, app, chunks[3]);

    // Overlays go last so they draw on top
    let area = frame.area();
    render_movie_detail(frame, app, area);
    render_toasts(frame, app, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tmdb::{CatalogError, MoviePage};
    use crate::app::test_support::{FakeCatalog, matrix_catalog, movie, settle};
    use crate::ui::main_content::ERROR_MESSAGE;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| ui(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn single_page(titles: &[(&str, Option<&str>)]) -> std::sync::Arc<FakeCatalog> {
        let results: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, (title, poster))| movie(i as u64 + 1, title, *poster))
            .collect();
        FakeCatalog::with_pages(move |_, _| {
            Ok(MoviePage {
                results: results.clone(),
                total_pages: 1,
                page: Some(1),
                total_results: Some(results.len() as u32),
            })
        })
    }

    #[test]
    fn idle_screen_prompts_for_a_search() {
        let mut app = App::new(matrix_catalog());
        let screen = draw(&mut app);
        assert!(screen.contains("Press (/) to search movies"));
        assert!(!screen.contains("[1]"));
    }

    #[test]
    fn matrix_example_renders_grid_and_five_page_pager() {
        let mut app = App::new(matrix_catalog());
        app.submit_search("matrix");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("The Matrix"));
        assert!(screen.contains("[1]"));
        for page in 2..=5 {
            assert!(screen.contains(&format!(" {} ", page)), "page {} missing", page);
        }
        assert!(!screen.contains(" 6 "));
    }

    #[test]
    fn single_page_has_no_pager() {
        let mut app = App::new(single_page(&[("Alien", Some("/a.jpg"))]));
        app.submit_search("alien");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Alien"));
        assert!(!screen.contains("[1]"));
    }

    #[test]
    fn cards_without_posters_omit_the_poster_line() {
        let mut app = App::new(single_page(&[("Poster Less", None)]));
        app.submit_search("poster");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Poster Less"));
        assert!(!screen.contains("▣ poster"));

        let mut app = App::new(single_page(&[("Has Poster", Some("/p.jpg"))]));
        app.submit_search("poster");
        settle(&mut app);
        assert!(draw(&mut app).contains("▣ poster"));
    }

    #[test]
    fn empty_results_render_no_grid() {
        let mut app = App::new(single_page(&[]));
        app.submit_search("nothing");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("No movies found"));
        assert!(screen.contains("No movies found for your request."));
        assert!(!screen.contains("Page 1 -"));
    }

    #[test]
    fn loading_then_error() {
        let catalog = FakeCatalog::with_pages(|_, _| {
            Err(CatalogError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        });
        let mut app = App::new(catalog);
        app.submit_search("matrix");
        assert!(draw(&mut app).contains("Loading Movies"));

        settle(&mut app);
        let screen = draw(&mut app);
        assert!(screen.contains(ERROR_MESSAGE));
        assert!(!screen.contains("Loading Movies"));
    }

    #[test]
    fn overlay_opens_and_closes() {
        let mut app = App::new(matrix_catalog());
        app.submit_search("matrix");
        settle(&mut app);

        app.select_current();
        let screen = draw(&mut app);
        assert!(screen.contains("Movie Details - The Matrix"));
        assert!(screen.contains("About The Matrix"));
        assert!(screen.contains("8.2/10"));

        app.close_overlay();
        assert!(!draw(&mut app).contains("Movie Details"));
    }
}
