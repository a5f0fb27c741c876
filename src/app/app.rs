use crate::app::fetch::{FetchMessage, FetchOutcome, QueryKey, ResultView, SearchResults};
use crate::app::notifications::Notifications;
use crate::app::tmdb::{CatalogError, Movie, MovieCatalog, download_poster};

use chrono::Local;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use std::sync::{Arc, mpsc};
use throbber_widgets_tui::ThrobberState;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";
pub const FOUND_MESSAGE: &str = "Movies found successfully!";

pub enum CurrentScreen {
    Main,
    Exiting,
}

pub struct App {
    pub current_screen: CurrentScreen,
    pub searching: bool,
    pub search_input: String,
    pub query: String,
    pub page: u32,
    pub selected: Option<Movie>,
    pub cursor: usize,
    /// Set by the grid renderer, used for up/down movement
    pub grid_columns: usize,
    pub results: SearchResults,
    pub notifications: Notifications,
    pub throbber_state: ThrobberState,
    pub picker: Option<Picker>,
    pub poster_protocol: Option<StatefulProtocol>,
    pub loading_poster: bool,
    last_notified_query: Option<String>,
    catalog: Arc<dyn MovieCatalog>,
    sender: mpsc::Sender<FetchMessage>,
    pub receiver: mpsc::Receiver<FetchMessage>,
}

impl App {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            current_screen: CurrentScreen::Main,
            searching: false,
            search_input: String::new(),
            query: String::new(),
            page: 1,
            selected: None,
            cursor: 0,
            grid_columns: 1,
            results: SearchResults::default(),
            notifications: Notifications::default(),
            throbber_state: ThrobberState::default(),
            picker: None,
            poster_protocol: None,
            loading_poster: false,
            last_notified_query: None,
            catalog,
            sender,
            receiver,
        }
    }

    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Commits a new search. Blank input only raises a notification.
    pub fn submit_search(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.notifications.error(EMPTY_QUERY_MESSAGE);
            return;
        }

        tracing::info!(query = trimmed, "new search");
        self.query = trimmed.to_string();
        self.page = 1;
        self.cursor = 0;
        self.close_overlay();
        self.refresh(true);
    }

    /// Moves to another page of the current query. Only possible while a
    /// pager is on screen, so never during the first load or after an error.
    pub fn set_page(&mut self, page: u32) {
        let total_pages = self.results.total_pages();
        if self.query.is_empty() || total_pages <= 1 {
            return;
        }

        let page = page.clamp(1, total_pages);
        if page == self.page {
            return;
        }

        tracing::debug!(query = %self.query, page, "page change");
        self.page = page;
        self.cursor = 0;
        self.refresh(false);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn refresh(&mut self, refetch: bool) {
        if self.query.is_empty() {
            return;
        }

        let key = QueryKey::new(self.query.clone(), self.page);
        if self.results.set_key(key.clone(), refetch) {
            self.spawn_search(key);
        }
    }

    fn spawn_search(&self, key: QueryKey) {
        let catalog = Arc::clone(&self.catalog);
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = catalog.search_movies(&key.query, key.page);
            let _ = sender.send(FetchMessage::Search { key, result });
        });
    }

    /// Drains finished background work. Called once per frame.
    pub fn poll_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Search { key, result } => {
                let query = key.query.clone();
                if let Some(outcome) = self.results.finish(key, result) {
                    self.on_search_finished(&query, outcome);
                }
            }
            FetchMessage::Poster { movie_id, result } => self.on_poster_finished(movie_id, result),
        }
    }

    fn on_search_finished(&mut self, query: &str, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded { empty: true } => {
                self.notifications.blank(NO_RESULTS_MESSAGE);
            }
            FetchOutcome::Loaded { empty: false } => {
                if self.last_notified_query.as_deref() != Some(query) {
                    self.notifications.success(FOUND_MESSAGE);
                    self.last_notified_query = Some(query.to_string());
                }
            }
            FetchOutcome::Failed => {}
        }

        let movies = self.visible_movies();
        let count = movies.len();
        let selection_gone = self
            .selected
            .as_ref()
            .is_some_and(|selected| !movies.iter().any(|movie| movie.id == selected.id));
        if selection_gone {
            self.close_overlay();
        }
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    fn on_poster_finished(&mut self, movie_id: u64, result: Result<Vec<u8>, CatalogError>) {
        if self.selected.as_ref().map(|movie| movie.id) != Some(movie_id) {
            return;
        }
        self.loading_poster = false;

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "poster download failed");
                return;
            }
        };

        let Some(picker) = &self.picker else {
            return;
        };
        match image::load_from_memory(&bytes) {
            Ok(dyn_img) => self.poster_protocol = Some(picker.new_resize_protocol(dyn_img)),
            Err(e) => tracing::warn!(movie_id, error = %e, "poster decode failed"),
        }
    }

    /// Movies in the grid right now; empty unless results are on screen
    pub fn visible_movies(&self) -> &[Movie] {
        match self.results.view() {
            ResultView::Results(page) => &page.results,
            _ => &[],
        }
    }

    pub fn next_movie(&mut self) {
        let count = self.visible_movies().len();
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % count;
    }

    pub fn previous_movie(&mut self) {
        let count = self.visible_movies().len();
        if count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { count - 1 } else { self.cursor - 1 };
    }

    pub fn movie_below(&mut self) {
        let count = self.visible_movies().len();
        let below = self.cursor + self.grid_columns.max(1);
        if below < count {
            self.cursor = below;
        }
    }

    pub fn movie_above(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.grid_columns.max(1));
    }

    /// Opens the detail overlay for the movie under the cursor
    pub fn select_current(&mut self) {
        if let Some(movie) = self.visible_movies().get(self.cursor).cloned() {
            self.select(movie);
        }
    }

    pub fn select(&mut self, movie: Movie) {
        tracing::debug!(id = movie.id, title = %movie.title, "movie selected");
        self.poster_protocol = None;
        self.loading_poster = false;

        if let (Some(url), Some(_)) = (movie.poster_url(), &self.picker) {
            self.loading_poster = true;
            let sender = self.sender.clone();
            let movie_id = movie.id;
            std::thread::spawn(move || {
                let result = download_poster(&url);
                let _ = sender.send(FetchMessage::Poster { movie_id, result });
            });
        }

        self.selected = Some(movie);
    }

    pub fn close_overlay(&mut self) {
        self.selected = None;
        self.poster_protocol = None;
        self.loading_poster = false;
    }

    /// Advances animations and drops expired notifications
    pub fn on_tick(&mut self) {
        self.throbber_state.calc_next();
        self.notifications.prune(Local::now());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::notifications::ToastKind;
    use crate::app::tmdb::MoviePage;
    use std::sync::Mutex;
    use std::time::Duration;

    pub fn movie(id: u64, title: &str, poster_path: Option<&str>) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: poster_path.map(str::to_string),
            backdrop_path: None,
            overview: Some(format!("About {}", title)),
            release_date: Some("1999-03-30".to_string()),
            vote_average: Some(8.2),
        }
    }

    /// Answers every search with a canned page and records the calls
    pub struct FakeCatalog {
        pub calls: Mutex<Vec<(String, u32)>>,
        pub respond: Box<dyn Fn(&str, u32) -> Result<MoviePage, CatalogError> + Send + Sync>,
    }

    impl FakeCatalog {
        pub fn with_pages(
            respond: impl Fn(&str, u32) -> Result<MoviePage, CatalogError> + Send + Sync + 'static,
        ) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                respond: Box::new(respond),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl MovieCatalog for FakeCatalog {
        fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
            self.calls.lock().unwrap().push((query.to_string(), page));
            (self.respond)(query, page)
        }
    }

    pub fn matrix_catalog() -> Arc<FakeCatalog> {
        FakeCatalog::with_pages(|_, page| {
            Ok(MoviePage {
                results: vec![movie(u64::from(page), "The Matrix", Some("/m.jpg"))],
                total_pages: 5,
                page: Some(page),
                total_results: Some(5),
            })
        })
    }

    /// Waits for the next background result and applies it
    pub fn settle(app: &mut App) {
        let message = app
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch did not finish");
        app.handle_message(message);
    }

    #[test]
    fn blank_submit_only_notifies() {
        let catalog = matrix_catalog();
        let mut app = App::new(catalog.clone());

        app.submit_search("   \t ");

        assert_eq!(app.notifications.count(ToastKind::Error, EMPTY_QUERY_MESSAGE), 1);
        assert_eq!(app.notifications.visible().len(), 1);
        assert!(app.query.is_empty());
        assert!(!app.results.is_fetching());
        assert!(app.receiver.recv_timeout(Duration::from_millis(100)).is_err());
        assert_eq!(catalog.call_count(), 0);
    }

    #[test]
    fn submit_trims_resets_page_and_clears_selection() {
        let catalog = matrix_catalog();
        let mut app = App::new(catalog.clone());
        app.submit_search("matrix");
        settle(&mut app);
        app.set_page(3);
        settle(&mut app);
        app.select_current();
        assert!(app.selected.is_some());

        app.submit_search("  alien  ");

        assert_eq!(app.query, "alien");
        assert_eq!(app.page, 1);
        assert!(app.selected.is_none());
        settle(&mut app);
        assert_eq!(
            catalog.calls.lock().unwrap().last(),
            Some(&("alien".to_string(), 1))
        );
    }

    #[test]
    fn matrix_example_shows_one_entry_and_five_pages() {
        let mut app = App::new(matrix_catalog());
        app.submit_search("matrix");
        assert!(matches!(app.results.view(), ResultView::Loading));

        settle(&mut app);

        assert_eq!(app.visible_movies().len(), 1);
        assert_eq!(app.results.total_pages(), 5);
        assert_eq!(app.page, 1);
        assert_eq!(app.notifications.count(ToastKind::Success, FOUND_MESSAGE), 1);
    }

    #[test]
    fn page_changes_do_not_repeat_success_toast() {
        let catalog = matrix_catalog();
        let mut app = App::new(catalog.clone());
        app.submit_search("matrix");
        settle(&mut app);

        app.next_page();
        settle(&mut app);
        app.set_page(4);
        settle(&mut app);

        assert_eq!(app.page, 4);
        assert_eq!(app.query, "matrix");
        assert_eq!(app.notifications.count(ToastKind::Success, FOUND_MESSAGE), 1);
        assert_eq!(catalog.call_count(), 3);

        app.submit_search("alien");
        settle(&mut app);
        assert_eq!(app.notifications.count(ToastKind::Success, FOUND_MESSAGE), 2);
    }

    #[test]
    fn pages_are_clamped_to_known_range() {
        let mut app = App::new(matrix_catalog());
        app.set_page(3);
        assert_eq!(app.page, 1);

        app.submit_search("matrix");
        settle(&mut app);
        app.previous_page();
        assert_eq!(app.page, 1);
        app.set_page(99);
        assert_eq!(app.page, 5);
    }

    #[test]
    fn paging_is_ignored_while_the_first_page_loads() {
        let catalog = matrix_catalog();
        let mut app = App::new(catalog.clone());
        app.submit_search("matrix");

        for _ in 0..7 {
            app.next_page();
        }
        assert_eq!(app.page, 1);

        settle(&mut app);
        assert_eq!(catalog.call_count(), 1);
        assert!(app.receiver.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn paging_after_a_failure_does_not_refetch() {
        let catalog = FakeCatalog::with_pages(|_, _| Err(CatalogError::MissingCredential));
        let mut app = App::new(catalog.clone());
        app.submit_search("matrix");
        settle(&mut app);

        app.next_page();
        app.set_page(3);

        assert_eq!(app.page, 1);
        assert!(app.receiver.recv_timeout(Duration::from_millis(100)).is_err());
        assert_eq!(catalog.call_count(), 1);
    }

    #[test]
    fn empty_results_notify_once_and_show_no_grid() {
        let catalog = FakeCatalog::with_pages(|_, _| {
            Ok(MoviePage {
                results: vec![],
                total_pages: 0,
                page: Some(1),
                total_results: Some(0),
            })
        });
        let mut app = App::new(catalog);
        app.submit_search("qwertyuiop");
        settle(&mut app);

        assert_eq!(app.notifications.count(ToastKind::Blank, NO_RESULTS_MESSAGE), 1);
        assert_eq!(app.notifications.count(ToastKind::Success, FOUND_MESSAGE), 0);
        assert!(app.visible_movies().is_empty());
    }

    #[test]
    fn failures_show_error_and_resubmit_retries() {
        let catalog = FakeCatalog::with_pages(|_, _| Err(CatalogError::MissingCredential));
        let mut app = App::new(catalog.clone());
        app.submit_search("matrix");
        settle(&mut app);

        assert!(matches!(app.results.view(), ResultView::Error(_)));
        assert!(app.notifications.visible().is_empty());

        app.submit_search("matrix");
        assert!(matches!(app.results.view(), ResultView::Loading));
        settle(&mut app);
        assert_eq!(catalog.call_count(), 2);
    }

    #[test]
    fn selecting_and_closing_the_overlay() {
        let mut app = App::new(matrix_catalog());
        app.submit_search("matrix");
        settle(&mut app);

        app.select_current();
        assert_eq!(app.selected.as_ref().map(|m| m.title.as_str()), Some("The Matrix"));
        // no picker, so no poster download is started
        assert!(!app.loading_poster);

        app.close_overlay();
        assert!(app.selected.is_none());
    }

    #[test]
    fn cursor_moves_within_the_grid() {
        let catalog = FakeCatalog::with_pages(|_, _| {
            Ok(MoviePage {
                results: (1..=7).map(|i| movie(i, &format!("Movie {}", i), None)).collect(),
                total_pages: 1,
                page: Some(1),
                total_results: Some(7),
            })
        });
        let mut app = App::new(catalog);
        app.submit_search("movie");
        settle(&mut app);
        app.grid_columns = 3;

        app.movie_below();
        assert_eq!(app.cursor, 3);
        app.movie_below();
        assert_eq!(app.cursor, 6);
        app.movie_below();
        assert_eq!(app.cursor, 6);
        app.next_movie();
        assert_eq!(app.cursor, 0);
        app.previous_movie();
        assert_eq!(app.cursor, 6);
        app.movie_above();
        assert_eq!(app.cursor, 3);
    }
}
