use std::collections::{HashMap, HashSet};

use crate::app::tmdb::{CatalogError, MoviePage};

/// Identifies one search request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub page: u32,
}

impl QueryKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

/// Messages sent back from the background fetch threads
pub enum FetchMessage {
    Search {
        key: QueryKey,
        result: Result<MoviePage, CatalogError>,
    },
    Poster {
        movie_id: u64,
        result: Result<Vec<u8>, CatalogError>,
    },
}

/// What a finished fetch meant for the key currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { empty: bool },
    Failed,
}

/// What the result area should show right now
#[derive(Debug)]
pub enum ResultView<'a> {
    Idle,
    Loading,
    Error(&'a CatalogError),
    Results(&'a MoviePage),
}

/// Keyed search state.
///
/// Tracks which `QueryKey` is current, which keys have a request in flight,
/// and the pages already fetched this session. While a new key loads, the
/// previous key's page stays available as placeholder data. Results that
/// arrive for a key that is no longer current are cached but never shown.
#[derive(Debug, Default)]
pub struct SearchResults {
    current: Option<QueryKey>,
    data: Option<MoviePage>,
    placeholder: bool,
    error: Option<CatalogError>,
    in_flight: HashSet<QueryKey>,
    cache: HashMap<QueryKey, MoviePage>,
}

impl SearchResults {
    /// Makes `key` current. Returns `true` when the caller should start a
    /// request for it. `refetch` forces a request even if the key is
    /// unchanged; requests already in flight are never duplicated.
    pub fn set_key(&mut self, key: QueryKey, refetch: bool) -> bool {
        let changed = self.current.as_ref() != Some(&key);
        if !changed && !refetch {
            return false;
        }

        if changed {
            match self.cache.get(&key) {
                Some(page) => {
                    self.data = Some(page.clone());
                    self.placeholder = false;
                }
                None => self.placeholder = self.data.is_some(),
            }
        }
        self.error = None;
        self.current = Some(key.clone());

        if self.in_flight.contains(&key) {
            tracing::debug!(query = %key.query, page = key.page, "request already in flight");
            return false;
        }
        self.in_flight.insert(key);
        true
    }

    /// Records a finished request. Returns `None` when the key is stale.
    pub fn finish(
        &mut self,
        key: QueryKey,
        result: Result<MoviePage, CatalogError>,
    ) -> Option<FetchOutcome> {
        self.in_flight.remove(&key);
        let is_current = self.current.as_ref() == Some(&key);

        match result {
            Ok(page) => {
                let empty = page.results.is_empty();
                if is_current {
                    self.data = Some(page.clone());
                    self.placeholder = false;
                    self.error = None;
                }
                self.cache.insert(key.clone(), page);
                if !is_current {
                    tracing::debug!(query = %key.query, page = key.page, "discarding stale result");
                    return None;
                }
                Some(FetchOutcome::Loaded { empty })
            }
            Err(e) => {
                if !is_current {
                    tracing::debug!(
                        query = %key.query,
                        page = key.page,
                        error = %e,
                        "discarding stale error"
                    );
                    return None;
                }
                tracing::error!(query = %key.query, page = key.page, error = %e, "search failed");
                self.data = None;
                self.placeholder = false;
                self.error = Some(e);
                Some(FetchOutcome::Failed)
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|key| self.in_flight.contains(key))
    }

    /// Data for the current key, or the previous key's data while loading
    pub fn data(&self) -> Option<&MoviePage> {
        self.data.as_ref()
    }

    pub fn is_placeholder_data(&self) -> bool {
        self.placeholder
    }

    pub fn view(&self) -> ResultView<'_> {
        if self.current.is_none() {
            return ResultView::Idle;
        }
        if self.is_fetching() {
            return ResultView::Loading;
        }
        if let Some(error) = &self.error {
            return ResultView::Error(error);
        }
        match &self.data {
            Some(page) if !self.placeholder => ResultView::Results(page),
            _ => ResultView::Loading,
        }
    }

    /// Total pages to offer in the pager, placeholder data included
    pub fn total_pages(&self) -> u32 {
        if self.error.is_some() {
            return 0;
        }
        self.data.as_ref().map_or(0, |page| page.total_pages)
    }
}
