// ArticleShelf - app/state.rs
//
// Application state management. Holds the loaded article list, the current
// catalog snapshot and its derived view, and status-bar text.
// Owned by the eframe::App implementation.

use crate::core::catalog::{self, CatalogState};
use crate::core::model::{Article, LoadProgress, PageSize, SortField};
use crate::core::paginate::{self, PageControl, PageInfo};
use crate::core::render::{self, DisplayRow};
use crate::core::timestamp;
use chrono::TimeZone;

/// Figures shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterStats {
    /// Articles in the full (unfiltered) list.
    pub total: usize,
    /// Date of the newest article, `YYYY-MM-DD` in the viewer's time zone.
    pub newest: Option<String>,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Full article list from the last successful load.
    articles: Vec<Article>,

    /// Indices into `articles` for the current keyword and sort.
    view: Vec<usize>,

    /// Current catalog snapshot.
    catalog: CatalogState,

    /// Source of the current (or in-flight) load.
    pub source: Option<String>,

    /// Whether a load is in progress.
    pub loading: bool,

    /// Error from the last failed load; cleared by the next success.
    pub load_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Contents of the search box, applied when the user submits.
    pub search_text: String,

    /// Non-fatal startup warnings (config problems).
    pub warnings: Vec<String>,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create an empty catalog with the given initial page size.
    pub fn new(page_size: PageSize, debug_mode: bool) -> Self {
        Self {
            articles: Vec::new(),
            view: Vec::new(),
            catalog: CatalogState::new(page_size),
            source: None,
            loading: false,
            load_error: None,
            status_message: "Ready. Open an article list to begin.".to_string(),
            search_text: String::new(),
            warnings: Vec::new(),
            dark_mode: true,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            show_about: false,
            debug_mode,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Indices of the current filtered/sorted view.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Replace the catalog snapshot, re-deriving the view only when the
    /// keyword or sort changed.
    pub fn apply(&mut self, next: CatalogState) {
        if next == self.catalog {
            return;
        }
        let rederive = self.catalog.view_differs(&next);
        self.catalog = next;
        if rederive {
            self.view = catalog::derive_view(&self.articles, &self.catalog);
            tracing::debug!(
                keyword = self.catalog.keyword(),
                sort = self.catalog.sort_field().label(),
                matches = self.view.len(),
                "View re-derived"
            );
        }
    }

    /// Apply the search box contents as the keyword.
    pub fn submit_search(&mut self) {
        let next = self.catalog.with_keyword(&self.search_text);
        self.apply(next);
    }

    /// Drop the keyword and empty the search box.
    pub fn clear_keyword(&mut self) {
        self.search_text.clear();
        let next = self.catalog.cleared_keyword();
        self.apply(next);
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        let next = self.catalog.toggle_sort(field);
        self.apply(next);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        let next = self.catalog.with_page_size(page_size);
        self.apply(next);
    }

    /// Navigate; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        let next = self.catalog.go_to_page(page, self.view.len());
        self.apply(next);
    }

    /// Mark a load of `source` as started.
    pub fn begin_load(&mut self, source: &str) {
        self.loading = true;
        self.source = Some(source.to_string());
        self.status_message = format!("Loading {source}...");
    }

    /// Apply the loader's result.
    pub fn handle_progress(&mut self, progress: LoadProgress) {
        match progress {
            LoadProgress::Loaded { articles, source } => self.on_loaded(articles, source),
            LoadProgress::Failed { error } => self.on_failed(error),
        }
    }

    /// Replace the article list; keyword and sort are kept, the page resets.
    pub fn on_loaded(&mut self, articles: Vec<Article>, source: String) {
        self.loading = false;
        self.load_error = None;
        self.articles = articles;
        self.catalog = self.catalog.with_page_size(self.catalog.page_size());
        self.view = catalog::derive_view(&self.articles, &self.catalog);
        self.status_message = format!("Loaded {} articles from {source}", self.articles.len());
        self.source = Some(source);
    }

    /// Show the empty state with the failure in the status bar.
    pub fn on_failed(&mut self, error: String) {
        self.loading = false;
        self.articles.clear();
        self.view.clear();
        self.catalog = self.catalog.with_page_size(self.catalog.page_size());
        self.status_message = format!("Load failed: {error}");
        self.load_error = Some(error);
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.view.len(), self.catalog.page_size().get())
    }

    /// Display rows for the current page.
    pub fn page_rows<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DisplayRow>
    where
        Tz::Offset: std::fmt::Display,
    {
        render::render_page(&self.articles, &self.view, &self.catalog, tz)
    }

    pub fn page_info(&self) -> PageInfo {
        paginate::page_info(
            self.catalog.page(),
            self.catalog.page_size().get(),
            self.view.len(),
        )
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        paginate::page_controls(self.catalog.page(), self.total_pages())
    }

    /// Total count and newest date over the full list (not the view).
    pub fn footer_stats<Tz: TimeZone>(&self, tz: &Tz) -> FooterStats
    where
        Tz::Offset: std::fmt::Display,
    {
        FooterStats {
            total: self.articles.len(),
            newest: self
                .articles
                .iter()
                .map(|a| a.published_at)
                .max()
                .map(|dt| timestamp::format_date_in(&dt, tz)),
        }
    }

    /// Every article in the current view (all pages), in view order.
    pub fn view_articles(&self) -> Vec<&Article> {
        self.view
            .iter()
            .filter_map(|&idx| self.articles.get(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_article(n: usize, title: &str) -> Article {
        Article {
            id: n.to_string(),
            title: title.to_string(),
            url: format!("https://example.com/{n}"),
            published_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(n as i64),
            account_name: "acct".to_string(),
            is_original: false,
            position: 1,
            source_row_id: n as i64,
        }
    }

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(PageSize::default(), false);
        let articles = (1..=count)
            .map(|n| make_article(n, &format!("Post {n}")))
            .collect();
        state.on_loaded(articles, "test.json".to_string());
        state
    }

    #[test]
    fn test_on_loaded_derives_newest_first_view() {
        let state = loaded(45);
        assert_eq!(state.view().len(), 45);
        assert_eq!(state.total_pages(), 3);
        let first = &state.articles()[state.view()[0]];
        assert_eq!(first.id, "45");
        assert_eq!(state.status_message, "Loaded 45 articles from test.json");
    }

    #[test]
    fn test_search_resets_page_and_filters() {
        let mut state = loaded(45);
        state.go_to_page(3);
        assert_eq!(state.catalog().page(), 3);

        state.search_text = "post 4".to_string();
        state.submit_search();
        assert_eq!(state.catalog().page(), 1);
        // "Post 4" and "Post 40".."Post 45".
        assert_eq!(state.view().len(), 7);

        state.clear_keyword();
        assert!(state.search_text.is_empty());
        assert_eq!(state.view().len(), 45);
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut state = loaded(45);
        state.go_to_page(2);
        state.go_to_page(9);
        state.go_to_page(0);
        assert_eq!(state.catalog().page(), 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = loaded(45);
        state.go_to_page(2);
        state.set_page_size(PageSize::new(10).unwrap());
        assert_eq!(state.catalog().page(), 1);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.page_rows(&Utc).len(), 10);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut state = loaded(3);
        state.toggle_sort(SortField::Date);
        let first = &state.articles()[state.view()[0]];
        assert_eq!(first.id, "1");
    }

    #[test]
    fn test_failed_load_shows_empty_state() {
        let mut state = loaded(5);
        state.begin_load("https://example.com/missing.json");
        assert!(state.loading);
        state.handle_progress(LoadProgress::Failed {
            error: "HTTP status 404".to_string(),
        });
        assert!(!state.loading);
        assert!(state.articles().is_empty());
        assert!(state.view().is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(state.page_controls().is_empty());
        assert_eq!(state.load_error.as_deref(), Some("HTTP status 404"));
        assert!(state.status_message.contains("404"));
    }

    #[test]
    fn test_footer_uses_full_list() {
        let mut state = loaded(3);
        state.search_text = "Post 1".to_string();
        state.submit_search();
        let footer = state.footer_stats(&Utc);
        assert_eq!(footer.total, 3);
        assert_eq!(footer.newest.as_deref(), Some("2025-01-04"));
    }

    #[test]
    fn test_view_articles_spans_all_pages() {
        let mut state = loaded(45);
        state.go_to_page(2);
        assert_eq!(state.view_articles().len(), 45);
        assert_eq!(
            state.page_info(),
            PageInfo {
                first: 21,
                last: 40,
                total: 45
            }
        );
    }
}
