// ArticleShelf - core/catalog.rs
//
// Catalog session state as an immutable snapshot, plus the pure function
// that derives the filtered/sorted view from it.
//
// Every user action maps to a method returning a new `CatalogState`.
// Keyword, sort, and page-size changes reset the page to 1; navigation
// outside [1, total_pages] returns an unchanged snapshot.

use crate::core::collate;
use crate::core::filter;
use crate::core::model::{Article, PageSize, SortDirection, SortField};
use crate::core::paginate;

/// One immutable snapshot of the catalog's user-controlled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    keyword: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
    page_size: PageSize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl CatalogState {
    /// Initial state: no keyword, newest first, page 1.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            keyword: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// New search. The keyword is trimmed; the page resets to 1.
    pub fn with_keyword(&self, keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Drop the keyword; the page resets to 1.
    pub fn cleared_keyword(&self) -> Self {
        self.with_keyword("")
    }

    /// Select a sort column.
    ///
    /// Selecting the active column flips its direction; selecting the other
    /// column switches to it, descending. The page resets to 1.
    pub fn toggle_sort(&self, field: SortField) -> Self {
        let sort_direction = if field == self.sort_field {
            self.sort_direction.flipped()
        } else {
            SortDirection::Descending
        };
        Self {
            sort_field: field,
            sort_direction,
            page: 1,
            ..self.clone()
        }
    }

    /// Change the page size; the page resets to 1.
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }

    /// Navigate to `page` given `total_items` rows in the current view.
    ///
    /// Out-of-range requests (including page 0, or any page when the view is
    /// empty) return the snapshot unchanged.
    pub fn go_to_page(&self, page: usize, total_items: usize) -> Self {
        let total_pages = paginate::total_pages(total_items, self.page_size.get());
        if page < 1 || page > total_pages {
            tracing::trace!(page, total_pages, "Ignoring out-of-range page request");
            return self.clone();
        }
        Self {
            page,
            ..self.clone()
        }
    }

    /// True when `other` would produce a different filtered/sorted view.
    ///
    /// Page and page-size changes only re-slice the existing view.
    pub fn view_differs(&self, other: &CatalogState) -> bool {
        self.keyword != other.keyword
            || self.sort_field != other.sort_field
            || self.sort_direction != other.sort_direction
    }
}

/// Derive the filtered and sorted view for `state`.
///
/// Returns indices into `articles`. The full list is never modified.
pub fn derive_view(articles: &[Article], state: &CatalogState) -> Vec<usize> {
    let mut indices = filter::apply_keyword_filter(articles, state.keyword());
    sort_indices(articles, &mut indices, state.sort_field(), state.sort_direction());
    indices
}

/// Stable sort of `indices` by the given column and direction.
///
/// Descending order negates the comparison rather than reversing the list,
/// so articles that compare equal keep their relative order either way.
pub fn sort_indices(
    articles: &[Article],
    indices: &mut [usize],
    field: SortField,
    direction: SortDirection,
) {
    indices.sort_by(|&a, &b| {
        let (a, b) = (&articles[a], &articles[b]);
        let ordering = match field {
            SortField::Date => a.published_at.cmp(&b.published_at),
            SortField::Title => collate::compare_titles(&a.title, &b.title),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
