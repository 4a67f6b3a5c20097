// ArticleShelf - core/paginate.rs
//
// Page arithmetic and the pagination-bar model.
// Core layer: pure logic, no UI dependencies.

use crate::util::constants;
use std::ops::Range;

/// Number of pages needed for `count` rows (0 when there are no rows).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Half-open range of view positions shown on 1-based `page`.
///
/// Clamped to `count`, so a page past the end yields an empty range.
pub fn page_range(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// "Showing start-end of total" figures for the pagination footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based position of the first row on the page (0 when empty).
    pub first: usize,
    /// 1-based position of the last row on the page (0 when empty).
    pub last: usize,
    /// Rows in the whole filtered view.
    pub total: usize,
}

pub fn page_info(page: usize, page_size: usize, count: usize) -> PageInfo {
    let range = page_range(page, page_size, count);
    if range.is_empty() {
        return PageInfo {
            first: 0,
            last: 0,
            total: count,
        };
    }
    PageInfo {
        first: range.start + 1,
        last: range.end,
        total: count,
    }
}

/// One element of the pagination bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// "Previous" button; disabled on the first page.
    Previous { target: usize, enabled: bool },
    /// A numbered page button.
    Page { number: usize, active: bool },
    /// Gap marker between a boundary shortcut and the window.
    Ellipsis,
    /// "Next" button; disabled on the last page.
    Next { target: usize, enabled: bool },
}

/// Build the pagination bar for `current` out of `total_pages`.
///
/// Shows a window of at most `MAX_VISIBLE_PAGES` contiguous numbers centred
/// on the current page where possible, plus shortcuts to the first and last
/// page with an ellipsis when they are not adjacent to the window. Returns
/// an empty bar when there is at most one page.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let max_visible = constants::MAX_VISIBLE_PAGES;
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut controls = Vec::with_capacity(max_visible + 6);
    controls.push(PageControl::Previous {
        target: current.saturating_sub(1),
        enabled: current > 1,
    });

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current,
        });
    }

    if end < total_pages {
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total_pages,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        target: current + 1,
        enabled: current < total_pages,
    });

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact rendering of a bar: "<", ">", "..." and page numbers,
    /// with the active page in brackets and disabled arrows in lowercase x.
    fn sketch(controls: &[PageControl]) -> String {
        controls
            .iter()
            .map(|c| match *c {
                PageControl::Previous { enabled, .. } => {
                    if enabled { "<".to_string() } else { "x<".to_string() }
                }
                PageControl::Next { enabled, .. } => {
                    if enabled { ">".to_string() } else { "x>".to_string() }
                }
                PageControl::Ellipsis => "...".to_string(),
                PageControl::Page { number, active } => {
                    if active { format!("[{number}]") } else { number.to_string() }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_range_last_page_is_partial() {
        assert_eq!(page_range(1, 20, 45), 0..20);
        assert_eq!(page_range(3, 20, 45), 40..45);
        assert_eq!(page_range(4, 20, 45), 45..45);
    }

    #[test]
    fn test_page_info() {
        assert_eq!(
            page_info(3, 20, 45),
            PageInfo {
                first: 41,
                last: 45,
                total: 45
            }
        );
        assert_eq!(
            page_info(1, 20, 0),
            PageInfo {
                first: 0,
                last: 0,
                total: 0
            }
        );
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(page_controls(1, 1).is_empty());
        assert!(page_controls(1, 0).is_empty());
    }

    #[test]
    fn test_small_page_count_shows_every_page() {
        assert_eq!(sketch(&page_controls(1, 3)), "x< [1] 2 3 >");
        assert_eq!(sketch(&page_controls(3, 3)), "< 1 2 [3] x>");
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(sketch(&page_controls(1, 10)), "x< [1] 2 3 4 5 ... 10 >");
        assert_eq!(sketch(&page_controls(3, 10)), "< 1 2 [3] 4 5 ... 10 >");
        assert_eq!(sketch(&page_controls(4, 10)), "< 1 2 3 [4] 5 6 ... 10 >");
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(sketch(&page_controls(6, 12)), "< 1 ... 4 5 [6] 7 8 ... 12 >");
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(sketch(&page_controls(10, 10)), "< 1 ... 6 7 8 9 [10] x>");
        assert_eq!(sketch(&page_controls(8, 10)), "< 1 ... 6 7 [8] 9 10 >");
        assert_eq!(sketch(&page_controls(7, 10)), "< 1 ... 5 6 [7] 8 9 10 >");
    }

    #[test]
    fn test_no_ellipsis_when_shortcut_is_adjacent() {
        assert_eq!(sketch(&page_controls(4, 7)), "< 1 2 3 [4] 5 6 7 >");
        // Only page 2 is hidden here, but the gap is still marked.
        assert_eq!(sketch(&page_controls(5, 7)), "< 1 ... 3 4 [5] 6 7 >");
    }

    #[test]
    fn test_navigation_targets() {
        let controls = page_controls(2, 3);
        assert_eq!(
            controls.first(),
            Some(&PageControl::Previous {
                target: 1,
                enabled: true
            })
        );
        assert_eq!(
            controls.last(),
            Some(&PageControl::Next {
                target: 3,
                enabled: true
            })
        );
    }
}
