// ArticleShelf - core/render.rs
//
// Turns one page of the derived view into display rows: global row number,
// local date, keyword-highlighted title, link, and originality badge.
// The UI layer only lays these rows out.

use crate::core::catalog::CatalogState;
use crate::core::model::Article;
use crate::core::{paginate, timestamp};
use crate::util::constants;
use chrono::TimeZone;
use regex::{Regex, RegexBuilder};

/// A run of title text, either plain or a keyword match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSegment {
    pub text: String,
    pub highlighted: bool,
}

/// One table row, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based position in the whole filtered view (not just this page).
    pub number: usize,

    /// `YYYY-MM-DD` in the viewer's time zone.
    pub date: String,

    /// Title split around keyword matches.
    pub title: Vec<TitleSegment>,

    /// Link opened when the title is clicked.
    pub url: String,

    /// Whether to show the "original" badge.
    pub is_original: bool,
}

/// Case-insensitive literal matcher for the active keyword.
///
/// The keyword is regex-escaped before compiling, so characters such as
/// `+`, `(` or `.` match themselves.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(keyword: &str) -> Self {
        if keyword.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(re) => Self { pattern: Some(re) },
            Err(e) => {
                // Only reachable for keywords exceeding the regex size limit.
                tracing::warn!(error = %e, "Keyword too large to highlight");
                Self { pattern: None }
            }
        }
    }

    /// Split `text` into plain and highlighted runs. Empty runs are omitted.
    pub fn segments(&self, text: &str) -> Vec<TitleSegment> {
        let Some(ref re) = self.pattern else {
            return vec![TitleSegment {
                text: text.to_string(),
                highlighted: false,
            }];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in re.find_iter(text) {
            if m.start() > last {
                segments.push(TitleSegment {
                    text: text[last..m.start()].to_string(),
                    highlighted: false,
                });
            }
            segments.push(TitleSegment {
                text: m.as_str().to_string(),
                highlighted: true,
            });
            last = m.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(TitleSegment {
                text: text[last..].to_string(),
                highlighted: false,
            });
        }
        segments
    }

    /// Wrap every match in `<mark>`/`</mark>`, preserving the original case.
    pub fn markup(&self, text: &str) -> String {
        match self.pattern {
            Some(ref re) => re
                .replace_all(text, |caps: &regex::Captures<'_>| {
                    format!(
                        "{}{}{}",
                        constants::HIGHLIGHT_OPEN,
                        &caps[0],
                        constants::HIGHLIGHT_CLOSE
                    )
                })
                .into_owned(),
            None => text.to_string(),
        }
    }
}

/// Build the display rows for the current page of `view`.
///
/// `view` holds indices into `articles` as produced by `derive_view`; `tz`
/// is the viewer's time zone for the date column.
pub fn render_page<Tz: TimeZone>(
    articles: &[Article],
    view: &[usize],
    state: &CatalogState,
    tz: &Tz,
) -> Vec<DisplayRow>
where
    Tz::Offset: std::fmt::Display,
{
    let range = paginate::page_range(state.page(), state.page_size().get(), view.len());
    let highlighter = Highlighter::new(state.keyword());

    range
        .filter_map(|pos| {
            let article = articles.get(*view.get(pos)?)?;
            Some(DisplayRow {
                number: pos + 1,
                date: timestamp::format_date_in(&article.published_at, tz),
                title: highlighter.segments(&article.title),
                url: article.url.clone(),
                is_original: article.is_original,
            })
        })
        .collect()
}
