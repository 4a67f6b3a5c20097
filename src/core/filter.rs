// ArticleShelf - core/filter.rs
//
// Keyword filter for the article catalog.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Article;

/// Apply a keyword filter to the full article list, returning indices of
/// matching articles in their original order.
///
/// Matching is a case-insensitive substring test against the title only.
/// An empty keyword matches everything. The result is always computed from
/// the full list, never narrowed from a previous result.
pub fn apply_keyword_filter(articles: &[Article], keyword: &str) -> Vec<usize> {
    if keyword.is_empty() {
        return (0..articles.len()).collect();
    }

    let keyword_lower = keyword.to_lowercase();

    articles
        .iter()
        .enumerate()
        .filter(|(_, article)| matches_keyword(article, &keyword_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check one article against an already-lowercased keyword.
fn matches_keyword(article: &Article, keyword_lower: &str) -> bool {
    article.title.to_lowercase().contains(keyword_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_article(title: &str, account: &str) -> Article {
        Article {
            id: "1".to_string(),
            title: title.to_string(),
            url: String::new(),
            published_at: Utc.timestamp_opt(0, 0).unwrap(),
            account_name: account.to_string(),
            is_original: false,
            position: 1,
            source_row_id: 1,
        }
    }

    #[test]
    fn test_empty_keyword_returns_all() {
        let articles = vec![make_article("One", "a"), make_article("Two", "a")];
        assert_eq!(apply_keyword_filter(&articles, ""), vec![0, 1]);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let articles = vec![
            make_article("Google SEO guide", "a"),
            make_article("Indie hacking", "a"),
            make_article("why seo still matters", "a"),
        ];
        assert_eq!(apply_keyword_filter(&articles, "SEO"), vec![0, 2]);
    }

    #[test]
    fn test_keyword_matches_chinese_substrings() {
        let articles = vec![
            make_article("如何做独立开发", "a"),
            make_article("出海赚美元", "a"),
        ];
        assert_eq!(apply_keyword_filter(&articles, "独立"), vec![0]);
    }

    #[test]
    fn test_only_title_is_searched() {
        let articles = vec![make_article("Unrelated", "SEO Weekly")];
        assert!(apply_keyword_filter(&articles, "seo").is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let articles = vec![make_article("C++ (part 1)", "a"), make_article("Cpp", "a")];
        assert_eq!(apply_keyword_filter(&articles, "c++ ("), vec![0]);
    }
}
