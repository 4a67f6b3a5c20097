// ArticleShelf - core/collate.rs
//
// Locale-aware title comparison for mixed Chinese/English headlines.
//
// The collator is built lazily once per thread (ICU data payloads are not
// Sync). If the locale data cannot be loaded, comparison degrades to plain
// code-point order and a warning is logged once.

use crate::util::constants;
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use std::cmp::Ordering;

thread_local! {
    static TITLE_COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let locale: Locale = match constants::TITLE_COLLATION_LOCALE.parse() {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(error = ?e, "Invalid collation locale; using code-point order");
            return None;
        }
    };
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&locale.into(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = ?e, "Title collator unavailable; using code-point order");
            None
        }
    }
}

/// Compare two titles the way a zh-CN reader expects them ordered.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => a.cmp(b),
    })
}
