// ArticleShelf - core/url_norm.rs
//
// Article link normalisation used for duplicate-URL bookkeeping.
// The normalised form is never stored on an article.

use crate::util::constants;
use url::{form_urlencoded, Url};

/// Normalise an article link.
///
/// For links on the article-hosting domain, only the whitelisted query
/// parameters survive, in whitelist order, and the fragment is dropped.
/// Every other link, and anything that does not parse as a URL, is returned
/// unchanged.
pub fn normalise_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let on_article_host = parsed
        .host_str()
        .is_some_and(|host| host.contains(constants::NORMALISED_URL_HOST));
    if !on_article_host {
        return raw.to_string();
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for key in constants::NORMALISED_URL_PARAMS {
        if let Some((_, value)) = parsed.query_pairs().find(|(k, _)| k.as_ref() == *key) {
            query.append_pair(key, &value);
        }
    }

    format!(
        "{}{}?{}",
        parsed.origin().ascii_serialization(),
        parsed.path(),
        query.finish()
    )
}
