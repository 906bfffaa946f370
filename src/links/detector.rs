use std::sync::LazyLock;

use regex::Regex;

use super::classifier::classify_url;
use super::types::UrlInfo;

/// `http(s)://`, a host run, then an optional path restricted to a safe set.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[\w.-]+(?:/[\w./?%&=+#@-]*)?").expect("valid url pattern")
});

/// Find every URL embedded in `text` and classify each, in order of
/// appearance. One output element per occurrence; no deduplication.
#[must_use]
pub fn extract_and_classify_urls(text: &str) -> Vec<UrlInfo> {
    let infos: Vec<UrlInfo> = URL_PATTERN
        .find_iter(text)
        .map(|m| classify_url(m.as_str()))
        .collect();
    if !infos.is_empty() {
        tracing::debug!(count = infos.len(), "extracted urls from text");
    }
    infos
}
