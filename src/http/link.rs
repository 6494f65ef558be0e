//! Pagination — `Link` header parsing and page containers.

use reqwest::header::{HeaderMap, LINK};

// ─── NextPage ────────────────────────────────────────────────────────────────

/// Opaque continuation URL advertised by a paginated list response.
///
/// Pass it back to the matching `list_url` method to fetch the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPage(String);

impl NextPage {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NextPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NextPage {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NextPage {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of a list endpoint: the decoded items plus the continuation
/// link, when the server indicated more pages exist.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<NextPage>,
}

// ─── Link header parsing ─────────────────────────────────────────────────────

/// Extract the next-page URL from a raw `Link` header value.
///
/// The expected format is exactly `<URL>;rel='next'`, anchored at both
/// ends. Anything else — another `rel`, a malformed value — means "no
/// next page". The URL substring is returned unmodified.
pub fn next_url(value: &str) -> Option<&str> {
    let url = value.strip_prefix('<')?.strip_suffix(">;rel='next'")?;
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

/// Parse the first value of the (possibly multi-valued) `Link` header.
/// Absent or non-UTF-8 headers count as "no next page".
pub fn next_from_headers(headers: &HeaderMap) -> Option<NextPage> {
    let value = headers.get(LINK)?.to_str().ok()?;
    next_url(value).map(NextPage::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn extracts_next_url() {
        assert_eq!(
            next_url("<https://api.example.com/next?p=2>;rel='next'"),
            Some("https://api.example.com/next?p=2")
        );
    }

    #[test]
    fn other_rel_is_no_next_page() {
        assert_eq!(next_url("<https://x>;rel='prev'"), None);
    }

    #[test]
    fn malformed_values_are_no_next_page() {
        assert_eq!(next_url(""), None);
        assert_eq!(next_url("<>;rel='next'"), None);
        assert_eq!(next_url("https://x;rel='next'"), None);
        assert_eq!(next_url("<https://x>;rel=\"next\""), None);
        assert_eq!(next_url("x<https://x>;rel='next'"), None);
    }

    #[test]
    fn url_is_returned_unmodified() {
        let url = next_url("<https://x/a b?q=%20>;rel='next'").unwrap();
        assert_eq!(url, "https://x/a b?q=%20");
    }

    #[test]
    fn reads_first_header_value_only() {
        let mut headers = HeaderMap::new();
        headers.append(LINK, HeaderValue::from_static("<https://x/p2>;rel='next'"));
        headers.append(LINK, HeaderValue::from_static("<https://x/p9>;rel='next'"));
        assert_eq!(
            next_from_headers(&headers),
            Some(NextPage::from("https://x/p2"))
        );
    }

    #[test]
    fn absent_header_is_no_next_page() {
        assert_eq!(next_from_headers(&HeaderMap::new()), None);
    }
}
