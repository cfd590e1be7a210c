//! Link-header pagination.
//!
//! GitHub paginates list endpoints and advertises the page structure in the
//! `Link` response header. [`page_count`] is a pure function over that
//! header; [`Pages`] wraps it into a lazy, finite page sequence that issues
//! exactly one request per pull.

use serde_json::Value;

use crate::GithubClient;
use crate::error::GithubError;

/// One parsed page of an API response.
#[derive(Debug, Clone)]
pub struct JsonPage {
    pub json: Value,
    /// Total pages advertised by the response; 0 for an empty body.
    pub page_count: usize,
    /// Whether result pages remain past the first.
    pub additional_pages: bool,
}

/// Resolve the total page count from a `Link` header value.
///
/// Finds the entry whose relation is `last` and returns its `page` query
/// parameter. A missing header, a missing `last` relation, or a malformed
/// entry all resolve to a single page; this never fails.
#[must_use]
pub fn page_count(link_header: Option<&str>) -> usize {
    let Some(header) = link_header else { return 1 };
    header.split(',').find_map(last_relation_page).unwrap_or(1)
}

/// `<url>; rel="last"` ⇒ the url's `page` query parameter.
fn last_relation_page(entry: &str) -> Option<usize> {
    let (url, relations) = entry.split_once(';')?;
    if !relations
        .split(';')
        .any(|relation| relation.trim() == r#"rel="last""#)
    {
        return None;
    }
    let url = url.trim().strip_prefix('<')?.strip_suffix('>')?;
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "page" { value.parse().ok() } else { None }
    })
}

/// Whether a JSON body counts as empty: no error occurred, but the endpoint
/// had nothing to return.
pub(crate) fn json_is_empty(json: &Value) -> bool {
    match json {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

// ── Pages ──────────────────────────────────────────────────────────

/// Lazy sequence of pages over a paginated listing URL.
///
/// Finite and not restartable: each [`Pages::try_next`] pull issues exactly
/// one request, and the total is fixed by the first response's `Link`
/// header.
pub struct Pages<'a> {
    client: &'a GithubClient,
    base_url: String,
    next_page: usize,
    total: Option<usize>,
}

impl GithubClient {
    /// Start a lazy page sequence over `url`.
    #[must_use]
    pub fn pages(&self, url: &str) -> Pages<'_> {
        Pages {
            client: self,
            base_url: url.to_string(),
            next_page: 1,
            total: None,
        }
    }
}

impl Pages<'_> {
    /// Pull the next page, or `Ok(None)` once the sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any transport or parse failure from the underlying
    /// request.
    pub async fn try_next(&mut self) -> Result<Option<JsonPage>, GithubError> {
        if self.total.is_some_and(|total| self.next_page > total) {
            return Ok(None);
        }

        let url = self.page_url();
        let page = self.client.api_json(&url).await?;
        if page.page_count == 0 {
            self.total = Some(0);
            return Ok(None);
        }

        self.total.get_or_insert(page.page_count);
        self.next_page += 1;
        Ok(Some(page))
    }

    fn page_url(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}page={}&per_page=100",
            self.base_url, separator, self.next_page
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{json_is_empty, page_count};

    const GITHUB_STYLE_HEADER: &str = concat!(
        "<https://api.github.com/repositories/1/issues?page=2>; rel=\"next\", ",
        "<https://api.github.com/repositories/1/issues?page=14>; rel=\"last\""
    );

    #[test]
    fn resolves_the_last_relation_page_number() {
        assert_eq!(page_count(Some(GITHUB_STYLE_HEADER)), 14);
    }

    #[rstest]
    #[case::no_header(None, 1)]
    #[case::no_last_relation(
        Some("<https://api.github.com/repositories/1/issues?page=2>; rel=\"next\""),
        1
    )]
    #[case::empty_header(Some(""), 1)]
    #[case::garbage(Some("complete nonsense"), 1)]
    #[case::last_without_page_param(
        Some("<https://api.github.com/repositories/1/issues?per_page=100>; rel=\"last\""),
        1
    )]
    #[case::non_numeric_page(
        Some("<https://api.github.com/repositories/1/issues?page=abc>; rel=\"last\""),
        1
    )]
    fn malformed_or_single_page_headers_resolve_to_one(
        #[case] header: Option<&str>,
        #[case] expected: usize,
    ) {
        assert_eq!(page_count(header), expected);
    }

    #[test]
    fn last_relation_survives_extra_parameters_and_ordering() {
        let header = concat!(
            "<https://api.github.com/x?per_page=100&page=7>; rel=\"last\", ",
            "<https://api.github.com/x?per_page=100&page=2>; rel=\"next\""
        );
        assert_eq!(page_count(Some(header)), 7);
    }

    #[rstest]
    #[case::null(serde_json::json!(null), true)]
    #[case::empty_array(serde_json::json!([]), true)]
    #[case::empty_object(serde_json::json!({}), true)]
    #[case::empty_string(serde_json::json!(""), true)]
    #[case::populated_array(serde_json::json!([1]), false)]
    #[case::populated_object(serde_json::json!({"artifacts": []}), false)]
    fn empty_body_detection(#[case] json: serde_json::Value, #[case] expected: bool) {
        assert_eq!(json_is_empty(&json), expected);
    }
}
