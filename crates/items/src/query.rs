//! Query resolution: raw request parameters into a clamped [`ListQuery`].
//!
//! Resolution never fails. Missing or malformed values fall back to defaults.

use catalog_core::parse_leading_int;

/// Page size used when `limit` is missing, unparseable or zero.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query-string parameters exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListParams {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub q: Option<String>,
}

impl RawListParams {
    /// Build from decoded query pairs. The first occurrence of a key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut raw.limit,
                "page" => &mut raw.page,
                "q" => &mut raw.q,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

/// A validated listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive name filter; empty means no filtering.
    pub filter_text: String,
    /// Requested page, 1-based (clamped again by the listing engine).
    pub page: usize,
    /// Page size, at least 1.
    pub per_page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Turns [`RawListParams`] into a [`ListQuery`].
///
/// `limit` has no upper bound unless one is configured with
/// [`QueryResolver::with_max_page_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryResolver {
    max_page_size: Option<usize>,
}

impl QueryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_page_size(max_page_size: Option<usize>) -> Self {
        Self {
            max_page_size: max_page_size.map(|m| m.max(1)),
        }
    }

    pub fn max_page_size(&self) -> Option<usize> {
        self.max_page_size
    }

    pub fn resolve(&self, raw: &RawListParams) -> ListQuery {
        let per_page = positive_or(raw.limit.as_deref(), DEFAULT_PAGE_SIZE);
        let per_page = match self.max_page_size {
            Some(max) => per_page.min(max),
            None => per_page,
        };

        let page = match raw.page.as_deref() {
            None | Some("") => 1,
            Some(p) => positive_or(Some(p), 1),
        };

        let filter_text = raw.q.clone().unwrap_or_default();

        tracing::debug!(per_page, page, filter = %filter_text, "resolved list query");

        ListQuery {
            filter_text,
            page,
            per_page,
        }
    }
}

/// Leading integer of `raw`, with `default` for missing/unparseable/zero input,
/// floored at 1.
fn positive_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(parse_leading_int) {
        None | Some(0) => default,
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(limit: Option<&str>, page: Option<&str>, q: Option<&str>) -> RawListParams {
        RawListParams {
            limit: limit.map(str::to_string),
            page: page.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    #[test]
    fn missing_parameters_use_defaults() {
        let q = QueryResolver::new().resolve(&RawListParams::default());
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.per_page, 10);
        assert_eq!(q.page, 1);
        assert!(q.filter_text.is_empty());
    }

    #[test]
    fn malformed_limit_falls_back_to_default() {
        let resolver = QueryResolver::new();
        assert_eq!(resolver.resolve(&raw(Some("abc"), None, None)).per_page, 10);
        assert_eq!(resolver.resolve(&raw(Some(""), None, None)).per_page, 10);
        assert_eq!(resolver.resolve(&raw(Some("0"), None, None)).per_page, 10);
    }

    #[test]
    fn negative_values_are_floored_at_one() {
        let q = QueryResolver::new().resolve(&raw(Some("-5"), Some("-2"), None));
        assert_eq!(q.per_page, 1);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn numeric_prefixes_are_accepted() {
        let q = QueryResolver::new().resolve(&raw(Some("25items"), Some("3.9"), None));
        assert_eq!(q.per_page, 25);
        assert_eq!(q.page, 3);
    }

    #[test]
    fn malformed_page_falls_back_to_first_page() {
        let resolver = QueryResolver::new();
        assert_eq!(resolver.resolve(&raw(None, Some("last"), None)).page, 1);
        assert_eq!(resolver.resolve(&raw(None, Some(""), None)).page, 1);
        assert_eq!(resolver.resolve(&raw(None, Some("0"), None)).page, 1);
    }

    #[test]
    fn limit_is_unbounded_by_default() {
        let q = QueryResolver::new().resolve(&raw(Some("100000"), None, None));
        assert_eq!(q.per_page, 100_000);
    }

    #[test]
    fn configured_cap_bounds_limit() {
        let resolver = QueryResolver::with_max_page_size(Some(100));
        assert_eq!(resolver.resolve(&raw(Some("100000"), None, None)).per_page, 100);
        assert_eq!(resolver.resolve(&raw(Some("20"), None, None)).per_page, 20);
        assert_eq!(resolver.resolve(&raw(None, None, None)).per_page, 10);
    }

    #[test]
    fn filter_text_is_kept_verbatim() {
        let q = QueryResolver::new().resolve(&raw(None, None, Some("WiD")));
        assert_eq!(q.filter_text, "WiD");
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let params = RawListParams::from_pairs([
            ("page", "2"),
            ("utm", "x"),
            ("page", "9"),
            ("q", "lamp"),
        ]);
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.q.as_deref(), Some("lamp"));
        assert_eq!(params.limit, None);
    }
}
