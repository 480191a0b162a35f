//! Canonical query-parameter derivation.
//!
//! The remote listing endpoint and the response cache both key on the
//! literal parameter string, so two logically-identical filter states must
//! serialize byte-identically regardless of how they were reached. Fields
//! are therefore emitted in a fixed order and default-valued fields are
//! omitted entirely.

use crate::models::filters::{JobFilters, OrderBy, OrderDirection, DEFAULT_LIMIT};

/// The minimal string-pair representation of a filter state, ready to
/// become an HTTP GET query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Key/value pairs in canonical order, suitable for
    /// `reqwest::RequestBuilder::query`.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The canonical `k=v&k=v` form. Used verbatim as the cache key; URL
    /// percent-encoding is left to the HTTP layer.
    pub fn as_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl JobFilters {
    /// Derive the minimal canonical parameter set for the current state.
    /// Defaults are never emitted: page 1, limit 20, createdAt/desc
    /// ordering, and blank (after trimming) text fields all stay implicit.
    pub fn query_params(&self) -> QueryParams {
        let mut pairs = Vec::new();

        let location = self.location.trim();
        if !location.is_empty() {
            pairs.push(("location", location.to_string()));
        }
        if let Some(job_type) = self.job_type {
            pairs.push(("jobType", job_type.as_str().to_string()));
        }
        let search = self.search_term.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit != DEFAULT_LIMIT {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.order_by != OrderBy::CreatedAt {
            pairs.push(("orderBy", self.order_by.as_str().to_string()));
        }
        if self.order_direction != OrderDirection::Desc {
            pairs.push(("orderDirection", self.order_direction.as_str().to_string()));
        }

        QueryParams { pairs }
    }
}
