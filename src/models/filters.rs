use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Employment type of a listing. Wire labels are the human-facing forms
/// (`"Full-Time"`), not internal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    /// The label emitted in query parameters and accepted back by the parser.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-Time",
            JobType::PartTime => "Part-Time",
            JobType::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-Time" => Ok(JobType::FullTime),
            "Part-Time" => Ok(JobType::PartTime),
            "Contract" => Ok(JobType::Contract),
            other => Err(FilterParseError::UnknownJobType(other.to_string())),
        }
    }
}

/// Sort key for job listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderBy {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "company")]
    Company,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::CreatedAt => "createdAt",
            OrderBy::UpdatedAt => "updatedAt",
            OrderBy::Title => "title",
            OrderBy::Company => "company",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(OrderBy::CreatedAt),
            "updatedAt" => Ok(OrderBy::UpdatedAt),
            "title" => Ok(OrderBy::Title),
            "company" => Ok(OrderBy::Company),
            other => Err(FilterParseError::UnknownOrderBy(other.to_string())),
        }
    }
}

/// Sort direction for job listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDirection {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            other => Err(FilterParseError::UnknownOrderDirection(other.to_string())),
        }
    }
}

/// The complete filter/sort/pagination criteria for a job listing view.
///
/// Replaced as a whole on every store mutation; no caller mutates fields
/// directly. `page` is kept ≥ 1 by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    pub location: String,
    pub job_type: Option<JobType>,
    pub search_term: String,
    pub page: u32,
    pub limit: u32,
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
}

/// Default page size; the `limit` parameter is omitted at this value.
pub const DEFAULT_LIMIT: u32 = 20;

impl Default for JobFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            job_type: None,
            search_term: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
            order_by: OrderBy::CreatedAt,
            order_direction: OrderDirection::Desc,
        }
    }
}

impl JobFilters {
    /// Number of criteria narrowing the result set. Whitespace-only text
    /// fields do not count; page, limit and ordering never count.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.location.trim().is_empty() {
            count += 1;
        }
        if self.job_type.is_some() {
            count += 1;
        }
        if !self.search_term.trim().is_empty() {
            count += 1;
        }
        count
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Parse externally-sourced key/value pairs (typically URL query
    /// parameters) into a `JobFilters`, validating enum labels and integer
    /// ranges. Unknown keys are ignored. This is the only place untyped
    /// strings cross into the filter state.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, FilterParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = JobFilters::default();
        for (key, value) in pairs {
            match key {
                "location" => filters.location = value.to_string(),
                "jobType" => filters.job_type = Some(value.parse()?),
                "search" => filters.search_term = value.to_string(),
                "page" => {
                    let page: u32 = value
                        .parse()
                        .map_err(|_| FilterParseError::InvalidPage(value.to_string()))?;
                    if page == 0 {
                        return Err(FilterParseError::InvalidPage(value.to_string()));
                    }
                    filters.page = page;
                }
                "limit" => {
                    let limit: u32 = value
                        .parse()
                        .map_err(|_| FilterParseError::InvalidLimit(value.to_string()))?;
                    if limit == 0 {
                        return Err(FilterParseError::InvalidLimit(value.to_string()));
                    }
                    filters.limit = limit;
                }
                "orderBy" => filters.order_by = value.parse()?,
                "orderDirection" => filters.order_direction = value.parse()?,
                _ => {}
            }
        }
        Ok(filters)
    }
}

/// Server-reported pagination metadata for the current filter set. Derived,
/// never authoritative; any filter change invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total_jobs: u64,
    pub has_more: bool,
}

// ── DTOs ──

/// Shallow-merge patch for `JobFilterStore::set_filters`. Fields left `None`
/// keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilterPatch {
    pub location: Option<String>,
    pub job_type: Option<Option<JobType>>,
    pub search_term: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<OrderBy>,
    pub order_direction: Option<OrderDirection>,
}

impl From<JobFilters> for JobFilterPatch {
    fn from(f: JobFilters) -> Self {
        Self {
            location: Some(f.location),
            job_type: Some(f.job_type),
            search_term: Some(f.search_term),
            page: Some(f.page),
            limit: Some(f.limit),
            order_by: Some(f.order_by),
            order_direction: Some(f.order_direction),
        }
    }
}

/// A single-field filter mutation, the typed form of "update one filter".
/// Every variant except `Page` invalidates pagination context.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Location(String),
    JobType(Option<JobType>),
    SearchTerm(String),
    Page(u32),
    Limit(u32),
    OrderBy(OrderBy),
    OrderDirection(OrderDirection),
}

/// Errors from parsing untyped filter input at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("unknown job type: {0}")]
    UnknownJobType(String),
    #[error("unknown order-by field: {0}")]
    UnknownOrderBy(String),
    #[error("unknown order direction: {0}")]
    UnknownOrderDirection(String),
    #[error("page must be a positive integer, got {0}")]
    InvalidPage(String),
    #[error("limit must be a positive integer, got {0}")]
    InvalidLimit(String),
}
