use moka::future::Cache;
use std::time::Duration;

use crate::models::jobs::{Job, JobListResponse};

/// In-process response cache for the job-board API.
///
/// Listings are keyed on the canonical query string, which is why the
/// query-parameter derivation must be byte-stable for identical filter
/// states. Single jobs are cached separately with a longer TTL.
#[derive(Clone)]
pub struct ListingCache {
    listings: Cache<String, JobListResponse>,
    jobs: Cache<String, Job>,
}

impl ListingCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            listings: Cache::builder()
                .time_to_live(config.job_list_ttl)
                .max_capacity(config.max_entries)
                .build(),
            jobs: Cache::builder()
                .time_to_live(config.job_ttl)
                .max_capacity(config.max_entries)
                .build(),
        }
    }

    pub async fn get_listing(&self, key: &str) -> Option<JobListResponse> {
        self.listings.get(key).await
    }

    pub async fn insert_listing(&self, key: String, response: JobListResponse) {
        self.listings.insert(key, response).await;
    }

    pub async fn get_job(&self, key: &str) -> Option<Job> {
        self.jobs.get(key).await
    }

    pub async fn insert_job(&self, key: String, job: Job) {
        self.jobs.insert(key, job).await;
    }

    /// Drop every cached listing page. Called after a posting is created,
    /// updated or deleted, since any page may now be stale.
    pub fn invalidate_listings(&self) {
        self.listings.invalidate_all();
    }

    pub async fn invalidate_job(&self, key: &str) {
        self.jobs.invalidate(key).await;
    }
}

/// Cache key generators
pub mod keys {
    /// Key for a listing page, from the canonical query string.
    pub fn job_list(query: &str) -> String {
        format!("jobs:list:{query}")
    }

    /// Key for a single job.
    pub fn job(id: &str) -> String {
        format!("job:{id}")
    }
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub job_list_ttl: Duration,
    pub job_ttl: Duration,
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            job_list_ttl: Duration::from_secs(300), // 5 minutes
            job_ttl: Duration::from_secs(600),      // 10 minutes
            max_entries: 1024,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            job_list_ttl: parse_duration_secs("CACHE_TTL_JOBS", 300),
            job_ttl: parse_duration_secs("CACHE_TTL_JOB_DETAIL", 600),
            max_entries: std::env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}
