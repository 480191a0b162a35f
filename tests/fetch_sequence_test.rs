///! Tests for the fetch-sequence contract between the store, the listing
///! cache and the HTTP client. The error path uses an unroutable address
///! so no server is needed; the happy path is covered through the cache,
///! which short-circuits the network entirely.
///!
///! Run with: `cargo test --test fetch_sequence_test`
use chrono::Utc;
use uuid::Uuid;

use jobboard_client::cache::{keys, CacheConfig, ListingCache};
use jobboard_client::models::filters::{FilterChange, JobType};
use jobboard_client::models::jobs::{Job, JobListResponse};
use jobboard_client::{fetch_job, refresh, JobFilterStore, JobsClient};

fn sample_job(title: &str) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        description: "Write software".to_string(),
        salary_range: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn refresh_serves_cached_listings_and_records_metadata() {
    let mut store = JobFilterStore::new();
    store.apply(FilterChange::SearchTerm("developer".to_string()));

    let cache = ListingCache::new(&CacheConfig::default());
    let response = JobListResponse {
        jobs: vec![sample_job("Backend Developer"), sample_job("Frontend Developer")],
        total_jobs: 2,
        has_more: false,
    };
    let key = keys::job_list(&store.query_params().as_query_string());
    cache.insert_listing(key, response.clone()).await;

    // The base URL is never contacted; the cache satisfies the request.
    let client = JobsClient::new("http://192.0.2.1");
    let jobs = refresh(&mut store, &client, &cache).await.unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(store.pagination().total_jobs, 2);
    assert!(!store.pagination().has_more);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn refresh_clears_loading_and_keeps_metadata_reset_on_error() {
    let mut store = JobFilterStore::new();
    store.apply(FilterChange::Location("Berlin".to_string()));

    let cache = ListingCache::new(&CacheConfig::default());
    // Unroutable port on localhost: the request fails fast.
    let client = JobsClient::new("http://127.0.0.1:1");

    let result = refresh(&mut store, &client, &cache).await;

    assert!(result.is_err());
    assert!(!store.is_loading());
    assert_eq!(store.pagination().total_jobs, 0);
    assert!(!store.pagination().has_more);
}

#[tokio::test]
async fn cache_key_tracks_the_canonical_query_string() {
    let mut store = JobFilterStore::new();
    store.apply(FilterChange::JobType(Some(JobType::Contract)));
    let filtered_key = keys::job_list(&store.query_params().as_query_string());
    assert_eq!(filtered_key, "jobs:list:jobType=Contract");

    store.clear_filters();
    let default_key = keys::job_list(&store.query_params().as_query_string());
    assert_eq!(default_key, "jobs:list:");
    assert_ne!(filtered_key, default_key);
}

#[tokio::test]
async fn fetch_job_serves_cached_details() {
    let cache = ListingCache::new(&CacheConfig::default());
    let job = sample_job("Platform Engineer");
    cache
        .insert_job(keys::job(&job.id.to_string()), job.clone())
        .await;

    let client = JobsClient::new("http://192.0.2.1");
    let fetched = fetch_job(&client, &cache, job.id).await.unwrap();
    assert_eq!(fetched, job);

    cache.invalidate_job(&keys::job(&job.id.to_string())).await;
    assert!(cache.get_job(&keys::job(&job.id.to_string())).await.is_none());
}

#[tokio::test]
async fn invalidating_listings_drops_cached_pages() {
    let cache = ListingCache::new(&CacheConfig::default());
    let response = JobListResponse {
        jobs: vec![sample_job("Data Engineer")],
        total_jobs: 1,
        has_more: false,
    };
    cache
        .insert_listing("jobs:list:search=data".to_string(), response)
        .await;
    assert!(cache.get_listing("jobs:list:search=data").await.is_some());

    cache.invalidate_listings();
    assert!(cache.get_listing("jobs:list:search=data").await.is_none());
}
