use dotenv::dotenv;
use jobboard_client::cache::{CacheConfig, ListingCache};
use jobboard_client::models::filters::JobFilters;
use jobboard_client::{refresh, JobFilterStore, JobsClient};
use tracing_subscriber::EnvFilter;

/// Demo driver: fetch one filtered page of listings and print it.
///
/// Filters are given as `key=value` arguments using the same keys as the
/// query parameters, e.g.:
///
///   jobboard-client location="New York" jobType=Full-Time orderBy=title
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let base_url = std::env::var("JOBS_API_URL").expect("JOBS_API_URL must be set");
    let mut client = JobsClient::new(&base_url);
    if let Ok(token) = std::env::var("JOBS_API_TOKEN") {
        client = client.with_token(&token);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pairs: Vec<(&str, &str)> = args
        .iter()
        .filter_map(|arg| arg.split_once('='))
        .collect();
    let filters = JobFilters::from_query_pairs(pairs)?;

    let mut store = JobFilterStore::new();
    let page = filters.page;
    store.set_filters(filters.into());
    if page > 1 {
        store.set_page(page);
    }
    tracing::info!(
        active_filters = store.active_filter_count(),
        query = %store.query_params().as_query_string(),
        "fetching jobs from {base_url}"
    );

    let cache = ListingCache::new(&CacheConfig::from_env());
    let jobs = refresh(&mut store, &client, &cache).await?;

    let meta = store.pagination();
    println!(
        "page {} of ~{} jobs (more: {})",
        store.filters().page,
        meta.total_jobs,
        meta.has_more
    );
    for job in jobs {
        println!(
            "  {} — {} @ {} [{}]",
            job.id, job.title, job.company, job.job_type
        );
    }

    Ok(())
}
