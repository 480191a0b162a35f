use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{keys, ListingCache};
use crate::models::jobs::{CreateJob, Job, JobListResponse, UpdateJob};
use crate::query::QueryParams;
use crate::store::JobFilterStore;

/// Error body shape the job-board API uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum JobsApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Thin client for the remote job-listing API.
///
/// Holds no filter state of its own; callers pass the derived `QueryParams`
/// in. Authentication is an opaque bearer token supplied by the embedding
/// application.
#[derive(Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl JobsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, JobsApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.is_empty() => text,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(JobsApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// GET /jobs with the canonical query parameters.
    pub async fn list_jobs(&self, params: &QueryParams) -> Result<JobListResponse, JobsApiError> {
        debug!(query = %params.as_query_string(), "listing jobs");
        let response = self
            .request(reqwest::Method::GET, "/jobs")
            .query(params.pairs())
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /jobs/{id}.
    pub async fn get_job(&self, id: Uuid) -> Result<Job, JobsApiError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/jobs/{id}"))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /jobs.
    pub async fn create_job(&self, input: &CreateJob) -> Result<Job, JobsApiError> {
        let response = self
            .request(reqwest::Method::POST, "/jobs")
            .json(input)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PUT /jobs/{id}.
    pub async fn update_job(&self, id: Uuid, input: &UpdateJob) -> Result<Job, JobsApiError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/jobs/{id}"))
            .json(input)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// DELETE /jobs/{id}.
    pub async fn delete_job(&self, id: Uuid) -> Result<(), JobsApiError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/jobs/{id}"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Fetch a single job, consulting the detail cache first. Callers that
/// mutate a posting afterwards should invalidate its cache entry (and the
/// listing pages) themselves.
pub async fn fetch_job(
    client: &JobsClient,
    cache: &ListingCache,
    id: Uuid,
) -> Result<Job, JobsApiError> {
    let key = keys::job(&id.to_string());
    if let Some(job) = cache.get_job(&key).await {
        debug!(%key, "job served from cache");
        return Ok(job);
    }
    let job = client.get_job(id).await?;
    cache.insert_job(key, job.clone()).await;
    Ok(job)
}

/// Fetch the page described by the store's current state.
///
/// Drives the loading/metadata sequence the store expects from its fetch
/// layer: loading goes true before the request, pagination metadata is
/// recorded from a successful response, and loading goes false in all
/// cases, including errors. Listings are served from the cache when the
/// canonical query string has been fetched recently.
pub async fn refresh(
    store: &mut JobFilterStore,
    client: &JobsClient,
    cache: &ListingCache,
) -> Result<Vec<Job>, JobsApiError> {
    store.set_loading(true);
    let params = store.query_params();
    let key = keys::job_list(&params.as_query_string());

    if let Some(cached) = cache.get_listing(&key).await {
        debug!(%key, "listing served from cache");
        store.set_pagination_meta(cached.total_jobs, cached.has_more);
        store.set_loading(false);
        return Ok(cached.jobs);
    }

    match client.list_jobs(&params).await {
        Ok(response) => {
            cache.insert_listing(key, response.clone()).await;
            store.set_pagination_meta(response.total_jobs, response.has_more);
            store.set_loading(false);
            Ok(response.jobs)
        }
        Err(e) => {
            warn!(error = %e, "listing fetch failed");
            store.set_loading(false);
            Err(e)
        }
    }
}
