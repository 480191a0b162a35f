use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::filters::JobType;

/// A job listing as reported by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub salary_range: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of listings plus the pagination metadata for the filter set
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    pub has_more: bool,
}

// ── DTOs (request bodies for the posting endpoints) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub salary_range: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub description: Option<String>,
    pub salary_range: Option<String>,
}
