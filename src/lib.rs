pub mod cache;
pub mod client;
pub mod models;
pub mod query;
pub mod store;

pub use client::{fetch_job, refresh, JobsClient};
pub use store::JobFilterStore;
