pub mod filters;
pub mod jobs;
