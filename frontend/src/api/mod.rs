pub mod auth_api;
pub mod job_api;
