//! Job search API and module exports.

mod search_jobs;
pub use search_jobs::{search_in_catalogue, search_jobs, search_jobs_hit_count};

mod filter_facets;
pub use filter_facets::{facets_in_catalogue, filter_facets};

mod get_job;
pub use get_job::get_job;

pub mod job_matching;
