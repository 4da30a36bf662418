//! Client API calls for job and company endpoints.

use common::{
    filter_state::FilterCategory,
    job::{CompanyId, CompanyListing, Job, JobDetail, JobId},
    job_search_query::JobSearchQuery,
    search_result::{FilterFacets, JobSearchResults},
};
use dioxus::prelude::*;

#[server]
pub async fn search_jobs(input: JobSearchQuery, current_page: u64) -> Result<JobSearchResults, ServerFnError> {
    let x = backend::api::jobs::search_jobs(input, current_page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_jobs_hit_count(input: JobSearchQuery) -> Result<u64, ServerFnError> {
    let x = backend::api::jobs::search_jobs_hit_count(input).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn filter_facets(input: JobSearchQuery, category: FilterCategory) -> Result<FilterFacets, ServerFnError> {
    let x = backend::api::jobs::filter_facets(input, category).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_job(job_id: JobId) -> Result<JobDetail, ServerFnError> {
    let x = backend::api::jobs::get_job(job_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 404, details: None })
}

#[server]
pub async fn list_companies() -> Result<Vec<CompanyListing>, ServerFnError> {
    let x = backend::api::companies::list_companies().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_company(company_id: CompanyId) -> Result<CompanyListing, ServerFnError> {
    let x = backend::api::companies::get_company(company_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 404, details: None })
}

#[server]
pub async fn featured_jobs(limit: u64) -> Result<Vec<Job>, ServerFnError> {
    let x = backend::api::companies::featured_jobs(limit).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
