//! Search endpoint for paginated job lists.

use common::{
    job::Job, job_search_query::JobSearchQuery, search_const::PAGE_SIZE,
    search_result::JobSearchResults,
};
use tracing::info;

use crate::api::jobs::job_matching::job_matches;
use crate::mock_data::{JobCatalogue, load_catalogue};

pub async fn search_jobs(query: JobSearchQuery, current_page: u64) -> anyhow::Result<JobSearchResults> {
    info!("search_jobs: page {} query {:?}", current_page, query);
    let catalogue = load_catalogue().await?;
    Ok(search_in_catalogue(catalogue, query, current_page))
}

pub async fn search_jobs_hit_count(query: JobSearchQuery) -> anyhow::Result<u64> {
    let catalogue = load_catalogue().await?;
    Ok(matching_jobs(catalogue, &query).len() as u64)
}

/// Matching jobs, most recently posted first.
pub(crate) fn matching_jobs<'a>(catalogue: &'a JobCatalogue, query: &JobSearchQuery) -> Vec<&'a Job> {
    let mut jobs = catalogue.jobs.iter().filter(|job| job_matches(job, query)).collect::<Vec<_>>();
    jobs.sort_by_key(|job| (job.posted_days_ago, job.id));
    jobs
}

pub fn search_in_catalogue(catalogue: &JobCatalogue, query: JobSearchQuery, current_page: u64) -> JobSearchResults {
    let matching = matching_jobs(catalogue, &query);
    let hit_count = matching.len() as u64;
    let offset = current_page.saturating_mul(PAGE_SIZE);
    let results = matching
        .into_iter()
        .skip(offset as usize)
        .take(PAGE_SIZE as usize)
        .cloned()
        .collect::<Vec<_>>();
    let has_next_page = offset + (results.len() as u64) < hit_count;

    JobSearchResults {
        query,
        results,
        page_number: current_page,
        hit_count,
        has_next_page,
    }
}

#[cfg(test)]
mod tests {
    use common::filter_state::{FilterAction, FilterCategory};

    use super::*;
    use crate::mock_data::builtin_catalogue;

    #[test]
    fn unrestricted_query_pages_through_everything() {
        let catalogue = builtin_catalogue();
        let first = search_in_catalogue(&catalogue, JobSearchQuery::default(), 0);
        assert_eq!(first.hit_count, catalogue.jobs.len() as u64);
        assert_eq!(first.results.len(), PAGE_SIZE as usize);
        assert!(first.has_next_page);
        // newest first
        assert_eq!(first.results[0].posted_days_ago, 0);

        let second = search_in_catalogue(&catalogue, JobSearchQuery::default(), 1);
        assert_eq!(second.results.len(), catalogue.jobs.len() - PAGE_SIZE as usize);
        assert!(!second.has_next_page);
    }

    #[test]
    fn committed_filters_narrow_results() {
        let catalogue = builtin_catalogue();
        let mut query = JobSearchQuery::from_query_text("engineer");
        query.filters.apply(FilterAction::ToggleLabel { category: FilterCategory::JobTypes, label: "Full-time".to_string() });
        query.filters.apply(FilterAction::SetRemote { value: true });

        let result = search_in_catalogue(&catalogue, query.clone(), 0);
        let ids = result.results.iter().map(|j| j.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![5, 8]);
        assert_eq!(result.query, query);
    }

    #[tokio::test]
    async fn hit_count_agrees_with_search() {
        let query = JobSearchQuery::from_query_text("engineer");
        let count = search_jobs_hit_count(query.clone()).await.unwrap();
        let result = search_jobs(query, 0).await.unwrap();
        assert_eq!(count, result.hit_count);
        assert!(count > 0);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let catalogue = builtin_catalogue();
        let result = search_in_catalogue(&catalogue, JobSearchQuery::default(), 50);
        assert!(result.results.is_empty());
        assert!(!result.has_next_page);
    }
}
