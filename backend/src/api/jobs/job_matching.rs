//! Predicates deciding whether a job satisfies a committed search.

use common::{
    filter_state::{FilterCategory, FilterState},
    job::Job,
    job_search_query::JobSearchQuery,
};

pub fn job_matches(job: &Job, query: &JobSearchQuery) -> bool {
    matches_query_text(job, &query.query_text)
        && matches_location_text(job, &query.location_text)
        && matches_filters(job, &query.filters)
}

/// Every whitespace separated term must occur in the title, company, description or skills.
pub fn matches_query_text(job: &Job, query_text: &str) -> bool {
    let haystack = format!(
        "{} {} {} {}",
        job.title,
        job.company_name,
        job.description,
        job.skills.join(" ")
    )
    .to_lowercase();
    query_text
        .split_whitespace()
        .all(|term| haystack.contains(&term.to_lowercase()))
}

pub fn matches_location_text(job: &Job, location_text: &str) -> bool {
    let wanted = location_text.trim().to_lowercase();
    if wanted.is_empty() {
        return true;
    }
    job.location.to_lowercase().contains(&wanted) || (wanted == "remote" && job.remote)
}

pub fn matches_filters(job: &Job, filters: &FilterState) -> bool {
    for category in FilterCategory::ALL {
        let selected = filters.category(category);
        if !selected.is_empty() && !job.labels(category).iter().any(|l| selected.contains(l)) {
            return false;
        }
    }
    let locations = filters.locations();
    if !locations.is_empty() && !locations.iter().any(|l| location_label_matches(job, l)) {
        return false;
    }
    if filters.remote() && !job.remote {
        return false;
    }
    filters.salary_range().overlaps(job.salary_min, job.salary_max)
}

fn location_label_matches(job: &Job, label: &str) -> bool {
    if label.eq_ignore_ascii_case("remote") {
        return job.remote;
    }
    job.location.eq_ignore_ascii_case(label)
}

#[cfg(test)]
mod tests {
    use common::filter_state::{FilterField, SalaryRange};

    use super::*;
    use crate::mock_data::builtin_catalogue;

    fn job(id: u64) -> Job {
        builtin_catalogue().job(id).cloned().unwrap()
    }

    #[test]
    fn query_terms_are_case_insensitive_and_all_required() {
        let rust_job = job(1);
        assert!(matches_query_text(&rust_job, "backend RUST"));
        assert!(matches_query_text(&rust_job, "brightpath"));
        assert!(!matches_query_text(&rust_job, "backend haskell"));
        assert!(matches_query_text(&rust_job, "   "));
    }

    #[test]
    fn remote_location_text_matches_remote_jobs() {
        let full_stack = job(5);
        assert!(full_stack.remote);
        assert!(matches_location_text(&full_stack, "Remote"));
        assert!(matches_location_text(&full_stack, "new york"));
        assert!(!matches_location_text(&job(1), "remote"));
    }

    #[test]
    fn categories_match_any_selected_label() {
        let mut filters = FilterState::default();
        filters.toggle(FilterCategory::Skills, "Haskell");
        assert!(!matches_filters(&job(1), &filters));
        filters.toggle(FilterCategory::Skills, "Kubernetes");
        assert!(matches_filters(&job(1), &filters));
        filters.toggle(FilterCategory::JobTypes, "Contract");
        assert!(!matches_filters(&job(1), &filters));
    }

    #[test]
    fn salary_range_must_overlap() {
        let mut filters = FilterState::default();
        filters.set_field(FilterField::SalaryRange(SalaryRange::new(0, 100_000).unwrap()));
        assert!(!matches_filters(&job(1), &filters));
        assert!(matches_filters(&job(2), &filters));
    }

    #[test]
    fn location_chips_and_remote_flag() {
        let mut filters = FilterState::default();
        filters.set_field(FilterField::Locations(["Remote"].into_iter().collect()));
        assert!(matches_filters(&job(5), &filters));
        assert!(!matches_filters(&job(1), &filters));

        let mut filters = FilterState::default();
        filters.set_field(FilterField::Remote(true));
        assert!(!matches_filters(&job(7), &filters));
        assert!(matches_filters(&job(8), &filters));
    }
}
