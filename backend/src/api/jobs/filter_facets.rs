//! Label counts for one filter category.

use std::collections::BTreeMap;

use common::{
    filter_state::{FilterCategory, FilterField, LabelSet},
    job_search_query::JobSearchQuery,
    search_result::{FilterFacetItem, FilterFacets},
};
use tracing::info;

use crate::api::jobs::search_jobs::matching_jobs;
use crate::mock_data::{JobCatalogue, load_catalogue};

pub async fn filter_facets(query: JobSearchQuery, category: FilterCategory) -> anyhow::Result<FilterFacets> {
    info!("filter_facets: {} for {:?}", category, query.query_text);
    let catalogue = load_catalogue().await?;
    Ok(facets_in_catalogue(catalogue, query, category))
}

pub fn facets_in_catalogue(catalogue: &JobCatalogue, mut query: JobSearchQuery, category: FilterCategory) -> FilterFacets {
    // drop the selection on this category, otherwise unselected labels would never show up
    query.filters.set_field(FilterField::for_category(category, LabelSet::new()));

    let mut counts = BTreeMap::<&str, u64>::new();
    for job in matching_jobs(catalogue, &query) {
        for label in job.labels(category) {
            *counts.entry(label).or_default() += 1;
        }
    }
    let mut facet_values = counts
        .into_iter()
        .map(|(label, count)| FilterFacetItem { label: label.to_string(), count })
        .collect::<Vec<_>>();
    facet_values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    FilterFacets { query, category, facet_values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::builtin_catalogue;

    #[test]
    fn own_selection_does_not_hide_other_labels() {
        let catalogue = builtin_catalogue();
        let mut query = JobSearchQuery::default();
        query.filters.toggle(FilterCategory::JobTypes, "Contract");

        let facets = facets_in_catalogue(&catalogue, query, FilterCategory::JobTypes);
        let labels = facets.facet_values.iter().map(|f| f.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Full-time", "Contract", "Internship", "Part-time"]);
        assert_eq!(facets.facet_values[0].count, 8);
    }

    #[test]
    fn other_categories_still_narrow_counts() {
        let catalogue = builtin_catalogue();
        let mut query = JobSearchQuery::default();
        query.filters.toggle(FilterCategory::Industries, "Technology");

        let facets = facets_in_catalogue(&catalogue, query, FilterCategory::Skills);
        let rust = facets.facet_values.iter().find(|f| f.label == "Rust").unwrap();
        assert_eq!(rust.count, 1);
        assert!(facets.facet_values.iter().all(|f| f.label != "Figma"));
    }
}
