use serde::{Deserialize, Serialize};

use crate::{filter_state::{FilterCategory, LabelSet}, job::Job, job_search_query::JobSearchQuery};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResults {
    pub query: JobSearchQuery,
    pub results: Vec<Job>,
    pub page_number: u64,
    pub hit_count: u64,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFacets {
    pub query: JobSearchQuery,
    pub category: FilterCategory,
    pub facet_values: Vec<FilterFacetItem>,
}

impl FilterFacets {
    /// Labels selected since the last search may not be among the counted results.
    /// They are appended with a zero count so they can still be unticked.
    pub fn include_selected(&mut self, selected: &LabelSet) {
        for label in selected.iter() {
            if !self.facet_values.iter().any(|f| f.label == label) {
                self.facet_values.push(FilterFacetItem { label: label.to_string(), count: 0 });
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFacetItem {
    pub label: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets(values: &[(&str, u64)]) -> FilterFacets {
        FilterFacets {
            query: JobSearchQuery::default(),
            category: FilterCategory::Skills,
            facet_values: values.iter().map(|(label, count)| FilterFacetItem { label: label.to_string(), count: *count }).collect(),
        }
    }

    #[test]
    fn missing_selected_labels_are_listed_with_zero_count() {
        let mut f = facets(&[("Rust", 3), ("SQL", 1)]);
        f.include_selected(&["Rust", "Go"].into_iter().collect());
        assert_eq!(f.facet_values, facets(&[("Rust", 3), ("SQL", 1), ("Go", 0)]).facet_values);
    }

    #[test]
    fn counted_labels_are_not_duplicated() {
        let mut f = facets(&[("Rust", 3)]);
        f.include_selected(&["Rust"].into_iter().collect());
        f.include_selected(&LabelSet::new());
        assert_eq!(f.facet_values.len(), 1);
        assert_eq!(f.facet_values[0].count, 3);
    }
}
