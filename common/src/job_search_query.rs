//! Committed job search: free text plus a filter snapshot.

use serde::{Deserialize, Serialize};

use crate::filter_state::FilterState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSearchQuery {
    pub query_text: String,
    pub location_text: String,
    pub filters: FilterState,
}

impl JobSearchQuery {
    pub fn from_query_text(query_text: impl Into<String>) -> Self {
        Self { query_text: query_text.into(), ..Default::default() }
    }

    /// True when the query would match every job.
    pub fn is_unrestricted(&self) -> bool {
        self.query_text.trim().is_empty()
            && self.location_text.trim().is_empty()
            && self.filters.active_filter_count() == 0
            && self.filters.salary_range().is_default()
    }
}
