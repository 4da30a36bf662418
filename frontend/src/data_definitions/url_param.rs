//! Structured route segments.
//!
//! A committed [`common::job_search_query::JobSearchQuery`] travels inside the job listing
//! URL: serialized to CBOR, then url-safe base64, so the route stays shareable.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


// Route segments need Display, FromStr and Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        ciborium::into_writer(&self.0, &mut serialized).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", URL_SAFE.encode(serialized))
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64 route segment: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize route segment: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(StateParseError::CiboriumError)?;
        Ok(UrlParam(parsed))
    }
}

#[cfg(test)]
mod tests {
    use common::filter_state::{FilterAction, FilterCategory};
    use common::job_search_query::JobSearchQuery;

    use super::*;

    #[test]
    fn committed_query_survives_the_url() {
        let mut query = JobSearchQuery::from_query_text("rust engineer");
        query.location_text = "Berlin".to_string();
        query.filters.apply(FilterAction::ToggleLabel { category: FilterCategory::Skills, label: "Rust".to_string() });
        query.filters.apply(FilterAction::SetRemote { value: true });

        let segment = UrlParam(query.clone()).to_string();
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '='));
        let parsed = segment.parse::<UrlParam<JobSearchQuery>>().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_segment_is_rejected() {
        let err = "not base64!".parse::<UrlParam<JobSearchQuery>>().unwrap_err();
        assert!(matches!(err, StateParseError::DecodeError(_)));
    }
}
