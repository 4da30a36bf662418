//! Filter model owned by the job search bar.
//!
//! A [`FilterState`] is a flat record of search refinements. It is changed only through
//! [`FilterAction`]s applied by [`FilterState::apply`], and handed to a [`QueryDispatcher`]
//! as an immutable [`JobSearchQuery`] snapshot when the user commits a search.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::job_search_query::JobSearchQuery;
use crate::search_const::{DEFAULT_SALARY_MAX, DEFAULT_SALARY_MIN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter category: {0:?}")]
    UnknownCategory(String),
    #[error("salary range minimum {min} is above maximum {max}")]
    InvertedSalaryRange { min: u32, max: u32 },
}

/// Set of labels that remembers selection order and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Returns false when the label was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    /// Returns false when the label was not present.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|l| l != label);
        before != self.0.len()
    }

    /// Removes the label if present, inserts it otherwise. Returns the new membership.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.remove(label) {
            false
        } else {
            self.0.push(label.to_string());
            true
        }
    }

    pub fn with_toggled(&self, label: &str) -> Self {
        let mut copy = self.clone();
        copy.toggle(label);
        copy
    }

    pub fn without(&self, label: &str) -> Self {
        let mut copy = self.clone();
        copy.remove(label);
        copy
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|l| l.as_str())
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<LabelSet> for Vec<String> {
    fn from(set: LabelSet) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

/// Inclusive yearly salary bounds, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct SalaryRange {
    min: u32,
    max: u32,
}

impl SalaryRange {
    pub fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedSalaryRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when `[lo, hi]` shares at least one value with this range.
    pub fn overlaps(&self, lo: u32, hi: u32) -> bool {
        lo <= self.max && hi >= self.min
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self { min: DEFAULT_SALARY_MIN, max: DEFAULT_SALARY_MAX }
    }
}

impl TryFrom<(u32, u32)> for SalaryRange {
    type Error = FilterError;

    fn try_from((min, max): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<SalaryRange> for (u32, u32) {
    fn from(range: SalaryRange) -> Self {
        (range.min, range.max)
    }
}

impl Display for SalaryRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", format_salary(self.min), format_salary(self.max))
    }
}

pub fn format_salary(amount: u32) -> String {
    if amount >= 1000 && amount % 1000 == 0 {
        format!("${}k", amount / 1000)
    } else {
        format!("${}", amount)
    }
}

/// The set-valued categories that can be toggled label by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterCategory {
    JobTypes,
    ExperienceLevel,
    Industries,
    Skills,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::JobTypes,
        FilterCategory::ExperienceLevel,
        FilterCategory::Industries,
        FilterCategory::Skills,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            FilterCategory::JobTypes => "jobTypes",
            FilterCategory::ExperienceLevel => "experienceLevel",
            FilterCategory::Industries => "industries",
            FilterCategory::Skills => "skills",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterCategory::JobTypes => "Job Type",
            FilterCategory::ExperienceLevel => "Experience",
            FilterCategory::Industries => "Industry",
            FilterCategory::Skills => "Skills",
        }
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

// Only the set-valued fields parse; "salaryRange" and "remote" are rejected here.
impl FromStr for FilterCategory {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobTypes" | "job_types" => Ok(FilterCategory::JobTypes),
            "experienceLevel" | "experience_level" => Ok(FilterCategory::ExperienceLevel),
            "industries" => Ok(FilterCategory::Industries),
            "skills" => Ok(FilterCategory::Skills),
            other => Err(FilterError::UnknownCategory(other.to_string())),
        }
    }
}

/// A whole-field replacement. Each variant carries a value of the field's own type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterField {
    JobTypes(LabelSet),
    Locations(LabelSet),
    SalaryRange(SalaryRange),
    ExperienceLevel(LabelSet),
    Industries(LabelSet),
    Skills(LabelSet),
    Remote(bool),
}

impl FilterField {
    pub fn for_category(category: FilterCategory, labels: LabelSet) -> Self {
        match category {
            FilterCategory::JobTypes => FilterField::JobTypes(labels),
            FilterCategory::ExperienceLevel => FilterField::ExperienceLevel(labels),
            FilterCategory::Industries => FilterField::Industries(labels),
            FilterCategory::Skills => FilterField::Skills(labels),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterAction {
    ToggleLabel { category: FilterCategory, label: String },
    SetRemote { value: bool },
    SetField(FilterField),
    ClearAll,
}

/// One active filter as shown back to the user, with the action that removes it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBadge {
    pub key: String,
    pub text: String,
    pub removal: FilterAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    job_types: LabelSet,
    locations: LabelSet,
    salary_range: SalaryRange,
    experience_level: LabelSet,
    industries: LabelSet,
    skills: LabelSet,
    remote: bool,
}

impl FilterState {
    pub fn job_types(&self) -> &LabelSet {
        &self.job_types
    }

    pub fn locations(&self) -> &LabelSet {
        &self.locations
    }

    pub fn salary_range(&self) -> SalaryRange {
        self.salary_range
    }

    pub fn experience_level(&self) -> &LabelSet {
        &self.experience_level
    }

    pub fn industries(&self) -> &LabelSet {
        &self.industries
    }

    pub fn skills(&self) -> &LabelSet {
        &self.skills
    }

    pub fn remote(&self) -> bool {
        self.remote
    }

    pub fn category(&self, category: FilterCategory) -> &LabelSet {
        match category {
            FilterCategory::JobTypes => &self.job_types,
            FilterCategory::ExperienceLevel => &self.experience_level,
            FilterCategory::Industries => &self.industries,
            FilterCategory::Skills => &self.skills,
        }
    }

    fn category_mut(&mut self, category: FilterCategory) -> &mut LabelSet {
        match category {
            FilterCategory::JobTypes => &mut self.job_types,
            FilterCategory::ExperienceLevel => &mut self.experience_level,
            FilterCategory::Industries => &mut self.industries,
            FilterCategory::Skills => &mut self.skills,
        }
    }

    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::ToggleLabel { category, label } => self.toggle(category, &label),
            FilterAction::SetRemote { value } => self.set_field(FilterField::Remote(value)),
            FilterAction::SetField(field) => self.set_field(field),
            FilterAction::ClearAll => self.clear(),
        }
    }

    pub fn toggle(&mut self, category: FilterCategory, label: &str) {
        self.category_mut(category).toggle(label);
    }

    pub fn set_field(&mut self, field: FilterField) {
        match field {
            FilterField::JobTypes(v) => self.job_types = v,
            FilterField::Locations(v) => self.locations = v,
            FilterField::SalaryRange(v) => self.salary_range = v,
            FilterField::ExperienceLevel(v) => self.experience_level = v,
            FilterField::Industries(v) => self.industries = v,
            FilterField::Skills(v) => self.skills = v,
            FilterField::Remote(v) => self.remote = v,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of selected labels across all sets, plus one for `remote`.
    /// The salary range always has a value and is never counted.
    pub fn active_filter_count(&self) -> usize {
        let labels = self.job_types.len()
            + self.locations.len()
            + self.experience_level.len()
            + self.industries.len()
            + self.skills.len();
        labels + usize::from(self.remote)
    }

    pub fn active_badges(&self) -> Vec<FilterBadge> {
        let mut badges = Vec::new();
        let mut push_labels = |prefix: &str, set: &LabelSet, replace: &dyn Fn(LabelSet) -> FilterField| {
            for label in set.iter() {
                badges.push(FilterBadge {
                    key: format!("{prefix}:{label}"),
                    text: label.to_string(),
                    removal: FilterAction::SetField(replace(set.without(label))),
                });
            }
        };
        push_labels("jobTypes", &self.job_types, &FilterField::JobTypes);
        push_labels("locations", &self.locations, &FilterField::Locations);
        push_labels("experienceLevel", &self.experience_level, &FilterField::ExperienceLevel);
        push_labels("industries", &self.industries, &FilterField::Industries);
        push_labels("skills", &self.skills, &FilterField::Skills);

        if self.remote {
            badges.push(FilterBadge {
                key: "remote".to_string(),
                text: "Remote only".to_string(),
                removal: FilterAction::SetRemote { value: false },
            });
        }
        if !self.salary_range.is_default() {
            badges.push(FilterBadge {
                key: "salaryRange".to_string(),
                text: self.salary_range.to_string(),
                removal: FilterAction::SetField(FilterField::SalaryRange(SalaryRange::default())),
            });
        }
        badges
    }

    pub fn snapshot(&self, query_text: impl Into<String>, location_text: impl Into<String>) -> JobSearchQuery {
        JobSearchQuery {
            query_text: query_text.into(),
            location_text: location_text.into(),
            filters: self.clone(),
        }
    }

    /// Hands a snapshot of the current filters to the dispatcher. The state itself is not touched.
    pub fn commit<D: QueryDispatcher + ?Sized>(
        &self,
        query_text: impl Into<String>,
        location_text: impl Into<String>,
        dispatcher: &D,
    ) {
        dispatcher.dispatch(self.snapshot(query_text, location_text));
    }
}

/// Receives committed searches and turns them into results.
pub trait QueryDispatcher {
    fn dispatch(&self, query: JobSearchQuery);
}

impl<F: Fn(JobSearchQuery)> QueryDispatcher for F {
    fn dispatch(&self, query: JobSearchQuery) {
        self(query)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingDispatcher {
        received: RefCell<Vec<JobSearchQuery>>,
    }

    impl QueryDispatcher for RecordingDispatcher {
        fn dispatch(&self, query: JobSearchQuery) {
            self.received.borrow_mut().push(query);
        }
    }

    fn toggled(state: &FilterState, category: FilterCategory, label: &str) -> FilterState {
        let mut next = state.clone();
        next.apply(FilterAction::ToggleLabel { category, label: label.to_string() });
        next
    }

    #[test]
    fn toggling_full_time_twice_returns_to_empty() {
        let state = FilterState::default();
        let once = toggled(&state, FilterCategory::JobTypes, "Full-time");
        assert_eq!(once.job_types().iter().collect::<Vec<_>>(), vec!["Full-time"]);
        assert_eq!(once.active_filter_count(), 1);

        let twice = toggled(&once, FilterCategory::JobTypes, "Full-time");
        assert!(twice.job_types().is_empty());
        assert_eq!(twice.active_filter_count(), 0);
        assert_eq!(twice, state);
    }

    #[test]
    fn toggle_only_touches_the_named_category() {
        let mut state = FilterState::default();
        state.toggle(FilterCategory::Skills, "Rust");
        let before = state.clone();
        state.toggle(FilterCategory::Industries, "Fintech");
        assert_eq!(state.skills(), before.skills());
        assert_eq!(state.job_types(), before.job_types());
        assert_eq!(state.experience_level(), before.experience_level());
        assert!(state.industries().contains("Fintech"));
    }

    #[test]
    fn membership_follows_toggle_parity() {
        let labels = ["Rust", "Go", "SQL"];
        let mut state = FilterState::default();
        let mut counts = [[0usize; 3]; 4];
        // deterministic interleaving over every category and label
        let mut seed: u64 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let c = ((seed >> 33) % 4) as usize;
            let l = ((seed >> 17) % 3) as usize;
            state.toggle(FilterCategory::ALL[c], labels[l]);
            counts[c][l] += 1;
        }
        for (c, category) in FilterCategory::ALL.iter().enumerate() {
            for (l, label) in labels.iter().enumerate() {
                assert_eq!(
                    state.category(*category).contains(label),
                    counts[c][l] % 2 == 1,
                    "{category} / {label}"
                );
            }
        }
    }

    #[test]
    fn labels_render_in_selection_order_without_duplicates() {
        let mut state = FilterState::default();
        state.toggle(FilterCategory::Skills, "TypeScript");
        state.toggle(FilterCategory::Skills, "Rust");
        state.toggle(FilterCategory::Skills, "Go");
        state.toggle(FilterCategory::Skills, "TypeScript");
        state.toggle(FilterCategory::Skills, "TypeScript");
        assert_eq!(state.skills().iter().collect::<Vec<_>>(), vec!["Rust", "Go", "TypeScript"]);
    }

    #[test]
    fn set_remote_is_idempotent() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetRemote { value: true });
        assert_eq!(state.active_filter_count(), 1);
        state.apply(FilterAction::SetRemote { value: true });
        assert_eq!(state.active_filter_count(), 1);
        state.apply(FilterAction::SetField(FilterField::Remote(false)));
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn salary_range_never_counts() {
        let mut state = FilterState::default();
        let range = SalaryRange::new(80_000, 120_000).unwrap();
        state.set_field(FilterField::SalaryRange(range));
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.salary_range(), range);
    }

    #[test]
    fn count_sums_all_sets_and_remote() {
        let mut state = FilterState::default();
        state.toggle(FilterCategory::JobTypes, "Contract");
        state.toggle(FilterCategory::ExperienceLevel, "Senior");
        state.toggle(FilterCategory::Industries, "Healthcare");
        state.toggle(FilterCategory::Skills, "Rust");
        state.toggle(FilterCategory::Skills, "SQL");
        state.set_field(FilterField::Locations(["Berlin, Germany"].into_iter().collect()));
        state.apply(FilterAction::SetRemote { value: true });
        assert_eq!(state.active_filter_count(), 7);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut state = FilterState::default();
        for skill in ["Rust", "Go", "Kubernetes"] {
            state.toggle(FilterCategory::Skills, skill);
        }
        state.set_field(FilterField::SalaryRange(SalaryRange::new(50_000, 90_000).unwrap()));
        state.apply(FilterAction::SetRemote { value: true });
        state.apply(FilterAction::ClearAll);
        assert!(state.skills().is_empty());
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!((state.salary_range().min(), state.salary_range().max()), (0, 200_000));
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn commit_hands_snapshot_and_leaves_state_alone() {
        let mut state = FilterState::default();
        state.toggle(FilterCategory::JobTypes, "Full-time");
        state.apply(FilterAction::SetRemote { value: true });
        let before = state.clone();

        let dispatcher = RecordingDispatcher::default();
        state.commit("engineer", "Remote", &dispatcher);

        let received = dispatcher.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].query_text, "engineer");
        assert_eq!(received[0].location_text, "Remote");
        assert_eq!(received[0].filters.job_types().iter().collect::<Vec<_>>(), vec!["Full-time"]);
        assert!(received[0].filters.remote());
        assert_eq!(state, before);
    }

    #[test]
    fn closures_act_as_dispatchers() {
        let seen = RefCell::new(None);
        let dispatcher = |q: JobSearchQuery| {
            *seen.borrow_mut() = Some(q.query_text);
        };
        FilterState::default().commit("designer", "", &dispatcher);
        assert_eq!(seen.into_inner().as_deref(), Some("designer"));
    }

    #[test]
    fn non_set_fields_are_not_categories() {
        assert_eq!(
            "salaryRange".parse::<FilterCategory>(),
            Err(FilterError::UnknownCategory("salaryRange".to_string()))
        );
        assert!("remote".parse::<FilterCategory>().is_err());
        for category in FilterCategory::ALL {
            assert_eq!(category.field_name().parse::<FilterCategory>(), Ok(category));
        }
    }

    #[test]
    fn inverted_salary_range_is_rejected() {
        assert_eq!(
            SalaryRange::new(10, 5),
            Err(FilterError::InvertedSalaryRange { min: 10, max: 5 })
        );
        assert!(serde_json::from_str::<SalaryRange>("[90000, 10000]").is_err());
        assert_eq!(serde_json::from_str::<SalaryRange>("[10000, 90000]").unwrap().max(), 90_000);
    }

    #[test]
    fn deserialized_label_sets_drop_duplicates() {
        let set: LabelSet = serde_json::from_str(r#"["Rust", "Go", "Rust"]"#).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Rust", "Go"]);
    }

    #[test]
    fn badge_removal_clears_only_that_filter() {
        let mut state = FilterState::default();
        state.toggle(FilterCategory::JobTypes, "Full-time");
        state.toggle(FilterCategory::JobTypes, "Contract");
        state.apply(FilterAction::SetRemote { value: true });
        state.set_field(FilterField::SalaryRange(SalaryRange::new(60_000, 150_000).unwrap()));

        let badges = state.active_badges();
        let texts = badges.iter().map(|b| b.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["Full-time", "Contract", "Remote only", "$60k - $150k"]);

        state.apply(badges[0].removal.clone());
        assert_eq!(state.job_types().iter().collect::<Vec<_>>(), vec!["Contract"]);
        assert!(state.remote());

        state.apply(badges[3].removal.clone());
        assert!(state.salary_range().is_default());
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn salary_formatting() {
        assert_eq!(format_salary(0), "$0");
        assert_eq!(format_salary(200_000), "$200k");
        assert_eq!(format_salary(52_500), "$52500");
    }
}
