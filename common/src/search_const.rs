//! Constants shared by the job search frontend and backend.

/// Number of jobs per result page.
pub const PAGE_SIZE: u64 = 10;

pub const DEFAULT_SALARY_MIN: u32 = 0;
pub const DEFAULT_SALARY_MAX: u32 = 200_000;
pub const SALARY_SLIDER_STEP: u32 = 5_000;

/// Minimum password length accepted by the simulated sign-in when nothing else is configured.
pub const DEFAULT_PASSWORD_MIN_LEN: usize = 6;

/// Location chips offered by the filter panel.
pub const LOCATION_CHIPS: &[&str] = &[
    "Remote",
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "London, UK",
    "Berlin, Germany",
];

/// Job types a catalogue entry may carry.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Internship"];

/// Experience levels, most junior first.
pub const EXPERIENCE_LEVELS: &[&str] = &["Entry-level", "Mid-level", "Senior", "Lead"];
