pub mod company_card;
pub mod error_boundary;
pub mod footer;
pub mod job_card;
pub mod navbar;
pub mod require_session;
pub mod search_components;
pub mod suspend_boundary;
