//! Data service API consumed by the frontend server functions.

pub mod auth;
pub mod companies;
pub mod jobs;
