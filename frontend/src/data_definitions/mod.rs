//! Data definitions used by routes and context providers.

pub mod session_context;
pub mod url_param;
