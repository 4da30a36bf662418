//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_state;
pub mod job;
pub mod job_search_query;
pub mod search_const;
pub mod search_result;
pub mod session;
