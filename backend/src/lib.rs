//! Job board data service: mocked catalogue, search, and simulated sign-in.

pub mod api;
pub mod config;
pub mod mock_data;
pub mod server_extra;
