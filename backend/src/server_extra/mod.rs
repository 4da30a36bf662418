//! Plain axum routes mounted next to the Dioxus server functions.

pub mod jobs_feed;
