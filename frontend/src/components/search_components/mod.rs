pub mod active_filter_badges;
pub mod filter_panel;
pub mod job_result_list;
pub mod search_bar;
