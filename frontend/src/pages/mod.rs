pub mod companies_page;
pub mod home_page;
pub mod job_detail_page;
pub mod job_list_page;
pub mod login_page;
pub mod register_page;
