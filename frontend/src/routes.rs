use common::job::JobId;
use common::job_search_query::JobSearchQuery;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::companies_page::CompaniesPage;
use crate::pages::home_page::HomePage;
use crate::pages::job_detail_page::JobDetailPage;
use crate::pages::job_list_page::JobListPage;
use crate::pages::login_page::LoginPage;
use crate::pages::register_page::RegisterPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/login")]
    LoginPage {},

    #[route("/register")]
    RegisterPage {},


    #[route("/jobs/:query/:current_page")]
    JobListPage {
        query: UrlParam<JobSearchQuery>,
        current_page: u64,
    },


    #[route("/job/:job_id")]
    JobDetailPage { job_id: JobId },

    #[route("/companies")]
    CompaniesPage {},

}

impl Route {
    pub fn job_list_from_query(q: JobSearchQuery) -> Self {
        Self::JobListPage {
            query: UrlParam::from(q),
            current_page: 0_u64,
        }
    }
}
