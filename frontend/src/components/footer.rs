use common::job_search_query::JobSearchQuery;
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            id: "x-footer",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 24px;
                padding: 18px 40px;
                border-top: 1px solid #E5E7EB;
                background: white;
                color: #6B7280;
                font-size: 14px;
            ",
            span { style: "font-weight: 500; color: #111827;", "Joburio" }
            FooterLink { to: Route::HomePage {}, label: "Home" }
            FooterLink { to: Route::job_list_from_query(JobSearchQuery::default()), label: "Browse jobs" }
            FooterLink { to: Route::CompaniesPage {}, label: "Companies" }
            FooterLink { to: Route::RegisterPage {}, label: "Create an account" }
            div { style: "flex-grow: 1;" }
            a {
                href: "/_jobs_feed.json",
                target: "_blank",
                style: "color: #6B7280;",
                "Job feed (JSON)"
            }
            span { "Listings are sample data." }
        }
    }
}

#[component]
fn FooterLink(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to,
            span { style: "color: #4B5563; text-decoration: underline;", "{label}" }
        }
    }
}
