use common::{job::Company, job_search_query::JobSearchQuery};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_social_icons::MdGroup}};

use crate::routes::Route;

#[component]
pub fn CompanyCard(company: ReadSignal<Company>, open_jobs: Option<u64>) -> Element {
    let Company { name, industry, headquarters, description, employee_count, website, .. } = company.read().clone();
    let initials = company.read().initials();
    let jobs_query = JobSearchQuery::from_query_text(name.clone());

    rsx! {
        div {
            class: "x-company-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                width: 340px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                padding: 18px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.04);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                div {
                    style: "
                        width: 44px;
                        height: 44px;
                        border-radius: 10px;
                        background: #EEF2FF;
                        color: #4F46E5;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 600;
                        font-size: 18px;
                        flex-shrink: 0;
                    ",
                    "{initials}"
                }
                div {
                    style: "display: flex; flex-direction: column; min-width: 0;",
                    span { style: "font-size: 18px; font-weight: 500; color: #111827;", "{name}" }
                    span { style: "font-size: 14px; color: #6B7280;", "{industry}" }
                }
            }
            p { style: "font-size: 14px; color: #374151; margin: 0; line-height: 1.5;", "{description}" }
            div {
                style: "display: flex; flex-direction: row; gap: 14px; font-size: 13px; color: #4B5563; align-items: center;",
                span {
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    Icon { icon: MdLocationOn, style: "width: 15px; height: 15px;" }
                    "{headquarters}"
                }
                span {
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    Icon { icon: MdGroup, style: "width: 15px; height: 15px;" }
                    "{employee_count} employees"
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center; font-size: 14px;",
                if let Some(open_jobs) = open_jobs {
                    Link {
                        to: Route::job_list_from_query(jobs_query),
                        span { style: "color: #4F46E5;", "{open_jobs} open positions" }
                    }
                }
                a {
                    href: "{website}",
                    target: "_blank",
                    style: "color: #6B7280;",
                    "Website"
                }
            }
        }
    }
}
