//! Paginated job results for a committed search.

use common::{job_search_query::JobSearchQuery, search_const::PAGE_SIZE};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::{api::job_api::search_jobs, components::{error_boundary::ComponentErrorDisplay, job_card::JobCard}, routes::Route};

#[component]
pub fn JobResultList(query: ReadSignal<JobSearchQuery>, current_page: ReadSignal<u64>) -> Element {
    let search_result = use_resource(move || {
        let q = query.read().clone();
        search_jobs(q, *current_page.read())
    }).suspend()?.cloned();
    let search_result = match search_result {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(s) => s,
    };

    let page_count = search_result.hit_count.div_ceil(PAGE_SIZE).max(1);
    let set_page = Callback::new(move |page: u64| {
        navigator().push(Route::JobListPage {
            query: query.read().clone().into(),
            current_page: page,
        });
    });

    rsx! {
        div {
            id: "x-job-results",
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px; padding: 4px 0px;",
                h2 {
                    style: "font-size: 20px; font-weight: 400; color: rgb(75, 87, 112); margin: 0;",
                    if search_result.hit_count == 1 { "1 job found" } else { "{search_result.hit_count} jobs found" }
                }
                div { style: "flex-grow: 1;" }
                PageButton {
                    enabled: search_result.page_number > 0,
                    onclick: move |_| set_page(current_page().saturating_sub(1)),
                    Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
                }
                span { style: "font-size: 15px; color: #4B5563;", "Page {search_result.page_number + 1} of {page_count}" }
                PageButton {
                    enabled: search_result.has_next_page,
                    onclick: move |_| set_page(current_page() + 1),
                    Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                }
            }
            if search_result.results.is_empty() {
                div {
                    style: "padding: 40px; text-align: center; color: #6B7280; font-size: 18px; background: white; border-radius: 12px;",
                    "No jobs match this search. Try removing a filter."
                }
            }
            ul {
                for job in search_result.results {
                    li {
                        key: "{job.id}",
                        JobCard { job: job.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PageButton(enabled: bool, onclick: Callback<()>, children: Element) -> Element {
    let color = if enabled { "#111827" } else { "#D1D5DB" };
    rsx! {
        button {
            disabled: !enabled,
            style: "
                width: 36px;
                height: 36px;
                display: flex;
                align-items: center;
                justify-content: center;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            {children}
        }
    }
}
