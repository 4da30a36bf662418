use common::job::{CompanyId, JobDetail, JobId};
use common::job_search_query::JobSearchQuery;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertLink, md_navigation_icons::MdArrowBack}};

use crate::{
    api::job_api::{get_company, get_job},
    components::{company_card::CompanyCard, error_boundary::ComponentErrorDisplay, job_card::SaveJobButton, require_session::RequireSession, suspend_boundary::SuspendWrapper},
    routes::Route,
};


/// Job detail page
#[component]
pub fn JobDetailPage(job_id: JobId) -> Element {
    rsx! {
        document::Title { "Joburio - Job #{job_id}" }
        RequireSession {
            SuspendWrapper {
                JobDetailView { job_id }
            }
        }
    }
}

#[component]
fn JobDetailView(job_id: ReadSignal<JobId>) -> Element {
    let detail = use_resource(move || get_job(job_id())).suspend()?.cloned();
    let JobDetail { job, company } = match detail {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(d) => d,
    };
    let salary_text = job.salary_text();
    let posted_text = job.posted_text();

    rsx! {
        div {
            id: "x-job-detail",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 24px;
                padding: 24px 40px;
                align-items: flex-start;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    flex: 1 1 520px;
                    max-width: 820px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 14px;
                    padding: 24px;
                ",
                Link {
                    to: Route::job_list_from_query(JobSearchQuery::default()),
                    span {
                        style: "display: inline-flex; align-items: center; gap: 4px; color: #4F46E5; font-size: 14px;",
                        Icon { icon: MdArrowBack, style: "width: 16px; height: 16px;" }
                        "All jobs"
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    h1 { style: "font-size: 30px; font-weight: 500; margin: 0; color: #111827;", "{job.title}" }
                    div { style: "flex-grow: 1;" }
                    SaveJobButton { job_id: job.id }
                    CopyLinkButton {}
                }
                div { style: "font-size: 17px; color: #4B5563;", "{job.company_name} · {job.location}" }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                    span { class: "joburio-chip", style: "background: #EEF2FF; color: #3730A3;", "{job.job_type}" }
                    span { class: "joburio-chip", style: "background: #F3F4F6; color: #374151;", "{job.experience_level}" }
                    span { class: "joburio-chip", style: "background: #FEF3C7; color: #92400E;", "{salary_text}" }
                    if job.remote {
                        span { class: "joburio-chip", style: "background: #ECFDF5; color: #065F46;", "Remote" }
                    }
                    span { class: "joburio-chip", style: "color: #6B7280;", "{posted_text}" }
                }
                h2 { style: "font-size: 20px; font-weight: 500; margin: 8px 0 0 0;", "About the role" }
                p { style: "font-size: 16px; line-height: 1.6; color: #374151; margin: 0;", "{job.description}" }
                h2 { style: "font-size: 20px; font-weight: 500; margin: 8px 0 0 0;", "Requirements" }
                ul {
                    style: "list-style: disc; padding-left: 22px;",
                    for requirement in job.requirements.iter() {
                        li { key: "{requirement}", style: "font-size: 16px; line-height: 1.6; color: #374151;", "{requirement}" }
                    }
                }
                h2 { style: "font-size: 20px; font-weight: 500; margin: 8px 0 0 0;", "Skills" }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for skill in job.skills.iter() {
                        span {
                            key: "{skill}",
                            class: "joburio-chip",
                            style: "background: white; border: 1px solid #E5E7EB; color: #4B5563;",
                            "{skill}"
                        }
                    }
                }
            }
            SuspendWrapper {
                JobCompanyCard { company_id: company.id }
            }
        }
    }
}

/// Company card with the number of open positions, fetched separately from the job.
#[component]
fn JobCompanyCard(company_id: ReadSignal<CompanyId>) -> Element {
    let listing = use_resource(move || get_company(company_id())).suspend()?.cloned();
    let listing = match listing {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(l) => l,
    };
    rsx! {
        CompanyCard { company: listing.company, open_jobs: Some(listing.open_jobs) }
    }
}

#[component]
fn CopyLinkButton() -> Element {
    let mut copied = use_signal(|| false);
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let Ok(url) = window.location().href() else { return };
        let promise = window.navigator().clipboard().write_text(&url);
        spawn(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    dioxus::logger::tracing::info!("Link copied to clipboard: {}", url);
                    copied.set(true);
                }
                Err(e) => dioxus::logger::tracing::warn!("clipboard write failed: {:?}", e),
            }
        });
    });
    let label = if copied() { "Link copied" } else { "Copy link" };

    rsx! {
        button {
            class: "joburio-hover-shadow-background",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                cursor: pointer;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                color: #111827;
                padding: 4px 10px;
                font-size: 14px;
            ",
            onclick: move |_| do_copy_link.call(()),
            Icon { icon: MdInsertLink, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}
