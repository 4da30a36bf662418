//! Job card shown in listings and on the home page.

use common::job::{Job, JobId};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdBookmark, MdBookmarkBorder, MdSchedule}, md_communication_icons::MdLocationOn, md_editor_icons::MdAttachMoney}};

use crate::{data_definitions::session_context::use_session, routes::Route};

#[component]
pub fn JobCard(job: ReadSignal<Job>) -> Element {
    let Job {
        id,
        company_name,
        title,
        location,
        job_type,
        experience_level,
        skills,
        remote,
        ..
    } = job.read().clone();
    let salary_text = job.read().salary_text();
    let posted_text = job.read().posted_text();

    rsx! {
        div {
            class: "x-job-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                padding: 16px 20px;
                margin: 8px 0px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.04);
            ",
            // Row 1: TITLE - SPACER - SAVE
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                div {
                    style: "display: flex; flex-direction: column; min-width: 0;",
                    Link {
                        to: Route::JobDetailPage { job_id: id },
                        span {
                            style: "font-size: 20px; font-weight: 500; color: #111827; text-decoration: none;",
                            "{title}"
                        }
                    }
                    span { style: "font-size: 15px; color: #4B5563;", "{company_name}" }
                }
                div { style: "flex: 1 1 auto;" }
                SaveJobButton { job_id: id }
            }
            // Row 2: META
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px; color: #4B5563; font-size: 14px; align-items: center;",
                MetaItem { text: location,
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                }
                MetaItem { text: salary_text,
                    Icon { icon: MdAttachMoney, style: "width: 16px; height: 16px;" }
                }
                MetaItem { text: posted_text,
                    Icon { icon: MdSchedule, style: "width: 16px; height: 16px;" }
                }
            }
            // Row 3: CHIPS
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                span { class: "joburio-chip", style: "background: #EEF2FF; color: #3730A3;", "{job_type}" }
                span { class: "joburio-chip", style: "background: #F3F4F6; color: #374151;", "{experience_level}" }
                if remote {
                    span { class: "joburio-chip", style: "background: #ECFDF5; color: #065F46;", "Remote" }
                }
                for skill in skills {
                    span {
                        key: "{skill}",
                        class: "joburio-chip",
                        style: "background: white; border: 1px solid #E5E7EB; color: #4B5563;",
                        "{skill}"
                    }
                }
            }
        }
    }
}

#[component]
fn MetaItem(text: String, children: Element) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 4px;",
            {children}
            "{text}"
        }
    }
}

#[component]
pub fn SaveJobButton(job_id: ReadSignal<JobId>) -> Element {
    let mut session = use_session();
    let route = use_route::<Route>();
    let is_saved = use_memo(move || session.session.read().is_job_saved(job_id()));
    let label = if is_saved() { "Saved" } else { "Save" };

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
                flex-shrink: 0;
            ",
            onclick: move |e| {
                e.prevent_default();
                e.stop_propagation();
                let result = session.session.write().toggle_saved_job(job_id());
                if let Err(err) = result {
                    dioxus::logger::tracing::info!("cannot save job {}: {}", job_id(), err);
                    session.remember_pending_route(route.clone());
                    navigator().push(Route::LoginPage {});
                }
            },
            if is_saved() {
                Icon { icon: MdBookmark, style: "width: 18px; height: 18px; color: #4F46E5;" }
            } else {
                Icon { icon: MdBookmarkBorder, style: "width: 18px; height: 18px;" }
            }
            "{label}"
        }
    }
}
