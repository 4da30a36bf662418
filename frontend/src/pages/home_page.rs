use common::job_search_query::JobSearchQuery;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_social_icons::MdGroup};

use crate::{
    api::job_api::{featured_jobs, search_jobs_hit_count},
    components::{error_boundary::ComponentErrorDisplay, job_card::JobCard, search_components::search_bar::SearchBar, suspend_boundary::SuspendWrapper},
    routes::Route,
};

const FEATURED_JOB_COUNT: u64 = 3;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Title { "Joburio - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            MainTitle {}
            SubText {}
            SuspendWrapper {
                OpenJobCount {}
            }

            div {
                style: "
                    border-radius: 22px;
                    padding: 22px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                SearchBar { original_query: JobSearchQuery::default() }
            }

            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 16px;",
                h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "Latest openings" }
                div { style: "flex-grow: 1;" }
                Link {
                    to: Route::CompaniesPage {},
                    span {
                        style: "display: inline-flex; align-items: center; gap: 4px; color: #4F46E5;",
                        Icon { icon: MdGroup, style: "width: 18px; height: 18px;" }
                        "Browse companies"
                    }
                }
            }
            SuspendWrapper {
                FeaturedJobs {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img {
                src: asset!("/assets/favicon.svg"),
                alt: "Joburio Logo",
                style: "width: 46px; height: 46px;",
            },
            span { "Find your next job on" }
            span { style: "color:#4F46E5;", "Joburio" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 22px;
                line-height: 1.6;
                max-width: 720px;
            ",
            "Search by title, skill or company, then narrow the list by job type, experience, industry, salary and location."
        }
    }
}

#[component]
fn OpenJobCount() -> Element {
    let count = use_resource(move || search_jobs_hit_count(JobSearchQuery::default())).suspend()?.cloned();
    let count = match count {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(c) => c,
    };
    rsx! {
        div { style: "font-size: 16px; color: #4B5563;", "{count} open positions right now." }
    }
}

#[component]
fn FeaturedJobs() -> Element {
    let jobs = use_resource(move || featured_jobs(FEATURED_JOB_COUNT)).suspend()?.cloned();
    let jobs = match jobs {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(jobs) => jobs,
    };

    rsx! {
        div {
            id: "x-featured-jobs",
            style: "display:flex; flex-direction: column; gap: 12px; max-width: 900px;",
            for job in jobs.into_iter() {
                JobCard { key: "{job.id}", job }
            }
        }
    }
}
