use dioxus::prelude::*;

use crate::{
    api::job_api::list_companies,
    components::{company_card::CompanyCard, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
};

/// Companies page
#[component]
pub fn CompaniesPage() -> Element {
    rsx! {
        document::Title { "Joburio - Companies" }
        div {
            id: "x-companies-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                padding: 36px 40px;
            ",
            h1 { style: "font-size: 34px; font-weight: 500; margin: 0; color: #0F172A;", "Companies hiring on Joburio" }
            SuspendWrapper {
                CompanyGrid {}
            }
        }
    }
}

#[component]
fn CompanyGrid() -> Element {
    let listings = use_resource(list_companies).suspend()?.cloned();
    let listings = match listings {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(listings) => listings,
    };

    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 20px;
                align-items: stretch;
            ",
            for listing in listings.into_iter() {
                CompanyCard { key: "{listing.company.id}", company: listing.company, open_jobs: Some(listing.open_jobs) }
            }
        }
    }
}
