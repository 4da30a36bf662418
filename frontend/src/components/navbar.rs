//! Side navigation bar layout.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::footer::Footer;
use crate::data_definitions::session_context::use_session;
use common::job_search_query::JobSearchQuery;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdHome, MdWork};
use dioxus_free_icons::icons::md_communication_icons::MdBusiness;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Shared layout: navigation sidebar, routed page, footer.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    flex-shrink: 0;
                ",

                // top part
                NavbarTopLogo{},
                NavbarTopIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                // bottom part
                NavbarSessionControls{},
            },

            div {
                id:"x-page-container",
                style: "
                    flex-grow:1;
                    min-width: 100px;
                    height: 100%;
                    overflow-y: auto;
                    display: flex;
                    flex-direction: column;
                ",
                div {
                    style: "flex-grow: 1;",
                    GlobalErrorBoundary {
                        boundary_name: "Navbar".to_string(),
                        Outlet::<Route> {}
                    }
                }
                Footer {}
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            img { src: asset!("/assets/favicon.svg"), alt: "Joburio", style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::job_list_from_query(JobSearchQuery::default()), icon: MdWork, label: "Jobs" }
            IconLink { to: Route::CompaniesPage { }, icon: MdBusiness, label: "Companies" }
        }
    }
}


#[component]
fn NavbarSessionControls() -> Element {
    let session = use_session();
    let user_name = use_memo(move || session.session.read().user().map(|u| u.name.clone()));

    rsx! {

        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            if let Some(name) = user_name() {
                span {
                    title: "Signed in as {name}",
                    style: "color:white;",
                    Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
                }
                button {
                    title: "Log out",
                    style: "border: none; background: none; cursor: pointer; color: white; padding: 0;",
                    onclick: move |_| {
                        session.logout();
                        navigator().push(Route::HomePage {});
                    },
                    Icon { icon: MdExitToApp, style: "width: 26px; height: 26px;" }
                }
            } else {
                IconLink { to: Route::LoginPage { }, icon: MdPerson, label: "Log in" }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
