//! Guard for pages that need a signed-in user.

use dioxus::prelude::*;

use crate::{components::suspend_boundary::LoadingIndicator, data_definitions::session_context::use_session, routes::Route};

#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let logged_in = use_memo(move || session.is_logged_in());
    use_effect(move || {
        if !logged_in() {
            dioxus::logger::tracing::info!("no session, redirecting to login");
            session.remember_pending_route(route.clone());
            navigator().replace(Route::LoginPage {});
        }
    });

    if !logged_in() {
        return rsx! { LoadingIndicator { text: "Taking you to the login page..." } };
    }
    rsx! { {children} }
}
