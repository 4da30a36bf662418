//! Session context shared by every page.

use common::{job_search_query::JobSearchQuery, session::{Session, SessionUser}};
use dioxus::prelude::*;

use crate::routes::Route;

/// Provided once by `App`. Routing guards and the navbar read the session from here.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub session: Signal<Session>,
    /// Route a logged-out user was sent away from, restored after login.
    pub pending_route: Signal<Option<Route>>,
}

impl SessionContext {
    pub fn login(mut self, user: SessionUser) {
        dioxus::logger::tracing::info!("session started for {}", user.email);
        self.session.write().login(user);
    }

    pub fn logout(mut self) {
        dioxus::logger::tracing::info!("session ended");
        self.session.write().logout();
        self.pending_route.set(None);
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    pub fn remember_pending_route(mut self, route: Route) {
        dioxus::logger::tracing::debug!("pending route: {}", route);
        self.pending_route.set(Some(route));
    }

    /// Consumes the pending route.
    pub fn take_redirect_target(mut self) -> Route {
        let pending = self.pending_route.write().take();
        redirect_target(pending)
    }
}

/// Where to go after login or registration. The auth pages themselves are never a target.
pub fn redirect_target(pending: Option<Route>) -> Route {
    match pending {
        None | Some(Route::LoginPage {}) | Some(Route::RegisterPage {}) => Route::job_list_from_query(JobSearchQuery::default()),
        Some(route) => route,
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use common::filter_state::{FilterAction, FilterCategory};

    use super::*;

    #[test]
    fn blocked_search_is_restored() {
        let mut query = JobSearchQuery::from_query_text("engineer");
        query.filters.apply(FilterAction::ToggleLabel { category: FilterCategory::Skills, label: "Rust".to_string() });
        let blocked = Route::JobListPage { query: query.into(), current_page: 2 };
        assert_eq!(redirect_target(Some(blocked.clone())), blocked);

        let detail = Route::JobDetailPage { job_id: 7 };
        assert_eq!(redirect_target(Some(detail.clone())), detail);
    }

    #[test]
    fn falls_back_to_the_default_job_list() {
        let default_list = Route::job_list_from_query(JobSearchQuery::default());
        assert_eq!(redirect_target(None), default_list);
        assert_eq!(redirect_target(Some(Route::LoginPage {})), default_list);
        assert_eq!(redirect_target(Some(Route::RegisterPage {})), default_list);
    }
}
