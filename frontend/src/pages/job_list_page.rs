use common::job_search_query::JobSearchQuery;
use dioxus::prelude::*;

use crate::{
    components::{require_session::RequireSession, search_components::{job_result_list::JobResultList, search_bar::SearchBar}, suspend_boundary::SuspendWrapper},
    data_definitions::url_param::UrlParam,
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Job listing page for a committed search.
#[component]
pub fn JobListPage(query: UrlParam<JobSearchQuery>, current_page: u64) -> Element {
    let page_title = if query.0.query_text.trim().is_empty() {
        "Joburio - Jobs".to_string()
    } else {
        format!("Joburio - {}", title_ellipsis(query.0.query_text.trim()))
    };

    rsx! {
        document::Title { "{page_title}" }
        RequireSession {
            JobListRootComponent {
                query: query.0.clone(),
                current_page,
            }
        }
    }
}

#[component]
fn JobListRootComponent(query: ReadSignal<JobSearchQuery>, current_page: ReadSignal<u64>) -> Element {
    rsx! {
        div {
            id: "x-job-list-root-component",
            style: r#"
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-job-list-search-bar",
                style: "
                    border-bottom: 1px solid rgb(214, 214, 214);
                    background-color: #F8FCFF;
                    padding: 16px 24px;
                ",
                SearchBar { original_query: query }
            }
            div {
                id: "x-job-list-results",
                style: "
                    padding: 16px 24px;
                    max-width: 1000px;
                    width: 100%;
                ",
                SuspendWrapper { JobResultList { query, current_page } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::title_ellipsis;

    #[test]
    fn long_titles_are_shortened_on_char_boundaries() {
        assert_eq!(title_ellipsis("rust"), "rust");
        assert_eq!(title_ellipsis(&"é".repeat(23)), "é".repeat(18) + "...");
    }
}
