//! Job search bar: free text, location text and the filter model.

use common::{filter_state::FilterAction, job_search_query::JobSearchQuery};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_communication_icons::MdLocationOn}};

use crate::{components::search_components::{active_filter_badges::ActiveFilterBadges, filter_panel::FilterButtonStrip}, routes::Route};


/// Owns the filter state for as long as it is mounted. `original_query` is the last committed
/// search (the default query on pages that have none).
#[component]
pub fn SearchBar(original_query: ReadSignal<JobSearchQuery>) -> Element {
    let mut query_text = use_signal(|| original_query.read().query_text.clone());
    let mut location_text = use_signal(|| original_query.read().location_text.clone());
    let mut filters = use_signal(|| original_query.read().filters.clone());
    // navigation does not remount us, so follow the committed query when the url changes
    use_effect(move || {
        let new_query = original_query.read().clone();
        query_text.set(new_query.query_text);
        location_text.set(new_query.location_text);
        filters.set(new_query.filters);
    });

    let apply_filter = Callback::new(move |action: FilterAction| {
        dioxus::logger::tracing::debug!("filter action: {:?}", action);
        filters.write().apply(action);
    });
    let query_has_changed = use_memo(move || {
        let committed = original_query.read();
        *query_text.read() != committed.query_text
            || *location_text.read() != committed.location_text
            || *filters.read() != committed.filters
    });
    let search_button_color = use_memo(move || if query_has_changed() { "#4F46E5" } else { "#6B7280" });

    let trigger_search = Callback::new(move |_: ()| {
        let dispatcher = |query: JobSearchQuery| {
            dioxus::logger::tracing::info!("committing search: {:?}", query);
            navigator().push(Route::job_list_from_query(query));
        };
        filters.read().commit(query_text.read().clone(), location_text.read().clone(), &dispatcher);
    });
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };

    rsx! {
        div {
            id: "x-search-bar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                width: 100%;
            ",
            div {
                id: "x-search-bar-inputs",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 12px;
                ",
                SearchTextInput {
                    placeholder: "Job title, skill or company",
                    value: query_text,
                    oninput: move |v: String| query_text.set(v),
                    onkeydown: search_onkeydown,
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                }
                SearchTextInput {
                    placeholder: "City or \"Remote\"",
                    value: location_text,
                    oninput: move |v: String| location_text.set(v),
                    onkeydown: search_onkeydown,
                    Icon { icon: MdLocationOn, style: "width: 20px; height: 20px; color:#6B7280;" }
                }
                button {
                    id: "x-search-bar-submit",
                    style: "
                        height: 44px;
                        padding: 0 22px;
                        border-radius: 9999px;
                        border: none;
                        background: {search_button_color()};
                        color: white;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        trigger_search(())
                    },
                    "Search"
                }
            }
            FilterButtonStrip { original_query, filters, apply_filter }
            ActiveFilterBadges { filters, apply_filter }
        }
    }
}

#[component]
fn SearchTextInput(
    placeholder: String,
    value: ReadSignal<String>,
    oninput: Callback<String>,
    onkeydown: Callback<Event<KeyboardData>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.6);
                width: 340px;
            ",
            {children}
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{value}",
                oninput: move |event: Event<FormData>| oninput(event.value()),
                onkeydown: move |event| onkeydown(event),
            }
        }
    }
}
