//! Active filters rendered back to the user as removable badges.

use common::filter_state::{FilterAction, FilterState};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

#[component]
pub fn ActiveFilterBadges(filters: ReadSignal<FilterState>, apply_filter: Callback<FilterAction>) -> Element {
    let badges = use_memo(move || filters.read().active_badges());
    if badges.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-badges",
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
            for badge in badges() {
                FilterBadgeChip {
                    key: "{badge.key}",
                    text: badge.text.clone(),
                    removal: badge.removal.clone(),
                    apply_filter,
                }
            }
        }
    }
}

#[component]
fn FilterBadgeChip(text: String, removal: FilterAction, apply_filter: Callback<FilterAction>) -> Element {
    rsx! {
        span {
            class: "joburio-chip",
            style: "background: #EEF2FF; color: #3730A3; border: 1px solid #C7D2FE;",
            "{text}"
            button {
                title: "Remove filter",
                style: "border: none; background: none; cursor: pointer; padding: 0; display: flex; color: #3730A3;",
                onclick: move |_| apply_filter(removal.clone()),
                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
            }
        }
    }
}
