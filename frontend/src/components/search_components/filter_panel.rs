//! Filter buttons and their drop-down panels.

use common::{
    filter_state::{FilterAction, FilterCategory, FilterField, FilterState, SalaryRange, format_salary},
    job_search_query::JobSearchQuery,
    search_const::{DEFAULT_SALARY_MAX, DEFAULT_SALARY_MIN, LOCATION_CHIPS, SALARY_SLIDER_STEP},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{
    md_action_icons::{MdCode, MdTrendingUp, MdWork},
    md_communication_icons::{MdBusiness, MdLocationOn},
    md_editor_icons::MdAttachMoney,
    md_navigation_icons::MdArrowDropDown,
    md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
}};

use crate::{api::job_api::filter_facets, components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper}};


#[derive(Clone, Copy)]
struct FilterContext {
    original_query: ReadSignal<JobSearchQuery>,
    filters: ReadSignal<FilterState>,
    apply_filter: Callback<FilterAction>,
    expanded_panel: Signal<String>,
}

#[component]
pub fn FilterButtonStrip(original_query: ReadSignal<JobSearchQuery>, filters: ReadSignal<FilterState>, apply_filter: Callback<FilterAction>) -> Element {
    let expanded_panel = use_signal(|| "".to_string());
    use_context_provider(|| FilterContext {
        original_query,
        filters,
        apply_filter,
        expanded_panel,
    });
    let active_count = use_memo(move || filters.read().active_filter_count());
    let locations_filtered = use_memo(move || !filters.read().locations().is_empty());
    let salary_filtered = use_memo(move || !filters.read().salary_range().is_default());

    rsx! {
        div {
            id: "x-search-filter-chips-wrapper",
            style: "
                width: 100%;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 12px;
                align-items: center;
            ",

            CategoryFilterButton { category: FilterCategory::JobTypes, icon: MdWork }
            CategoryFilterButton { category: FilterCategory::ExperienceLevel, icon: MdTrendingUp }
            CategoryFilterButton { category: FilterCategory::Industries, icon: MdBusiness }
            CategoryFilterButton { category: FilterCategory::Skills, icon: MdCode }

            FilterPanelButton {
                panel_name: "Location".to_string(),
                is_filtered: locations_filtered(),
                icon: MdLocationOn,
                LocationChipList {}
            }
            FilterPanelButton {
                panel_name: "Salary".to_string(),
                is_filtered: salary_filtered(),
                icon: MdAttachMoney,
                SalaryRangeEditor {}
            }
            RemoteToggle {}

            div { style: "flex-grow: 1;" }

            span {
                id: "x-active-filter-count",
                style: "font-size: 14px; color: #4B5563;",
                "{active_count} active filters"
            }
            button {
                style: "
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    background: white;
                    padding: 6px 12px;
                    font-size: 14px;
                    cursor: pointer;
                ",
                disabled: active_count() == 0 && !salary_filtered(),
                onclick: move |_| {
                    apply_filter(FilterAction::ClearAll);
                },
                "Clear all"
            }
        }
    }
}

#[component]
fn CategoryFilterButton<I: IconShape + 'static + Clone + PartialEq>(category: FilterCategory, icon: I) -> Element {
    let filters = use_context::<FilterContext>().filters;
    let is_filtered = use_memo(move || !filters.read().category(category).is_empty());
    rsx! {
        FilterPanelButton {
            panel_name: category.display_name().to_string(),
            is_filtered: is_filtered(),
            icon,
            SuspendWrapper {
                FilterLabelList { category }
            }
        }
    }
}

#[component]
fn FilterPanelButton<I: IconShape + 'static + Clone + PartialEq>(
    panel_name: ReadSignal<String>,
    is_filtered: ReadSignal<bool>,
    icon: I,
    children: Element,
) -> Element {
    let mut expanded_panel = use_context::<FilterContext>().expanded_panel;

    let is_expanded = use_memo(move || *expanded_panel.read() == *panel_name.read());
    let button_z_level = use_memo(move || if is_expanded() { 1000 } else { 888 });
    let border_color = use_memo(move || if is_filtered() { "rgba(79,70,229,0.9)" } else { "rgba(0,0,0,0.3)" });

    rsx! {
        div {
            style: "position: relative;",
            if is_expanded() {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 999;
                        background-color: rgba(0,0,0,0.05);
                        width: 100vw;
                        height: 100vh;
                    ",
                    onclick: move |_| {
                        expanded_panel.set("".to_string());
                    },
                }
                div {
                    style: "
                        position: absolute;
                        top: 46px;
                        left: 0px;
                        background: white;
                        min-width: 280px;
                        max-width: 420px;
                        max-height: 420px;
                        overflow-y: auto;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 10px;
                        padding: 12px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    {children}
                }
            }

            button {
                onclick: move |_| {
                    let currently_expanded = expanded_panel.read().clone();
                    let our_name = panel_name.read().clone();
                    if currently_expanded == our_name {
                        expanded_panel.set("".to_string());
                    } else {
                        expanded_panel.set(our_name);
                    }
                },
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    border: 2px solid {border_color()};
                    border-radius: 1000px;
                    background-color: white;
                    position: relative;
                    height: 38px;
                    padding: 0px 10px;
                    font-size: 15px;
                    z-index: {button_z_level()};
                    white-space: nowrap;
                ",
                Icon { icon, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.8);" }
                "{panel_name}"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.8);" }
            }
        }
    }
}


#[component]
fn FilterLabelList(category: FilterCategory) -> Element {
    let context = use_context::<FilterContext>();
    let original_query = context.original_query;
    let filters = context.filters;

    let facets = use_resource(move || {
        let q = original_query.read().clone();
        filter_facets(q, category)
    }).suspend()?.cloned();
    let mut facets = match facets {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(f) => f,
    };
    facets.include_selected(filters.read().category(category));
    if facets.facet_values.is_empty() {
        return rsx! { div { style: "color: #6B7280; padding: 8px;", "No options for this search." } };
    }

    rsx! {
        ul {
            for item in facets.facet_values {
                li {
                    key: "{item.label}",
                    FilterLabelCheckbox {
                        category,
                        label: item.label.clone(),
                        count: item.count,
                    }
                }
            }
        }
    }
}

#[component]
fn FilterLabelCheckbox(category: FilterCategory, label: ReadSignal<String>, count: u64) -> Element {
    let context = use_context::<FilterContext>();
    let filters = context.filters;
    let apply_filter = context.apply_filter;
    let is_checked = use_memo(move || filters.read().category(category).contains(&label.read()));

    rsx! {
        CheckboxRow {
            checked: is_checked(),
            text: label.read().clone(),
            count: Some(count),
            onclick: move |_| {
                apply_filter(FilterAction::ToggleLabel { category, label: label.read().clone() });
            },
        }
    }
}

#[component]
fn LocationChipList() -> Element {
    let context = use_context::<FilterContext>();
    let filters = context.filters;
    let apply_filter = context.apply_filter;

    rsx! {
        ul {
            for chip in LOCATION_CHIPS.iter().copied() {
                li {
                    key: "{chip}",
                    CheckboxRow {
                        checked: filters.read().locations().contains(chip),
                        text: chip.to_string(),
                        count: None,
                        onclick: move |_| {
                            let locations = filters.read().locations().with_toggled(chip);
                            apply_filter(FilterAction::SetField(FilterField::Locations(locations)));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn SalaryRangeEditor() -> Element {
    let context = use_context::<FilterContext>();
    let filters = context.filters;
    let apply_filter = context.apply_filter;
    let range = use_memo(move || filters.read().salary_range());

    let set_range = move |min: u32, max: u32| {
        match SalaryRange::new(min, max) {
            Ok(r) => apply_filter(FilterAction::SetField(FilterField::SalaryRange(r))),
            Err(e) => dioxus::logger::tracing::warn!("ignoring salary input: {}", e),
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; font-size: 15px;",
            div { style: "font-weight: 500;", "{range()}" }
            label { "Minimum: {format_salary(range().min())}" }
            input {
                r#type: "range",
                min: "{DEFAULT_SALARY_MIN}",
                max: "{DEFAULT_SALARY_MAX}",
                step: "{SALARY_SLIDER_STEP}",
                value: "{range().min()}",
                oninput: move |e: Event<FormData>| {
                    let Ok(v) = e.value().parse::<u32>() else { return };
                    let current = range();
                    set_range(v.min(current.max()), current.max());
                },
            }
            label { "Maximum: {format_salary(range().max())}" }
            input {
                r#type: "range",
                min: "{DEFAULT_SALARY_MIN}",
                max: "{DEFAULT_SALARY_MAX}",
                step: "{SALARY_SLIDER_STEP}",
                value: "{range().max()}",
                oninput: move |e: Event<FormData>| {
                    let Ok(v) = e.value().parse::<u32>() else { return };
                    let current = range();
                    set_range(current.min(), v.max(current.min()));
                },
            }
            button {
                style: "align-self: flex-start; border: 1px solid #D1D5DB; border-radius: 8px; background: white; padding: 4px 10px; cursor: pointer;",
                onclick: move |_| set_range(DEFAULT_SALARY_MIN, DEFAULT_SALARY_MAX),
                "Any salary"
            }
        }
    }
}

#[component]
fn RemoteToggle() -> Element {
    let context = use_context::<FilterContext>();
    let filters = context.filters;
    let apply_filter = context.apply_filter;
    let remote = use_memo(move || filters.read().remote());

    rsx! {
        div {
            style: "border: 2px solid rgba(0,0,0,0.3); border-radius: 1000px; background: white; padding: 0px 8px; height: 38px; display: flex; align-items: center;",
            CheckboxRow {
                checked: remote(),
                text: "Remote only".to_string(),
                count: None,
                onclick: move |_| {
                    apply_filter(FilterAction::SetRemote { value: !remote() });
                },
            }
        }
    }
}

#[component]
fn CheckboxRow(checked: bool, text: String, count: Option<u64>, onclick: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-filter-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_e| onclick(()),

            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #4F46E5; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{text}"
            }

            div { style: "flex: 1 1 auto;", }

            if let Some(count) = count {
                div {
                    style: "font-size: 16px; color: rgba(28, 33, 45, 0.6); flex-shrink: 0;",
                    "{count}"
                }
            }
        }
    }
}
