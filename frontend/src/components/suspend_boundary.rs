//! Suspense wrapper for resource-backed job board sections.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows `LoadingIndicator` while any child resource is pending. Errors raised
/// below stop at a component-level boundary.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_: SuspenseContext| rsx! {
                div {
                    class: "x-loading-section",
                    style: "display: flex; justify-content: center; padding: 24px; width: 100%;",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary { {children} }
        }
    }
}

/// Placeholder card, also used by the session guard while it redirects.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading jobs...".to_string())] text: String) -> Element {
    rsx! {
        div {
            class: "joburio-loading",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                color: #4B5563;
                font-size: 16px;
                padding: 12px 18px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
            ",
            span { class: "joburio-loading-dot" }
            "{text}"
        }
    }
}
