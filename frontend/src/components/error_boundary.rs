//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error caught by {} boundary: {:?}", boundary_name, err);
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            margin: 24px;
                            padding: 20px;
                            border: 1px solid #DC2626;
                            border-radius: 12px;
                            background: white;
                        ",
                        h1 { style: "color: #DC2626; font-size: 36px; margin: 0;", "Something went wrong" }
                        p { style: "color: #7F1D1D; font-size: 18px; margin: 0;", "Boundary: {boundary_name}" }
                        a {
                            href: "/",
                            style: "color: #4F46E5; font-size: 18px;",
                            "Back to Joburio home"
                        }
                        pre {
                            style: "color: #111827; background: #FEF2F2; padding: 10px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 6px 14px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",
            padding: "16px",

            h2 {
                style: "color: #DC2626; font-size: 22px; margin: 0;",
                "Could not load this section",
            }

            pre {
                style: "color: #7F1D1D; background: #FEF2F2; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}

            Link {
                to: Route::HomePage {},
                span { style: "color: #4F46E5; font-size: 14px;", "Go home" }
            }
        }
    }
}
