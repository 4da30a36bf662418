//! Sign-in page and the form pieces shared with registration.

use common::session::LoginRequest;
use dioxus::prelude::*;

use crate::{api::auth_api::login, data_definitions::session_context::use_session, routes::Route};


#[component]
pub fn LoginPage() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_txt = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let signed_in_as = session.session.read().user().map(|u| u.name.clone());

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        if submitting() {
            return;
        }
        let request = LoginRequest { email: email.read().clone(), password: password.read().clone() };
        submitting.set(true);
        error_txt.set(None);
        spawn(async move {
            match login(request).await {
                Ok(user) => {
                    session.login(user);
                    navigator().push(session.take_redirect_target());
                }
                Err(e) => error_txt.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Title { "Joburio - Log in" }
        AuthCard {
            title: "Welcome back",
            if let Some(name) = signed_in_as {
                p { style: "color: #065F46;", "You are signed in as {name}." }
            }
            form {
                style: "display: flex; flex-direction: column; gap: 14px;",
                onsubmit: on_submit,
                FormField { label: "Email", input_type: "email", value: email, oninput: move |v| email.set(v) }
                FormField { label: "Password", input_type: "password", value: password, oninput: move |v| password.set(v) }
                FormError { error_txt }
                SubmitButton { label: "Log in", busy: submitting() }
            }
            p {
                style: "font-size: 14px; color: #4B5563;",
                "New to Joburio? "
                Link { to: Route::RegisterPage {}, span { style: "color: #4F46E5;", "Create an account" } }
            }
        }
    }
}

#[component]
pub(crate) fn AuthCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                justify-content: center;
                padding: 60px 20px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    width: 420px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 16px;
                    padding: 28px;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                h1 { style: "font-size: 28px; font-weight: 500; margin: 0; color: #111827;", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub(crate) fn FormField(label: String, input_type: String, value: ReadSignal<String>, oninput: Callback<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: #374151;",
            "{label}"
            input {
                r#type: "{input_type}",
                value: "{value}",
                style: "
                    height: 40px;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    padding: 0 12px;
                    font-size: 16px;
                ",
                oninput: move |e: Event<FormData>| oninput(e.value()),
            }
        }
    }
}

#[component]
pub(crate) fn FormError(error_txt: ReadSignal<Option<String>>) -> Element {
    rsx! {
        if let Some(error_txt) = error_txt() {
            div {
                style: "color: #B91C1C; background: #FEF2F2; border: 1px solid #FECACA; border-radius: 8px; padding: 8px 12px; font-size: 14px;",
                "{error_txt}"
            }
        }
    }
}

#[component]
pub(crate) fn SubmitButton(label: String, busy: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            disabled: busy,
            style: "
                height: 42px;
                border: none;
                border-radius: 9999px;
                background: #4F46E5;
                color: white;
                font-size: 16px;
                cursor: pointer;
            ",
            if busy { "Please wait..." } else { "{label}" }
        }
    }
}
