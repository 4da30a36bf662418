use common::session::RegisterRequest;
use dioxus::prelude::*;

use crate::{
    api::auth_api::register,
    data_definitions::session_context::use_session,
    pages::login_page::{AuthCard, FormError, FormField, SubmitButton},
    routes::Route,
};

/// Account creation. Registration is simulated server-side and signs the user in on success.
#[component]
pub fn RegisterPage() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_txt = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        if submitting() {
            return;
        }
        let request = RegisterRequest {
            name: name.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
        };
        submitting.set(true);
        error_txt.set(None);
        spawn(async move {
            match register(request).await {
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
        document::Title { "Joburio - Create account" }
        AuthCard {
            title: "Create your account",
            form {
                style: "display: flex; flex-direction: column; gap: 14px;",
                onsubmit: on_submit,
                FormField { label: "Full name", input_type: "text", value: name, oninput: move |v| name.set(v) }
                FormField { label: "Email", input_type: "email", value: email, oninput: move |v| email.set(v) }
                FormField { label: "Password", input_type: "password", value: password, oninput: move |v| password.set(v) }
                FormError { error_txt }
                SubmitButton { label: "Create account", busy: submitting() }
            }
            p {
                style: "font-size: 14px; color: #4B5563;",
                "Already registered? "
                Link { to: Route::LoginPage {}, span { style: "color: #4F46E5;", "Log in" } }
            }
        }
    }
}
