//! Client API calls for simulated sign-in.

use common::session::{LoginRequest, RegisterRequest, SessionUser};
use dioxus::prelude::*;

#[server]
pub async fn login(request: LoginRequest) -> Result<SessionUser, ServerFnError> {
    let x = backend::api::auth::login(request).await;
    x.map_err(|e| {
        let code = backend::api::auth::error_status_code(&e);
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

#[server]
pub async fn register(request: RegisterRequest) -> Result<SessionUser, ServerFnError> {
    let x = backend::api::auth::register(request).await;
    x.map_err(|e| {
        let code = backend::api::auth::error_status_code(&e);
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}
