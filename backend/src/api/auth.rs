//! Simulated sign-in and registration.
//!
//! No accounts are stored: any request that passes validation is accepted.

use common::session::{LoginRequest, RegisterRequest, SessionError, SessionUser};
use tracing::{info, warn};

use crate::config::BackendConfig;

pub async fn login(request: LoginRequest) -> anyhow::Result<SessionUser> {
    let config = BackendConfig::from_env()?;
    login_with_config(&config, request)
}

pub async fn register(request: RegisterRequest) -> anyhow::Result<SessionUser> {
    let config = BackendConfig::from_env()?;
    register_with_config(&config, request)
}

fn login_with_config(config: &BackendConfig, request: LoginRequest) -> anyhow::Result<SessionUser> {
    if let Err(e) = request.validate(config.password_min_len) {
        warn!("login rejected: {}", e);
        return Err(e.into());
    }
    let email = request.email.trim().to_string();
    info!("login accepted for {}", email);
    Ok(SessionUser { name: display_name_from_email(&email), email })
}

fn register_with_config(config: &BackendConfig, request: RegisterRequest) -> anyhow::Result<SessionUser> {
    if let Err(e) = request.validate(config.password_min_len) {
        warn!("registration rejected: {}", e);
        return Err(e.into());
    }
    info!("registered {}", request.email.trim());
    Ok(SessionUser { name: request.name.trim().to_string(), email: request.email.trim().to_string() })
}

/// HTTP status for a failed login or registration: 400 for a rejected request,
/// 500 for anything else (bad configuration included).
pub fn error_status_code(error: &anyhow::Error) -> u16 {
    if error.downcast_ref::<SessionError>().is_some() { 400 } else { 500 }
}

/// "jane.doe@example.com" -> "Jane Doe"
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_derives_display_name() {
        let user = login_with_config(
            &BackendConfig::default(),
            LoginRequest { email: " jane.doe@example.com ".to_string(), password: "hunter22".to_string() },
        )
        .unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe@example.com");
    }

    #[test]
    fn login_respects_configured_password_length() {
        let config = BackendConfig { password_min_len: 12, ..Default::default() };
        let err = login_with_config(
            &config,
            LoginRequest { email: "a@b.io".to_string(), password: "hunter22".to_string() },
        )
        .unwrap_err();
        assert_eq!(err.downcast_ref::<SessionError>(), Some(&SessionError::PasswordTooShort { min_len: 12 }));
    }

    #[test]
    fn register_keeps_given_name() {
        let user = register_with_config(
            &BackendConfig::default(),
            RegisterRequest { name: "Grace Hopper".to_string(), email: "grace@navy.mil".to_string(), password: "cobol1959".to_string() },
        )
        .unwrap();
        assert_eq!(user.name, "Grace Hopper");
    }

    #[test]
    fn rejected_requests_are_client_errors() {
        let err = login_with_config(
            &BackendConfig::default(),
            LoginRequest { email: "not-an-email".to_string(), password: "hunter22".to_string() },
        )
        .unwrap_err();
        assert_eq!(error_status_code(&err), 400);
    }

    #[test]
    fn configuration_faults_are_server_errors() {
        let err = BackendConfig::from_vars(|name| (name == crate::config::PASSWORD_MIN_LEN_VAR).then(|| "six".to_string()))
            .unwrap_err();
        assert_eq!(error_status_code(&err), 500);
    }
}
