//! Signed-in user session.
//!
//! A [`Session`] starts logged out, is initialised by [`Session::login`] after a successful
//! sign-in or registration, and is torn down by [`Session::logout`]. The frontend keeps one in
//! context; nothing reads a global flag.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::job::JobId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("not signed in")]
    NotLoggedIn,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
    #[error("name is required")]
    MissingName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    user: Option<SessionUser>,
    saved_jobs: BTreeSet<JobId>,
}

impl Session {
    pub fn login(&mut self, user: SessionUser) {
        *self = Session { user: Some(user), saved_jobs: BTreeSet::new() };
    }

    pub fn logout(&mut self) {
        *self = Session::default();
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Saves or unsaves a job. Returns whether the job is saved afterwards.
    pub fn toggle_saved_job(&mut self, job_id: JobId) -> Result<bool, SessionError> {
        if !self.is_logged_in() {
            return Err(SessionError::NotLoggedIn);
        }
        if self.saved_jobs.remove(&job_id) {
            Ok(false)
        } else {
            self.saved_jobs.insert(job_id);
            Ok(true)
        }
    }

    pub fn is_job_saved(&self, job_id: JobId) -> bool {
        self.saved_jobs.contains(&job_id)
    }

    pub fn saved_job_count(&self) -> usize {
        self.saved_jobs.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn validate_email(email: &str) -> Result<(), SessionError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if valid { Ok(()) } else { Err(SessionError::InvalidEmail(email.to_string())) }
}

fn validate_password(password: &str, min_len: usize) -> Result<(), SessionError> {
    if password.chars().count() < min_len {
        return Err(SessionError::PasswordTooShort { min_len });
    }
    Ok(())
}

impl LoginRequest {
    pub fn validate(&self, password_min_len: usize) -> Result<(), SessionError> {
        validate_email(&self.email)?;
        validate_password(&self.password, password_min_len)
    }
}

impl RegisterRequest {
    pub fn validate(&self, password_min_len: usize) -> Result<(), SessionError> {
        if self.name.trim().is_empty() {
            return Err(SessionError::MissingName);
        }
        validate_email(&self.email)?;
        validate_password(&self.password, password_min_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser { name: "Ada".to_string(), email: "ada@example.com".to_string() }
    }

    #[test]
    fn login_then_logout_tears_everything_down() {
        let mut session = Session::default();
        assert!(!session.is_logged_in());
        session.login(user());
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(session.toggle_saved_job(3), Ok(true));
        session.logout();
        assert!(!session.is_logged_in());
        assert!(!session.is_job_saved(3));
    }

    #[test]
    fn saving_jobs_requires_a_user() {
        let mut session = Session::default();
        assert_eq!(session.toggle_saved_job(1), Err(SessionError::NotLoggedIn));
        session.login(user());
        assert_eq!(session.toggle_saved_job(1), Ok(true));
        assert_eq!(session.toggle_saved_job(1), Ok(false));
        assert_eq!(session.saved_job_count(), 0);
    }

    #[test]
    fn login_request_validation() {
        let ok = LoginRequest { email: "ada@example.com".to_string(), password: "secret1".to_string() };
        assert_eq!(ok.validate(6), Ok(()));

        let bad_email = LoginRequest { email: "ada.example.com".to_string(), ..ok.clone() };
        assert!(matches!(bad_email.validate(6), Err(SessionError::InvalidEmail(_))));

        let short = LoginRequest { password: "abc".to_string(), ..ok };
        assert_eq!(short.validate(6), Err(SessionError::PasswordTooShort { min_len: 6 }));
    }

    #[test]
    fn register_requires_a_name() {
        let req = RegisterRequest {
            name: "  ".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert_eq!(req.validate(6), Err(SessionError::MissingName));
    }
}
