//! Backend settings read from the environment.

use std::path::PathBuf;

use anyhow::Context;
use common::search_const::DEFAULT_PASSWORD_MIN_LEN;

pub const JOBS_FILE_VAR: &str = "JOBURIO_JOBS_FILE";
pub const PASSWORD_MIN_LEN_VAR: &str = "JOBURIO_PASSWORD_MIN_LEN";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// JSON catalogue replacing the built-in mock data.
    pub jobs_file: Option<PathBuf>,
    pub password_min_len: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { jobs_file: None, password_min_len: DEFAULT_PASSWORD_MIN_LEN }
    }
}

impl BackendConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let jobs_file = get(JOBS_FILE_VAR).filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        let password_min_len = match get(PASSWORD_MIN_LEN_VAR) {
            Some(v) => v.trim().parse::<usize>().with_context(|| format!("{PASSWORD_MIN_LEN_VAR} is not a number: {v:?}"))?,
            None => DEFAULT_PASSWORD_MIN_LEN,
        };
        Ok(Self { jobs_file, password_min_len })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(BackendConfig::from_vars(vars(&[])).unwrap(), BackendConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = BackendConfig::from_vars(vars(&[(JOBS_FILE_VAR, "/tmp/jobs.json"), (PASSWORD_MIN_LEN_VAR, "10")])).unwrap();
        assert_eq!(config.jobs_file, Some(PathBuf::from("/tmp/jobs.json")));
        assert_eq!(config.password_min_len, 10);
    }

    #[test]
    fn rejects_bad_password_length() {
        let err = BackendConfig::from_vars(vars(&[(PASSWORD_MIN_LEN_VAR, "six")])).unwrap_err();
        assert!(err.to_string().contains(PASSWORD_MIN_LEN_VAR));
    }
}
