use std::env;

use crate::domain::issue::CandidateFilter;
use crate::error::{AppError, AppResult};

pub const ACLI_ENV: &str = "REWIKI_ACLI";
pub const PROJECT_ENV: &str = "REWIKI_PROJECT";
pub const ISSUE_TYPE_ENV: &str = "REWIKI_ISSUE_TYPE";
pub const START_KEY_ENV: &str = "REWIKI_START_KEY";
pub const EXCLUDE_ENV: &str = "REWIKI_EXCLUDE";

const DEFAULT_ACLI: &str = "acli";
const DEFAULT_PROJECT: &str = "OPS";
const DEFAULT_ISSUE_TYPE: &str = "Task";
const DEFAULT_START_KEY: &str = "OPS-15";
const DEFAULT_EXCLUDE: &str = "OPS-46,OPS-47,OPS-48";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub acli_program: String,
    pub filter: CandidateFilter,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub acli_program: Option<String>,
    pub project: Option<String>,
    pub issue_type: Option<String>,
    pub start_key: Option<String>,
    pub excluded_keys: Option<Vec<String>>,
}

impl AppConfig {
    pub fn load(overrides: ConfigOverrides) -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok(), overrides)
    }

    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |value: Option<String>, name: &str, default: &str| {
            value
                .or_else(|| lookup(name))
                .unwrap_or_else(|| default.to_string())
                .trim()
                .to_string()
        };

        let acli_program = setting(overrides.acli_program, ACLI_ENV, DEFAULT_ACLI);
        let project = setting(overrides.project, PROJECT_ENV, DEFAULT_PROJECT);
        let issue_type = setting(overrides.issue_type, ISSUE_TYPE_ENV, DEFAULT_ISSUE_TYPE);
        let start_key = setting(overrides.start_key, START_KEY_ENV, DEFAULT_START_KEY);
        let excluded_keys = match overrides.excluded_keys {
            Some(keys) => keys,
            None => split_keys(&setting(None, EXCLUDE_ENV, DEFAULT_EXCLUDE)),
        };

        for (value, name) in [
            (&acli_program, ACLI_ENV),
            (&project, PROJECT_ENV),
            (&issue_type, ISSUE_TYPE_ENV),
            (&start_key, START_KEY_ENV),
        ] {
            if value.is_empty() {
                return Err(AppError::Configuration(format!("{name} must not be blank")));
            }
        }

        Ok(Self {
            acli_program,
            filter: CandidateFilter {
                project,
                issue_type,
                start_key,
                excluded_keys: excluded_keys
                    .into_iter()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .collect(),
            },
        })
    }
}

fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',').map(|key| key.trim().to_string()).collect()
}
