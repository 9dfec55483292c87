//! Package registry metadata lookups.
//!
//! One GET per package against PyPI or the npm registry. A failed lookup
//! never aborts the batch it belongs to; it becomes a per-package `error`
//! entry instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GatewayError;
use crate::fetch::Fetcher;

pub const PYPI_BASE_URL: &str = "https://pypi.org/pypi";
pub const NPM_BASE_URL: &str = "https://registry.npmjs.org";

/// Details for a single package. `error` is set instead of the data fields
/// when the registry lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyInfo {
    fn from_error(err: GatewayError) -> Self {
        Self {
            error: Some(format!("Could not fetch details: {err}")),
            ..Self::default()
        }
    }
}

/// Which registry a manifest's packages are looked up against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registry {
    PyPi,
    Npm,
}

impl Registry {
    pub async fn fetch(self, fetcher: &impl Fetcher, name: &str) -> DependencyInfo {
        match self {
            Registry::PyPi => fetch_pypi_info(fetcher, name).await,
            Registry::Npm => fetch_npm_info(fetcher, name).await,
        }
    }
}

/// PyPI JSON metadata: `info.summary`, `info.version`, `info.license`.
pub async fn fetch_pypi_info(fetcher: &impl Fetcher, name: &str) -> DependencyInfo {
    match fetcher.get_json(&format!("{PYPI_BASE_URL}/{name}/json")).await {
        Ok(body) => {
            let info = body.get("info").cloned().unwrap_or(Value::Null);
            DependencyInfo {
                summary: string_field(&info, "summary"),
                latest_version: string_field(&info, "version"),
                license: string_field(&info, "license"),
                error: None,
            }
        }
        Err(err) => DependencyInfo::from_error(err),
    }
}

/// npm registry metadata: `description`, `dist-tags.latest`, `license`.
/// Some packages publish `license` as an object; non-string values are
/// treated as absent.
pub async fn fetch_npm_info(fetcher: &impl Fetcher, name: &str) -> DependencyInfo {
    match fetcher.get_json(&format!("{NPM_BASE_URL}/{name}")).await {
        Ok(body) => DependencyInfo {
            summary: string_field(&body, "description"),
            latest_version: body
                .get("dist-tags")
                .and_then(|tags| tags.get("latest"))
                .and_then(Value::as_str)
                .map(str::to_string),
            license: string_field(&body, "license"),
            error: None,
        },
        Err(err) => DependencyInfo::from_error(err),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
