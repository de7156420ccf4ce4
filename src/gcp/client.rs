//! Cloud API Client
//!
//! HTTP client for the Resource Manager (permission checks) and Service
//! Usage (API enablement) endpoints. Authenticates with a bearer token
//! taken from the environment or the local token cache.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use colored::Colorize;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::CloudApi;

const RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com";
const SERVICE_USAGE_URL: &str = "https://serviceusage.googleapis.com";

/// Environment variable overriding the cached access token.
pub const TOKEN_ENV: &str = "FIREFN_TOKEN";

// ─── Token cache ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Path of the token cache: `~/.config/firefn/token.json`.
fn token_cache_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("firefn").join("token.json"))
}

/// Resolve the bearer token: `FIREFN_TOKEN` first, then the cache file.
fn resolve_access_token() -> Result<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            return Ok(token.trim().to_string());
        }
    }

    let path = token_cache_path().context("Can't determine the config directory")?;
    let contents = fs::read_to_string(&path).with_context(|| {
        format!(
            "No access token. Set {} or sign in to create {}",
            TOKEN_ENV,
            path.display()
        )
    })?;
    let cached: CachedToken =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;

    if cached.is_expired() {
        bail!("Cached access token expired; sign in again or set {}", TOKEN_ENV);
    }
    Ok(cached.access_token)
}

// ─── HTTP client ─────────────────────────────────────────────────

/// Cloud API client for permission checks and API enablement.
pub struct HttpCloudApi {
    token: String,
    http: Client,
}

impl HttpCloudApi {
    /// Create a client, resolving the access token up front so a missing
    /// login fails before any prompt is shown.
    pub fn new() -> Result<Self> {
        Ok(Self {
            token: resolve_access_token()?,
            http: Client::new(),
        })
    }

    /// Internal helper: POST a JSON body and return the JSON response.
    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Cloud API request failed: POST {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("Cloud API error: POST {} -> {}: {}", url, status.as_u16(), text);
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl CloudApi for HttpCloudApi {
    async fn check_permissions(&self, project_id: &str, permissions: &[&str]) -> Result<()> {
        let url = format!(
            "{}/v1/projects/{}:testIamPermissions",
            RESOURCE_MANAGER_URL, project_id
        );
        let result = self
            .post(&url, serde_json::json!({ "permissions": permissions }))
            .await?;

        let granted: Vec<&str> = result["permissions"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        let missing: Vec<&str> = permissions
            .iter()
            .copied()
            .filter(|p| !granted.contains(p))
            .collect();

        if !missing.is_empty() {
            bail!(
                "Missing permissions on project {}: {}",
                project_id,
                missing.join(", ")
            );
        }
        tracing::debug!(project_id, "permission check passed");
        Ok(())
    }

    async fn enable_api(&self, project_id: &str, api: &str, silent: bool) -> Result<()> {
        if !silent {
            println!("{}", format!("  Enabling {}...", api).cyan());
        }

        let url = format!(
            "{}/v1/projects/{}/services/{}:enable",
            SERVICE_USAGE_URL, project_id, api
        );
        self.post(&url, serde_json::json!({}))
            .await
            .with_context(|| format!("Failed to enable {} on {}", api, project_id))?;

        tracing::info!(project_id, api, "api enabled");
        if !silent {
            println!("{}", format!("  {} enabled", api).green());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_cached_token_expiry() {
        let live = CachedToken {
            access_token: "t".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        let stale = CachedToken {
            access_token: "t".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        };
        assert!(!live.is_expired());
        assert!(stale.is_expired());
    }

    #[test]
    fn test_cached_token_parses_camel_case() {
        let raw = r#"{"accessToken":"abc","expiresAt":"2099-01-01T00:00:00Z"}"#;
        let token: CachedToken = serde_json::from_str(raw).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(!token.is_expired());
    }
}
