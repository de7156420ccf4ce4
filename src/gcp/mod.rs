//! Cloud Module
//!
//! Permission checks and API enablement against the cloud project backing
//! a functions deployment.

pub mod client;

use anyhow::Result;
use async_trait::async_trait;

/// API that hosts and runs deployed functions.
pub const FUNCTIONS_API: &str = "cloudfunctions.googleapis.com";

/// API backing runtime configuration for deployed functions.
pub const RUNTIME_CONFIG_API: &str = "runtimeconfig.googleapis.com";

/// Permissions the caller must hold on the project before functions can
/// be initialized against it.
pub const REQUIRED_PERMISSIONS: &[&str] = &[
    "cloudfunctions.functions.list",
    "cloudfunctions.functions.create",
    "cloudfunctions.functions.update",
    "cloudfunctions.functions.delete",
    "cloudfunctions.functions.get",
];

/// Cloud control-plane operations the setup flow depends on.
#[async_trait]
pub trait CloudApi: Send + Sync {
    /// Verify the caller holds `permissions` on `project_id`. Missing
    /// permissions are an error.
    async fn check_permissions(&self, project_id: &str, permissions: &[&str]) -> Result<()>;

    /// Enable `api` on `project_id`. When `silent` is false, progress is
    /// printed to the terminal.
    async fn enable_api(&self, project_id: &str, api: &str, silent: bool) -> Result<()>;
}

/// Stand-in used when no cloud project is configured. The flow skips all
/// cloud steps in that case, so every call on this type is a bug.
pub struct OfflineCloud;

#[async_trait]
impl CloudApi for OfflineCloud {
    async fn check_permissions(&self, _project_id: &str, _permissions: &[&str]) -> Result<()> {
        anyhow::bail!("No cloud project configured")
    }

    async fn enable_api(&self, _project_id: &str, _api: &str, _silent: bool) -> Result<()> {
        anyhow::bail!("No cloud project configured")
    }
}
