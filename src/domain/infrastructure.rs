//! Cluster infrastructure document (`config.openshift.io/v1`, `kind: Infrastructure`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Expected `kind` of an infrastructure configuration document.
pub const INFRASTRUCTURE_KIND: &str = "Infrastructure";

/// Infrastructure configuration as serialized by the installer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureConfig {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<InfrastructureStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    /// Platform identifier such as `AWS` or `None`. Absent or empty means
    /// the cloud provider is unspecified.
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub platform_status: Option<PlatformStatus>,
}

/// Provider-specific status; kept for shape validation only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStatus {
    #[serde(default, rename = "type")]
    pub platform_type: Option<String>,
    #[serde(flatten)]
    pub provider: BTreeMap<String, serde_yaml::Value>,
}

impl InfrastructureConfig {
    /// Parse an infrastructure document from YAML content.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, AppError> {
        let config: InfrastructureConfig = serde_yaml::from_str(content)
            .map_err(|err| AppError::config_parse("infrastructure config", path, err))?;

        if let Some(kind) = config.kind.as_deref()
            && kind != INFRASTRUCTURE_KIND
        {
            return Err(AppError::config_parse(
                "infrastructure config",
                path,
                format!("expected kind '{}', found '{}'", INFRASTRUCTURE_KIND, kind),
            ));
        }

        Ok(config)
    }

    /// The declared platform, if any.
    pub fn platform(&self) -> Option<&str> {
        self.status.as_ref().and_then(|status| status.platform.as_deref())
    }
}

/// Resolve the platform identifier consumed by the manifests.
///
/// Returns an empty string when the platform is absent or blank; templates
/// treat that as an unspecified cloud provider.
pub fn resolve_platform(infra: &InfrastructureConfig) -> String {
    infra.platform().map(str::trim).unwrap_or_default().to_string()
}
