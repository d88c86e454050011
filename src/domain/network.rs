//! Cluster network configuration document (`config.openshift.io/v1`, `kind: Network`).

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::AppError;

/// Expected `kind` of a network configuration document.
pub const NETWORK_KIND: &str = "Network";

/// Cluster network configuration as serialized by the installer.
///
/// Only the fields needed to derive pod and service ranges are modeled;
/// everything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub spec: NetworkSpec,
}

/// Desired network layout of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Pod address ranges, one per IP family, in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cluster_network: Vec<ClusterNetworkEntry>,
    /// Service address ranges, one per IP family, in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub service_network: Vec<String>,
    #[serde(default)]
    pub network_type: Option<String>,
}

/// A single pod address range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetworkEntry {
    pub cidr: String,
    #[serde(default)]
    pub host_prefix: Option<u32>,
}

impl NetworkConfig {
    /// Parse a network configuration document from YAML content.
    ///
    /// `path` only labels errors; nothing is read from it.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, AppError> {
        let config: NetworkConfig = serde_yaml::from_str(content)
            .map_err(|err| AppError::config_parse("network config", path, err))?;

        if let Some(kind) = config.kind.as_deref()
            && kind != NETWORK_KIND
        {
            return Err(AppError::config_parse(
                "network config",
                path,
                format!("expected kind '{}', found '{}'", NETWORK_KIND, kind),
            ));
        }

        Ok(config)
    }

    /// Pod CIDRs in document order.
    pub fn pod_cidrs(&self) -> Vec<String> {
        self.spec.cluster_network.iter().map(|entry| entry.cidr.clone()).collect()
    }

    /// Service CIDRs in document order.
    pub fn service_cidrs(&self) -> Vec<String> {
        self.spec.service_network.clone()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
