//! Manifest options and the template-facing manifest configuration.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

pub const DEFAULT_NAMESPACE: &str = "openshift-etcd";
pub const DEFAULT_CONFIG_HOST_PATH: &str = "/etc/kubernetes/bootstrap-configs";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_CLOUD_PROVIDER_HOST_PATH: &str = "/etc/kubernetes/cloud";
pub const DEFAULT_SECRETS_HOST_PATH: &str = "/etc/kubernetes/bootstrap-secrets";

const IPV4_LOOPBACK: &str = "127.0.0.1";
const IPV6_LOOPBACK: &str = "[::1]";
const IPV4_WILDCARD: &str = "0.0.0.0";
const IPV6_WILDCARD: &str = "[::]";

const CLIENT_PORT: u16 = 2379;
const PEER_PORT: u16 = 2380;
const METRIC_SERVER_PORT: u16 = 9978;
const METRIC_PROXY_PORT: u16 = 9979;

/// Kubernetes image pull policy for the rendered pods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ImagePullPolicy {
    Always,
    #[default]
    IfNotPresent,
    Never,
}

impl ImagePullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePullPolicy::Always => "Always",
            ImagePullPolicy::IfNotPresent => "IfNotPresent",
            ImagePullPolicy::Never => "Never",
        }
    }
}

impl Display for ImagePullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagePullPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Always" => Ok(ImagePullPolicy::Always),
            "IfNotPresent" => Ok(ImagePullPolicy::IfNotPresent),
            "Never" => Ok(ImagePullPolicy::Never),
            other => Err(format!(
                "invalid image pull policy '{}': must be one of Always, IfNotPresent, Never",
                other
            )),
        }
    }
}

/// Caller-controlled manifest settings for the etcd static pods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Namespace the etcd resources live in.
    pub namespace: String,
    /// etcd image reference.
    pub image: String,
    /// Operator image reference, when the manifests run it.
    pub operator_image: Option<String>,
    pub image_pull_policy: ImagePullPolicy,
    pub config_host_path: String,
    pub config_file_name: String,
    pub cloud_provider_host_path: String,
    pub secrets_host_path: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            image: String::new(),
            operator_image: None,
            image_pull_policy: ImagePullPolicy::default(),
            config_host_path: DEFAULT_CONFIG_HOST_PATH.to_string(),
            config_file_name: DEFAULT_CONFIG_FILE_NAME.to_string(),
            cloud_provider_host_path: DEFAULT_CLOUD_PROVIDER_HOST_PATH.to_string(),
            secrets_host_path: DEFAULT_SECRETS_HOST_PATH.to_string(),
        }
    }
}

impl ManifestOptions {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.namespace.trim().is_empty() {
            return Err(AppError::config_error("namespace must not be empty"));
        }
        if self.image.trim().is_empty() {
            return Err(AppError::config_error("missing required etcd image"));
        }
        for (name, path) in [
            ("config host path", &self.config_host_path),
            ("cloud provider host path", &self.cloud_provider_host_path),
            ("secrets host path", &self.secrets_host_path),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::config_error(format!(
                    "{} must be absolute, got '{}'",
                    name, path
                )));
            }
        }
        if self.config_file_name.trim().is_empty() || self.config_file_name.contains('/') {
            return Err(AppError::config_error(format!(
                "config file name must be a bare file name, got '{}'",
                self.config_file_name
            )));
        }
        Ok(())
    }
}

/// Bind and listen addresses for the etcd member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EtcdAddress {
    pub listen_client: String,
    pub listen_peer: String,
    pub listen_metric_server: String,
    pub listen_metric_proxy: String,
    /// Loopback address for the local client endpoint.
    pub local_host: String,
}

impl EtcdAddress {
    pub fn for_stack(single_stack_ipv6: bool) -> Self {
        let wildcard = if single_stack_ipv6 { IPV6_WILDCARD } else { IPV4_WILDCARD };
        Self {
            listen_client: format!("{}:{}", wildcard, CLIENT_PORT),
            listen_peer: format!("{}:{}", wildcard, PEER_PORT),
            listen_metric_server: format!("{}:{}", wildcard, METRIC_SERVER_PORT),
            listen_metric_proxy: format!("{}:{}", wildcard, METRIC_PROXY_PORT),
            local_host: local_host(single_stack_ipv6).to_string(),
        }
    }
}

/// Loopback bind address; depends only on the single-stack flag.
pub fn local_host(single_stack_ipv6: bool) -> &'static str {
    if single_stack_ipv6 { IPV6_LOOPBACK } else { IPV4_LOOPBACK }
}

/// Manifest settings as seen by templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestConfig {
    pub namespace: String,
    pub image: String,
    pub operator_image: String,
    pub image_pull_policy: ImagePullPolicy,
    pub config_host_path: String,
    pub config_file_name: String,
    pub cloud_provider_host_path: String,
    pub secrets_host_path: String,
    pub etcd_address: EtcdAddress,
}

impl ManifestConfig {
    pub fn new(options: &ManifestOptions, single_stack_ipv6: bool) -> Self {
        Self {
            namespace: options.namespace.clone(),
            image: options.image.clone(),
            operator_image: options.operator_image.clone().unwrap_or_default(),
            image_pull_policy: options.image_pull_policy,
            config_host_path: options.config_host_path.clone(),
            config_file_name: options.config_file_name.clone(),
            cloud_provider_host_path: options.cloud_provider_host_path.clone(),
            secrets_host_path: options.secrets_host_path.clone(),
            etcd_address: EtcdAddress::for_stack(single_stack_ipv6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_options() -> ManifestOptions {
        ManifestOptions { image: "quay.io/openshift/etcd:latest".to_string(), ..Default::default() }
    }

    #[test]
    fn defaults_match_etcd_layout() {
        let options = ManifestOptions::default();

        assert_eq!(options.namespace, "openshift-etcd");
        assert_eq!(options.image_pull_policy, ImagePullPolicy::IfNotPresent);
        assert_eq!(options.secrets_host_path, "/etc/kubernetes/bootstrap-secrets");
    }

    #[test]
    fn validate_requires_image() {
        let err = ManifestOptions::default().validate().unwrap_err();

        assert!(err.to_string().contains("etcd image"));
        assert!(valid_options().validate().is_ok());
    }

    #[test]
    fn validate_rejects_relative_host_path() {
        let options = ManifestOptions { config_host_path: "etc/k8s".to_string(), ..valid_options() };

        assert!(matches!(options.validate(), Err(AppError::Configuration(_))));
    }

    #[test]
    fn pull_policy_parses_known_values() {
        assert_eq!("Never".parse::<ImagePullPolicy>(), Ok(ImagePullPolicy::Never));
        assert!("sometimes".parse::<ImagePullPolicy>().is_err());
    }

    #[test]
    fn ipv4_addresses_use_wildcard_and_loopback() {
        let address = EtcdAddress::for_stack(false);

        assert_eq!(address.listen_client, "0.0.0.0:2379");
        assert_eq!(address.listen_peer, "0.0.0.0:2380");
        assert_eq!(address.local_host, "127.0.0.1");
    }

    #[test]
    fn ipv6_addresses_are_bracketed() {
        let address = EtcdAddress::for_stack(true);

        assert_eq!(address.listen_client, "[::]:2379");
        assert_eq!(address.listen_metric_proxy, "[::]:9979");
        assert_eq!(address.local_host, "[::1]");
    }

    #[test]
    fn manifest_config_serializes_template_names() {
        let config = ManifestConfig::new(&valid_options(), false);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["Namespace"], "openshift-etcd");
        assert_eq!(value["ImagePullPolicy"], "IfNotPresent");
        assert_eq!(value["OperatorImage"], "");
        assert_eq!(value["EtcdAddress"]["LocalHost"], "127.0.0.1");
    }
}
