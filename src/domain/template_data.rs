//! The record handed to manifest templates.

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::cidr::extract_cidrs;
use crate::domain::infrastructure::{InfrastructureConfig, resolve_platform};
use crate::domain::manifest::{ManifestConfig, ManifestOptions};
use crate::domain::network::NetworkConfig;

/// Template data for the etcd bootstrap manifests.
///
/// Built once per render and never mutated: fields are only reachable
/// through accessors. Serialized field names are the names templates use.
/// The manifest settings appear both under `ManifestConfig` and at the top
/// level, so `ManifestConfig.EtcdAddress.LocalHost` and `EtcdAddress.LocalHost`
/// resolve to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    #[serde(rename = "ManifestConfig")]
    manifest_config: ManifestConfig,
    #[serde(flatten)]
    manifest_fields: ManifestConfig,
    /// Pod IP ranges in document order.
    #[serde(rename = "ClusterCIDR")]
    cluster_cidr: Vec<String>,
    /// Service IP ranges in document order.
    #[serde(rename = "ServiceCIDR")]
    service_cidr: Vec<String>,
    #[serde(rename = "SingleStackIPv6")]
    single_stack_ipv6: bool,
    #[serde(rename = "Platform")]
    platform: String,
    #[serde(rename = "BootstrapIP")]
    bootstrap_ip: String,
    /// Bootstrap IP safe to join with a port.
    #[serde(rename = "EscapedBootstrapIP")]
    escaped_bootstrap_ip: String,
}

impl TemplateData {
    /// Build template data with default manifest options.
    pub fn new(
        network: &NetworkConfig,
        infra: &InfrastructureConfig,
        bootstrap_ip: Option<&str>,
    ) -> Result<Self, AppError> {
        Self::builder(network, infra).bootstrap_ip(bootstrap_ip).build()
    }

    pub fn builder<'a>(
        network: &'a NetworkConfig,
        infra: &'a InfrastructureConfig,
    ) -> TemplateDataBuilder<'a> {
        TemplateDataBuilder { network, infra, manifest: None, bootstrap_ip: None }
    }

    pub fn manifest_config(&self) -> &ManifestConfig {
        &self.manifest_config
    }

    pub fn cluster_cidr(&self) -> &[String] {
        &self.cluster_cidr
    }

    pub fn service_cidr(&self) -> &[String] {
        &self.service_cidr
    }

    pub fn single_stack_ipv6(&self) -> bool {
        self.single_stack_ipv6
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn bootstrap_ip(&self) -> &str {
        &self.bootstrap_ip
    }

    pub fn escaped_bootstrap_ip(&self) -> &str {
        &self.escaped_bootstrap_ip
    }

    /// Shorthand for `manifest_config().etcd_address.local_host`.
    pub fn local_host(&self) -> &str {
        &self.manifest_config.etcd_address.local_host
    }
}

/// Assembles a [`TemplateData`] from parsed documents.
#[derive(Debug, Clone)]
pub struct TemplateDataBuilder<'a> {
    network: &'a NetworkConfig,
    infra: &'a InfrastructureConfig,
    manifest: Option<&'a ManifestOptions>,
    bootstrap_ip: Option<&'a str>,
}

impl<'a> TemplateDataBuilder<'a> {
    pub fn manifest_options(mut self, options: &'a ManifestOptions) -> Self {
        self.manifest = Some(options);
        self
    }

    /// Externally supplied bootstrap address; stored verbatim.
    pub fn bootstrap_ip(mut self, bootstrap_ip: Option<&'a str>) -> Self {
        self.bootstrap_ip = bootstrap_ip;
        self
    }

    pub fn build(self) -> Result<TemplateData, AppError> {
        let cidrs = extract_cidrs(self.network)?;
        let platform = resolve_platform(self.infra);
        let bootstrap_ip = self.bootstrap_ip.unwrap_or_default().to_string();

        let default_options;
        let options = match self.manifest {
            Some(options) => options,
            None => {
                default_options = ManifestOptions::default();
                &default_options
            }
        };

        let manifest_config = ManifestConfig::new(options, cidrs.single_stack_ipv6);
        let data = TemplateData {
            manifest_fields: manifest_config.clone(),
            manifest_config,
            cluster_cidr: cidrs.cluster_cidr,
            service_cidr: cidrs.service_cidr,
            single_stack_ipv6: cidrs.single_stack_ipv6,
            platform,
            escaped_bootstrap_ip: escape_ip(&bootstrap_ip),
            bootstrap_ip,
        };

        tracing::debug!(
            platform = %data.platform,
            single_stack_ipv6 = data.single_stack_ipv6,
            local_host = %data.local_host(),
            "Assembled template data"
        );

        Ok(data)
    }
}

/// Bracket IPv6-looking addresses so they can be joined with a port.
fn escape_ip(ip: &str) -> String {
    if ip.contains(':') && !ip.starts_with('[') { format!("[{}]", ip) } else { ip.to_string() }
}
