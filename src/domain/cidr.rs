//! Pod and service CIDR extraction.
//!
//! Lists are copied in document order. IPv4/IPv6 entries are never swapped
//! or sorted: templates index them positionally.

use ipnet::IpNet;

use crate::domain::AppError;
use crate::domain::network::NetworkConfig;

const POD_FIELD: &str = "spec.clusterNetwork";
const SERVICE_FIELD: &str = "spec.serviceNetwork";

/// Address ranges extracted from a network configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrSelection {
    pub cluster_cidr: Vec<String>,
    pub service_cidr: Vec<String>,
    pub single_stack_ipv6: bool,
}

/// Extract pod and service ranges and detect single-stack IPv6.
///
/// Every entry must parse as CIDR notation. Empty lists are accepted.
pub fn extract_cidrs(network: &NetworkConfig) -> Result<CidrSelection, AppError> {
    let cluster_cidr = network.pod_cidrs();
    let service_cidr = network.service_cidrs();

    validate_all(POD_FIELD, &cluster_cidr)?;
    let service_nets = validate_all(SERVICE_FIELD, &service_cidr)?;

    if cluster_cidr.is_empty() {
        tracing::warn!(field = POD_FIELD, "Network config lists no pod CIDRs");
    }
    if service_cidr.is_empty() {
        tracing::warn!(field = SERVICE_FIELD, "Network config lists no service CIDRs");
    }

    let single_stack_ipv6 = matches!(service_nets.as_slice(), [IpNet::V6(_)]);

    tracing::debug!(?cluster_cidr, ?service_cidr, single_stack_ipv6, "Extracted CIDRs");

    Ok(CidrSelection { cluster_cidr, service_cidr, single_stack_ipv6 })
}

/// Parse a single CIDR. Host bits beyond the prefix are allowed.
pub fn parse_cidr(field: &str, value: &str) -> Result<IpNet, AppError> {
    value.trim().parse::<IpNet>().map_err(|source| AppError::InvalidCidr {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

fn validate_all(field: &str, values: &[String]) -> Result<Vec<IpNet>, AppError> {
    values.iter().map(|value| parse_cidr(field, value)).collect()
}
