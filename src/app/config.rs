//! Loading of the input configuration documents.

use std::path::Path;

use crate::domain::{AppError, InfrastructureConfig, NetworkConfig};
use crate::ports::ConfigSource;

/// Read and parse the cluster network configuration.
pub fn load_network_config<S: ConfigSource>(
    source: &S,
    path: &Path,
) -> Result<NetworkConfig, AppError> {
    let content = source.read_document(path)?;
    let config = NetworkConfig::from_yaml(&content, path)?;
    tracing::debug!(path = %path.display(), "Loaded network config");
    Ok(config)
}

/// Read and parse the cluster infrastructure configuration.
pub fn load_infrastructure_config<S: ConfigSource>(
    source: &S,
    path: &Path,
) -> Result<InfrastructureConfig, AppError> {
    let content = source.read_document(path)?;
    let config = InfrastructureConfig::from_yaml(&content, path)?;
    tracing::debug!(path = %path.display(), "Loaded infrastructure config");
    Ok(config)
}
