//! etcd-render: derive etcd bootstrap template data from cluster network and
//! infrastructure configuration, and render the bootstrap manifests with it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{RenderOutcome, RenderedFile, render, template_data};
pub use app::config::{load_infrastructure_config, load_network_config};
pub use domain::{
    AppError, CidrSelection, EtcdAddress, ImagePullPolicy, InfrastructureConfig, ManifestConfig,
    ManifestOptions, NetworkConfig, RenderOptions, TemplateData, TemplateDataBuilder,
    extract_cidrs, resolve_platform,
};
