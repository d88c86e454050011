pub mod cidr;
pub mod error;
pub mod infrastructure;
pub mod manifest;
pub mod network;
pub mod render_options;
pub mod template_data;

pub use cidr::{CidrSelection, extract_cidrs};
pub use error::AppError;
pub use infrastructure::{InfrastructureConfig, resolve_platform};
pub use manifest::{EtcdAddress, ImagePullPolicy, ManifestConfig, ManifestOptions};
pub use network::NetworkConfig;
pub use render_options::RenderOptions;
pub use template_data::{TemplateData, TemplateDataBuilder};
