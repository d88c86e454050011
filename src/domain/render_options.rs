use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::manifest::ManifestOptions;

/// Options for a render (or inspect) invocation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Network configuration document (`kind: Network`).
    pub network_config_file: PathBuf,
    /// Infrastructure configuration document (`kind: Infrastructure`).
    pub infra_config_file: PathBuf,
    /// Base directory for relative input paths.
    pub asset_input_dir: Option<PathBuf>,
    /// Directory receiving `bootstrap-manifests/` and `manifests/`.
    pub asset_output_dir: PathBuf,
    /// Template directory on disk. Embedded templates are used when absent.
    pub templates_dir: Option<PathBuf>,
    /// Where to write the rendered bootstrap config, if anywhere.
    pub config_output_file: Option<PathBuf>,
    /// Address of the bootstrap node, passed through unvalidated.
    pub bootstrap_ip: Option<String>,
    pub manifest: ManifestOptions,
}

impl RenderOptions {
    /// Check the inputs needed to build template data.
    pub fn validate_inputs(&self) -> Result<(), AppError> {
        if self.network_config_file.as_os_str().is_empty() {
            return Err(AppError::config_error("missing required network config file"));
        }
        if self.infra_config_file.as_os_str().is_empty() {
            return Err(AppError::config_error("missing required infrastructure config file"));
        }
        Ok(())
    }

    /// Check everything a full render needs.
    pub fn validate(&self) -> Result<(), AppError> {
        self.validate_inputs()?;
        if self.asset_output_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("missing required asset output dir"));
        }
        self.manifest.validate()
    }

    pub fn network_config_path(&self) -> PathBuf {
        self.resolve_input(&self.network_config_file)
    }

    pub fn infra_config_path(&self) -> PathBuf {
        self.resolve_input(&self.infra_config_file)
    }

    fn resolve_input(&self, path: &Path) -> PathBuf {
        match &self.asset_input_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
