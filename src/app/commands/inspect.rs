//! Build the template data record without rendering anything.

use crate::app::AppContext;
use crate::app::config::{load_infrastructure_config, load_network_config};
use crate::domain::{AppError, RenderOptions, TemplateData};
use crate::ports::{ConfigSource, ManifestSink};

/// Read both input documents and assemble the template data.
pub fn execute<S: ConfigSource, W: ManifestSink>(
    ctx: &AppContext<S, W>,
    options: &RenderOptions,
) -> Result<TemplateData, AppError> {
    options.validate_inputs()?;
    build_template_data(ctx.source(), options)
}

pub(crate) fn build_template_data<S: ConfigSource>(
    source: &S,
    options: &RenderOptions,
) -> Result<TemplateData, AppError> {
    let network = load_network_config(source, &options.network_config_path())?;
    let infra = load_infrastructure_config(source, &options.infra_config_path())?;

    TemplateData::builder(&network, &infra)
        .manifest_options(&options.manifest)
        .bootstrap_ip(options.bootstrap_ip.as_deref())
        .build()
}
