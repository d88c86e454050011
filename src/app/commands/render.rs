//! Render the etcd bootstrap manifests.
//!
//! Each manifest group of the template source is rendered into the
//! same-named directory under the asset output dir, overwriting existing
//! files. Files written before a failure are left in place.

use std::path::{Path, PathBuf};

use minijinja::Value;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::adapters::templates::{
    BOOTSTRAP_CONFIG_TEMPLATE, MANIFEST_GROUPS, TemplateFile, TemplateSource,
    build_template_environment, render_template_by_name,
};
use crate::app::AppContext;
use crate::app::commands::inspect::build_template_data;
use crate::domain::{AppError, RenderOptions, TemplateData};
use crate::ports::{ConfigSource, ManifestSink};

const SCHEMA_VERSION: u32 = 1;

/// Output of the render command.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    /// Schema version for output format stability.
    pub schema_version: u32,
    /// Where the templates came from.
    pub templates: String,
    /// Output directory for rendered manifests.
    pub output_dir: String,
    /// Written manifests, in render order.
    pub files: Vec<RenderedFile>,
    /// Rendered bootstrap config, when requested.
    pub config_output: Option<RenderedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub path: String,
    pub sha256: String,
}

/// Execute the render command.
pub fn execute<S: ConfigSource, W: ManifestSink>(
    ctx: &AppContext<S, W>,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError> {
    options.validate()?;

    let data = build_template_data(ctx.source(), options)?;
    let templates = TemplateSource::from_option(options.templates_dir.as_deref());

    render_manifests(
        ctx.sink(),
        &data,
        &templates,
        &options.asset_output_dir,
        options.config_output_file.as_deref(),
    )
}

/// Render every manifest group (and optionally the bootstrap config) with `data`.
pub fn render_manifests<W: ManifestSink>(
    sink: &W,
    data: &TemplateData,
    templates: &TemplateSource,
    output_dir: &Path,
    config_output: Option<&Path>,
) -> Result<RenderOutcome, AppError> {
    let ctx = Value::from_serialize(data);
    let mut files = Vec::new();

    for group in MANIFEST_GROUPS {
        let sources = templates.collect_group(group)?;
        let env = build_template_environment(&sources)?;

        for source in &sources {
            let path = output_dir.join(source.output_path());
            files.push(render_to(sink, &env, source, &ctx, path)?);
        }
    }

    let config_output = match config_output {
        Some(path) => {
            let source = templates.root_template(BOOTSTRAP_CONFIG_TEMPLATE)?.ok_or_else(|| {
                AppError::TemplatesNotFound(match templates {
                    TemplateSource::Directory(dir) => dir.join(BOOTSTRAP_CONFIG_TEMPLATE),
                    TemplateSource::Embedded => PathBuf::from(BOOTSTRAP_CONFIG_TEMPLATE),
                })
            })?;
            let sources = vec![source];
            let env = build_template_environment(&sources)?;
            Some(render_to(sink, &env, &sources[0], &ctx, path.to_path_buf())?)
        }
        None => None,
    };

    tracing::info!(
        count = files.len(),
        output_dir = %output_dir.display(),
        templates = %templates.describe(),
        "Rendered manifests"
    );

    Ok(RenderOutcome {
        schema_version: SCHEMA_VERSION,
        templates: templates.describe(),
        output_dir: output_dir.to_string_lossy().to_string(),
        files,
        config_output,
    })
}

fn render_to<W: ManifestSink>(
    sink: &W,
    env: &minijinja::Environment<'_>,
    source: &TemplateFile,
    ctx: &Value,
    path: PathBuf,
) -> Result<RenderedFile, AppError> {
    let content = render_template_by_name(env, source.name(), ctx)?;
    sink.write_file(&path, &content)?;
    tracing::debug!(template = source.name(), path = %path.display(), "Wrote manifest");
    Ok(RenderedFile { path: path.to_string_lossy().to_string(), sha256: hash_content(&content) })
}

pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
