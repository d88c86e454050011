//! CLI Adapter.

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, ImagePullPolicy, ManifestOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "etcd-render")]
#[command(version)]
#[command(
    about = "Render etcd bootstrap manifests from cluster network and infrastructure config",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render bootstrap manifests into the asset output directory
    #[clap(visible_alias = "r")]
    Render {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    /// Print the template data derived from the input documents as JSON
    #[clap(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Network configuration document (kind: Network)
    #[arg(long, env = "ETCD_RENDER_NETWORK_CONFIG_FILE")]
    network_config_file: PathBuf,
    /// Infrastructure configuration document (kind: Infrastructure)
    #[arg(long, env = "ETCD_RENDER_INFRA_CONFIG_FILE")]
    infra_config_file: PathBuf,
    /// Base directory for relative input paths
    #[arg(long, env = "ETCD_RENDER_ASSET_INPUT_DIR")]
    asset_input_dir: Option<PathBuf>,
    /// Address of the bootstrap node
    #[arg(long, env = "ETCD_RENDER_BOOTSTRAP_IP")]
    bootstrap_ip: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory receiving bootstrap-manifests/ and manifests/
    #[arg(long, env = "ETCD_RENDER_ASSET_OUTPUT_DIR")]
    asset_output_dir: PathBuf,
    /// Template directory (defaults to the embedded bootkube templates)
    #[arg(long, env = "ETCD_RENDER_TEMPLATES_DIR")]
    templates_dir: Option<PathBuf>,
    /// Write the rendered bootstrap config to this file
    #[arg(long, env = "ETCD_RENDER_CONFIG_OUTPUT_FILE")]
    config_output_file: Option<PathBuf>,
}

#[derive(Args)]
struct ManifestArgs {
    /// etcd image reference
    #[arg(long, env = "ETCD_RENDER_ETCD_IMAGE")]
    etcd_image: String,
    /// Operator image reference
    #[arg(long, env = "ETCD_RENDER_OPERATOR_IMAGE")]
    operator_image: Option<String>,
    /// Namespace for the etcd resources
    #[arg(long, env = "ETCD_RENDER_NAMESPACE")]
    namespace: Option<String>,
    /// Image pull policy: Always, IfNotPresent or Never
    #[arg(long, env = "ETCD_RENDER_IMAGE_PULL_POLICY")]
    image_pull_policy: Option<ImagePullPolicy>,
}

impl InputArgs {
    fn into_options(self) -> RenderOptions {
        RenderOptions {
            network_config_file: self.network_config_file,
            infra_config_file: self.infra_config_file,
            asset_input_dir: self.asset_input_dir,
            bootstrap_ip: self.bootstrap_ip,
            ..RenderOptions::default()
        }
    }
}

impl ManifestArgs {
    fn into_options(self) -> ManifestOptions {
        let defaults = ManifestOptions::default();
        ManifestOptions {
            namespace: self.namespace.unwrap_or(defaults.namespace.clone()),
            image: self.etcd_image,
            operator_image: self.operator_image,
            image_pull_policy: self.image_pull_policy.unwrap_or(defaults.image_pull_policy),
            ..defaults
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Render { inputs, output, manifest } => {
            let options = RenderOptions {
                asset_output_dir: output.asset_output_dir,
                templates_dir: output.templates_dir,
                config_output_file: output.config_output_file,
                manifest: manifest.into_options(),
                ..inputs.into_options()
            };
            run_render(&options)
        }
        Commands::Inspect { inputs } => run_inspect(&inputs.into_options()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose)
        .try_init();
}

fn run_render(options: &RenderOptions) -> Result<(), AppError> {
    let outcome = crate::app::api::render(options)?;
    print_json(&outcome)?;
    eprintln!("✅ Rendered {} manifest(s) to {}", outcome.files.len(), outcome.output_dir);
    Ok(())
}

fn run_inspect(options: &RenderOptions) -> Result<(), AppError> {
    let data = crate::app::api::template_data(options)?;
    print_json(&data)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
