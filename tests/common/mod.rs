//! Shared testing utilities for etcd-render integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use etcd_render::{ManifestOptions, RenderOptions};

/// Network fixtures under `tests/fixtures/network/`.
#[allow(dead_code)]
pub mod network {
    pub const IPV4: &str = "network/ipv4.yaml";
    pub const DUAL_STACK: &str = "network/dual_stack.yaml";
    pub const DUAL_STACK_SWAPPED: &str = "network/dual_stack_swapped.yaml";
    pub const IPV6_SINGLE_STACK: &str = "network/ipv6_single_stack.yaml";
    pub const EMPTY: &str = "network/empty.yaml";
    pub const INVALID_CIDR: &str = "network/invalid_cidr.yaml";
    pub const MALFORMED: &str = "network/malformed.yaml";
}

/// Infrastructure fixtures under `tests/fixtures/infrastructure/`.
#[allow(dead_code)]
pub mod infrastructure {
    pub const AWS: &str = "infrastructure/aws.yaml";
    pub const EMPTY_PLATFORM: &str = "infrastructure/empty_platform.yaml";
    pub const NO_STATUS: &str = "infrastructure/no_status.yaml";
    pub const MALFORMED: &str = "infrastructure/malformed.yaml";
}

pub const NETWORK_FILE: &str = "cluster-network-02-config.yml";
pub const INFRA_FILE: &str = "cluster-infrastructure-02-config.yml";
pub const ETCD_IMAGE: &str = "quay.io/openshift/etcd:4.16";

/// Read a fixture by its name relative to `tests/fixtures/`.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Testing harness with isolated asset input and output directories.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a context whose input dir holds the given network and infrastructure fixtures.
    pub fn new(network_fixture: &str, infra_fixture: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("assets")).expect("Failed to create assets dir");
        let ctx = Self { root };
        ctx.write_input(NETWORK_FILE, &fixture(network_fixture));
        ctx.write_input(INFRA_FILE, &fixture(infra_fixture));
        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("assets")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    pub fn write_input(&self, name: &str, content: &str) {
        fs::write(self.input_dir().join(name), content).expect("Failed to write input file");
    }

    /// Render options pointing at this context's inputs and output.
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            network_config_file: PathBuf::from(NETWORK_FILE),
            infra_config_file: PathBuf::from(INFRA_FILE),
            asset_input_dir: Some(self.input_dir()),
            asset_output_dir: self.output_dir(),
            manifest: ManifestOptions { image: ETCD_IMAGE.to_string(), ..Default::default() },
            ..Default::default()
        }
    }

    /// Read a rendered file relative to the output directory.
    pub fn read_output(&self, relative: &str) -> String {
        let path = self.output_dir().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", path.display(), e))
    }

    /// Build a command for invoking the compiled `etcd-render` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("etcd-render").expect("Failed to locate etcd-render binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }

    /// `render` invocation with the input/output flags already set.
    pub fn render_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("render")
            .arg("--asset-input-dir")
            .arg(self.input_dir())
            .arg("--network-config-file")
            .arg(NETWORK_FILE)
            .arg("--infra-config-file")
            .arg(INFRA_FILE)
            .arg("--asset-output-dir")
            .arg(self.output_dir())
            .arg("--etcd-image")
            .arg(ETCD_IMAGE);
        cmd
    }

    /// `inspect` invocation with the input flags already set.
    pub fn inspect_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("inspect")
            .arg("--asset-input-dir")
            .arg(self.input_dir())
            .arg("--network-config-file")
            .arg(NETWORK_FILE)
            .arg("--infra-config-file")
            .arg(INFRA_FILE);
        cmd
    }
}
