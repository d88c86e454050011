//! Manifest template discovery, from disk or from the embedded bootkube set.

mod template_engine;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

pub use template_engine::{build_template_environment, render_template_by_name};

static BOOTKUBE_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/bootkube");

/// Manifest groups rendered into same-named output directories.
pub const MANIFEST_GROUPS: [&str; 2] = ["bootstrap-manifests", "manifests"];

/// Template rendered to the bootstrap config output file.
pub const BOOTSTRAP_CONFIG_TEMPLATE: &str = "config-overrides.yaml";

const TEMPLATE_SUFFIX: &str = ".j2";

/// A template and its name relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    name: String,
    content: String,
}

impl TemplateFile {
    pub fn new(name: String, content: String) -> Self {
        Self { name, content }
    }

    /// Name relative to the template root, always `/`-separated.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Output path relative to the output root (`.j2` suffix removed).
    pub fn output_path(&self) -> &str {
        self.name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&self.name)
    }
}

/// Where templates are loaded from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Embedded,
    /// Templates read from a directory on disk.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn from_option(templates_dir: Option<&Path>) -> Self {
        match templates_dir {
            Some(dir) => TemplateSource::Directory(dir.to_path_buf()),
            None => TemplateSource::Embedded,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "embedded bootkube templates".to_string(),
            TemplateSource::Directory(dir) => dir.display().to_string(),
        }
    }

    /// Collect every template under `group`, sorted by name.
    pub fn collect_group(&self, group: &str) -> Result<Vec<TemplateFile>, AppError> {
        let mut files = Vec::new();
        match self {
            TemplateSource::Embedded => {
                let dir = BOOTKUBE_TEMPLATES
                    .get_dir(group)
                    .ok_or_else(|| AppError::TemplatesNotFound(PathBuf::from(group)))?;
                collect_embedded(dir, &mut files)?;
            }
            TemplateSource::Directory(root) => {
                let dir = root.join(group);
                if !dir.is_dir() {
                    return Err(AppError::TemplatesNotFound(dir));
                }
                collect_directory(root, &dir, &mut files)?;
            }
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// Load a single template at the root of the source, if present.
    pub fn root_template(&self, name: &str) -> Result<Option<TemplateFile>, AppError> {
        match self {
            TemplateSource::Embedded => match BOOTKUBE_TEMPLATES.get_file(name) {
                Some(file) => {
                    let content = file.contents_utf8().ok_or_else(|| not_utf8(file.path()))?;
                    Ok(Some(TemplateFile::new(name.to_string(), content.to_string())))
                }
                None => Ok(None),
            },
            TemplateSource::Directory(root) => {
                let path = root.join(name);
                if !path.is_file() {
                    return Ok(None);
                }
                let content = read_template(&path)?;
                Ok(Some(TemplateFile::new(name.to_string(), content)))
            }
        }
    }
}

fn collect_embedded(dir: &Dir, files: &mut Vec<TemplateFile>) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let content = file.contents_utf8().ok_or_else(|| not_utf8(file.path()))?;
                files.push(TemplateFile::new(slash_path(file.path()), content.to_string()));
            }
            DirEntry::Dir(subdir) => collect_embedded(subdir, files)?,
        }
    }
    Ok(())
}

fn collect_directory(root: &Path, dir: &Path, files: &mut Vec<TemplateFile>) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_directory(root, &path, files)?;
            continue;
        }
        let relative = path.strip_prefix(root).map_err(|_| {
            io::Error::other(format!("Template has unexpected path: {}", path.display()))
        })?;
        files.push(TemplateFile::new(slash_path(relative), read_template(&path)?));
    }
    Ok(())
}

fn read_template(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| not_utf8(path))
}

fn not_utf8(path: &Path) -> AppError {
    AppError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("Template file is not UTF-8: {}", path.display()),
    ))
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
