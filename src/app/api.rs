//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::LocalFilesystem;
use crate::app::AppContext;
use crate::app::commands::{inspect, render};

pub use crate::app::commands::render::{RenderOutcome, RenderedFile};
pub use crate::domain::{AppError, RenderOptions, TemplateData};

fn create_context() -> AppContext<LocalFilesystem, LocalFilesystem> {
    AppContext::new(LocalFilesystem, LocalFilesystem)
}

/// Build the template data from the configured input documents.
pub fn template_data(options: &RenderOptions) -> Result<TemplateData, AppError> {
    inspect::execute(&create_context(), options)
}

/// Build the template data and render every manifest to disk.
pub fn render(options: &RenderOptions) -> Result<RenderOutcome, AppError> {
    render::execute(&create_context(), options)
}
