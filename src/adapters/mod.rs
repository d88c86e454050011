pub mod filesystem;
pub mod templates;

pub use filesystem::LocalFilesystem;
