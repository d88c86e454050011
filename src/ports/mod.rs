mod config_source;
mod manifest_sink;

pub use config_source::ConfigSource;
pub use manifest_sink::ManifestSink;
