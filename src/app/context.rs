use crate::ports::{ConfigSource, ManifestSink};

/// Application context holding the I/O ports commands run against.
pub struct AppContext<S: ConfigSource, W: ManifestSink> {
    source: S,
    sink: W,
}

impl<S: ConfigSource, W: ManifestSink> AppContext<S, W> {
    /// Create a new application context.
    pub fn new(source: S, sink: W) -> Self {
        Self { source, sink }
    }

    /// Get a reference to the config document source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the rendered manifest sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }
}
