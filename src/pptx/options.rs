//! Writer options.

/// Options for serializing a presentation.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Application name recorded in docProps/app.xml
    pub application: String,

    /// Deflate-compress package entries (stored uncompressed when false)
    pub compress: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            application: format!("deckgen/{}", env!("CARGO_PKG_VERSION")),
            compress: true,
        }
    }
}

impl WriteOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application name recorded in the document properties.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Enable or disable entry compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
