#[derive(Debug)]
/// Represents the errors that stop the HTTP server.
pub enum ServerError {
    /// The listening socket could not be opened.
    Bind {
        /// The requested address.
        addr:    String,
        /// Why binding failed.
        details: String,
    },
    /// A worker thread could not be started.
    Spawn(std::io::Error),
    /// A worker thread panicked.
    WorkerPanicked,
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind { addr, details } => write!(f, "Failed to bind to {addr}: {details}"),
            Self::Spawn(e) => write!(f, "Failed to start worker thread: {e}"),
            Self::WorkerPanicked => write!(f, "A worker thread panicked."),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::Bind { .. } | Self::WorkerPanicked => None,
        }
    }
}
