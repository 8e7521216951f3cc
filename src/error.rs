use std::io;
use std::path::PathBuf;

/// Failures at the file boundary. Conversion itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
