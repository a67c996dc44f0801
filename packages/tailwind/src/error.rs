use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tailwind config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid content glob {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Tailwind config has no content paths to scan")]
    EmptyContent,

    #[error("Invalid plugin module {0:?}")]
    InvalidPlugin(String),
}
