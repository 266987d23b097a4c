use std::fmt;

/// Result type for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the folio crates
#[derive(Debug)]
pub enum Error {
    /// Section name did not match any of the fixed sections
    UnknownSection(String),

    /// Project name is not present in the Projects section
    UnknownProject(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration could not be read or written
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSection(name) => write!(f, "Unknown section: {}", name),
            Error::UnknownProject(name) => write!(f, "Unknown project: {}", name),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::UnknownSection(_) | Error::UnknownProject(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
