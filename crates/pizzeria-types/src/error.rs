use std::fmt;

/// Result type for pizzeria-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a catalog
#[derive(Debug)]
pub enum Error {
    /// Menu resource could not be read
    Resource(std::io::Error),

    /// Menu bytes did not decode into a catalog
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Resource(err) => write!(f, "resource error: {}", err),
            Error::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Resource(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Resource(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
