use std::fmt;

use todo_display_core::GeometryError;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::preview::PreviewError;
use crate::sink::SinkError;
use crate::source::SourceError;

/// Everything a board refresh can fail with.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Geometry(GeometryError),
    Source(SourceError),
    Sink(SinkError),
    Preview(PreviewError),
    Logging(LoggingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(err) => write!(f, "{err}"),
            Error::Geometry(err) => write!(f, "layout failed: {err}"),
            Error::Source(err) => write!(f, "{err}"),
            Error::Sink(err) => write!(f, "{err}"),
            Error::Preview(err) => write!(f, "{err}"),
            Error::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Geometry(err) => Some(err),
            Error::Source(err) => Some(err),
            Error::Sink(err) => Some(err),
            Error::Preview(err) => Some(err),
            Error::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Error::Geometry(err)
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<SinkError> for Error {
    fn from(err: SinkError) -> Self {
        Error::Sink(err)
    }
}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<LoggingError> for Error {
    fn from(err: LoggingError) -> Self {
        Error::Logging(err)
    }
}
