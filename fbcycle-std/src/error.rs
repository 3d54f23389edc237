use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    Config { path: PathBuf, source: ConfigError },
    Frame(fbcycle_core::Error),
    Open { path: PathBuf, source: io::Error },
    Seek { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config { source, .. } => Some(source),
            Self::Frame(err) => std::error::Error::source(err),
            Self::Open { source, .. } | Self::Seek { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { path, .. } => {
                write!(f, "couldn't load config file {}", path.display())
            }
            Self::Frame(err) => fmt::Display::fmt(err, f),
            Self::Open { path, .. } => {
                write!(f, "couldn't open framebuffer device {}", path.display())
            }
            Self::Seek { path, .. } => {
                write!(f, "couldn't seek to the start of {}", path.display())
            }
            Self::Write { path, .. } => {
                write!(f, "couldn't write frame to {}", path.display())
            }
        }
    }
}

impl From<fbcycle_core::Error> for Error {
    fn from(err: fbcycle_core::Error) -> Self {
        Self::Frame(err)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => write!(f, "couldn't read file"),
            Self::Json(_) => write!(f, "invalid JSON"),
        }
    }
}
