use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::ParserError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A date, a period or a day of week could not be parsed.
    Parse(ParserError),
    /// The range can't be evaluated before it has a first day.
    MissingStartDate,
    /// The range can't be evaluated before it has a last day.
    MissingEndDate,
    /// A configuration source could not be read.
    Source {
        path: Option<PathBuf>,
        source: io::Error,
    },
}

impl From<ParserError> for Error {
    fn from(err: ParserError) -> Self {
        Self::Parse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::MissingStartDate => write!(f, "no start date was specified"),
            Self::MissingEndDate => write!(f, "no end date was specified"),
            Self::Source { path: Some(path), source } => {
                write!(f, "could not read `{}`: {source}", path.display())
            }
            Self::Source { path: None, source } => {
                write!(f, "could not read configuration: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Source { source, .. } => Some(source),
            Self::MissingStartDate | Self::MissingEndDate => None,
        }
    }
}
