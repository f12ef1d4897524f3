use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    /// The input does not match the expected format at all.
    Syntax {
        value: String,
        expected: &'static str,
        source: Box<pest::error::Error<Rule>>,
    },
    /// The input is shaped like a date but does not exist in the calendar,
    /// such as `2016-13-40`.
    InvalidDate { value: String },
    UnknownWeekday { value: String },
    MissingPeriodSeparator { value: String },
}

impl Error {
    pub(crate) fn syntax(value: &str, expected: &'static str, err: pest::error::Error<Rule>) -> Self {
        Self::Syntax { value: value.to_string(), expected, source: Box::new(err) }
    }

    /// The raw input that could not be parsed.
    pub fn value(&self) -> &str {
        match self {
            Self::Syntax { value, .. }
            | Self::InvalidDate { value }
            | Self::UnknownWeekday { value }
            | Self::MissingPeriodSeparator { value } => value,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { value, expected, .. } => {
                write!(f, "could not parse `{value}`: expected {expected}")
            }
            Self::InvalidDate { value } => write!(f, "`{value}` is not a valid calendar date"),
            Self::UnknownWeekday { value } => write!(
                f,
                "unknown day of week `{value}`: expected one of MONDAY, TUESDAY, WEDNESDAY, \
                 THURSDAY, FRIDAY, SATURDAY or SUNDAY",
            ),
            Self::MissingPeriodSeparator { value } => write!(
                f,
                "no period separator `{}` found in `{value}`",
                crate::PERIOD_SEPARATOR,
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
