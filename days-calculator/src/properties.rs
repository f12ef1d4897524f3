//! Load configuration sources into the key-value pairs read by
//! [`DaysCalculator::configure`](crate::DaysCalculator::configure).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::Properties;

/// First day of the range, as an ISO-8601 date.
pub const START_DATE_KEY: &str = "startDate";

/// Last day of the range, as an ISO-8601 date.
pub const END_DATE_KEY: &str = "endDate";

/// Comma-separated list of dates and periods.
pub const EXCLUDED_DAYS_KEY: &str = "excludedDays";

/// Comma-separated list of days of week.
pub const EXCLUDED_WEEKDAYS_KEY: &str = "excludedDaysOfWeeks";

/// All keys that have an effect on a calculator, in the order they are
/// applied.
pub const KEYS: [&str; 4] = [
    START_DATE_KEY,
    END_DATE_KEY,
    EXCLUDED_DAYS_KEY,
    EXCLUDED_WEEKDAYS_KEY,
];

/// Load a properties file.
///
/// ```no_run
/// use days_calculator::properties;
///
/// let properties = properties::load("days.properties")?;
/// println!("starting from {:?}", properties.get(properties::START_DATE_KEY));
/// # Ok::<(), days_calculator::Error>(())
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<Properties> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .map_err(|source| Error::Source { path: Some(path.to_owned()), source })?;

    #[cfg(feature = "log")]
    log::debug!("Loading configuration from {}", path.display());

    Ok(days_calculator_syntax::parse_properties(&raw)?)
}

/// Read properties from any UTF-8 input.
///
/// ```
/// use days_calculator::properties;
///
/// let properties = properties::read("startDate=2016-05-10".as_bytes())?;
/// assert_eq!(properties.get("startDate"), Some("2016-05-10"));
/// # Ok::<(), days_calculator::Error>(())
/// ```
pub fn read(reader: impl io::Read) -> Result<Properties> {
    let raw = io::read_to_string(reader).map_err(|source| Error::Source { path: None, source })?;
    Ok(days_calculator_syntax::parse_properties(&raw)?)
}
