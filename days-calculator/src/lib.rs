#![doc = include_str!("../../README.md")]

pub mod calculator;
pub mod error;
pub mod properties;
pub mod weekday_set;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calculator::DaysCalculator;
pub use crate::error::{Error, Result};
pub use crate::weekday_set::WeekdaySet;
pub use days_calculator_syntax::rules::{ExcludedItem, Period, Properties, Weekday};

pub use days_calculator_syntax::Error as ParserError;
