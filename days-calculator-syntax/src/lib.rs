#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::{
    parse_date, parse_excluded_days, parse_period, parse_properties, parse_weekday,
    parse_weekdays, split_list,
};

/// Separates the two bounds of a period, as in `2016-05-10->2016-05-15`.
pub const PERIOD_SEPARATOR: &str = "->";

/// Separates the elements of a list of dates or days of week.
pub const LIST_SEPARATOR: char = ',';
