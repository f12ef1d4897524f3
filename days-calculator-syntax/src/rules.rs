use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::NaiveDate;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

use crate::PERIOD_SEPARATOR;

/// Canonical spelling of a day of week, as accepted by the parser.
pub fn weekday_name(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

// Period

/// An inclusive run of days.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Iterate over all the days of this period. A period that ends before
    /// it starts holds no day.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use days_calculator_syntax::rules::Period;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2016, 5, 12).unwrap();
    ///
    /// assert_eq!(Period::new(day1, day2).days().count(), 3);
    /// assert_eq!(Period::new(day2, day1).days().count(), 0);
    /// ```
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = Some(self.start).filter(|start| *start <= end);
        std::iter::successors(first, move |day| day.succ_opt().filter(|next| *next <= end))
    }

    /// Check if this period contains no day.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{PERIOD_SEPARATOR}{}", self.start, self.end)
    }
}

// ExcludedItem

/// One element of a list of excluded days.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ExcludedItem {
    Day(NaiveDate),
    Period(Period),
}

impl ExcludedItem {
    /// Iterate over the days covered by this item.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let period = match *self {
            Self::Day(day) => Period::new(day, day),
            Self::Period(period) => period,
        };

        period.days()
    }
}

impl Display for ExcludedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{day}"),
            Self::Period(period) => write!(f, "{period}"),
        }
    }
}

// Properties

/// A set of key-value pairs, as read from a properties file.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a key, returning the value it replaces.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.0 {
            writeln!(f, "{key}={value}")?;
        }

        Ok(())
    }
}
