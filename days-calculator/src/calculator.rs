use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};

use days_calculator_syntax::rules::{weekday_name, ExcludedItem, Period};
use days_calculator_syntax::{parse_date, parse_excluded_days, parse_weekday, parse_weekdays};

use crate::error::{Error, Result};
use crate::properties::{
    self, END_DATE_KEY, EXCLUDED_DAYS_KEY, EXCLUDED_WEEKDAYS_KEY, START_DATE_KEY,
};
use crate::weekday_set::WeekdaySet;
use crate::ParserError;

// DaysCalculator

/// Counts the days of an inclusive range of dates, skipping excluded dates
/// and excluded days of week.
///
/// ```
/// use days_calculator::DaysCalculator;
///
/// let calculator = DaysCalculator::new()
///     .start_at_str("2016-05-09")?
///     .end_at_str("2016-05-15")?
///     .exclude_day_str("2016-05-10")?
///     .exclude_saturdays()
///     .exclude_sundays();
///
/// assert_eq!(calculator.calculate()?, 4);
/// # Ok::<(), days_calculator::Error>(())
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DaysCalculator {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    excluded_days: BTreeSet<NaiveDate>,
    excluded_weekdays: WeekdaySet,
}

impl DaysCalculator {
    /// Create a calculator with no range and no exclusion.
    pub fn new() -> Self {
        Self::default()
    }

    // --
    // -- Range
    // --

    /// Set the first day of the range, which is included.
    pub fn start_at(self, start_date: NaiveDate) -> Self {
        Self { start_date: Some(start_date), ..self }
    }

    /// Set the first day of the range from an ISO-8601 date.
    pub fn start_at_str(self, start_date: &str) -> Result<Self> {
        Ok(self.start_at(parse_date(start_date)?))
    }

    /// Set the last day of the range, which is included.
    pub fn end_at(self, end_date: NaiveDate) -> Self {
        Self { end_date: Some(end_date), ..self }
    }

    /// Set the last day of the range from an ISO-8601 date.
    pub fn end_at_str(self, end_date: &str) -> Result<Self> {
        Ok(self.end_at(parse_date(end_date)?))
    }

    // --
    // -- Excluded days
    // --

    /// Exclude a single day.
    pub fn exclude_day(mut self, day: NaiveDate) -> Self {
        self.excluded_days.insert(day);
        self
    }

    /// Exclude a single day given as an ISO-8601 date.
    pub fn exclude_day_str(self, day: &str) -> Result<Self> {
        Ok(self.exclude_day(parse_date(day)?))
    }

    /// Exclude a collection of days.
    pub fn exclude_days(mut self, days: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.excluded_days.extend(days);
        self
    }

    /// Exclude a collection of days given as ISO-8601 dates. Nothing is
    /// excluded if any of them is invalid.
    pub fn exclude_days_str<S: AsRef<str>>(self, days: impl IntoIterator<Item = S>) -> Result<Self> {
        let days: Vec<_> = days
            .into_iter()
            .map(|day| parse_date(day.as_ref()))
            .collect::<std::result::Result<_, _>>()?;

        Ok(self.exclude_days(days))
    }

    /// Exclude all days from `start` to `end`, both included. Nothing is
    /// excluded if `end` is before `start`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use days_calculator::DaysCalculator;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2016, 5, d).unwrap();
    ///
    /// let calculator = DaysCalculator::new()
    ///     .start_at(day(1))
    ///     .end_at(day(11))
    ///     .exclude_period(day(2), day(7));
    ///
    /// assert_eq!(calculator.calculate()?, 5);
    /// # Ok::<(), days_calculator::Error>(())
    /// ```
    pub fn exclude_period(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.exclude_days(Period::new(start, end).days())
    }

    /// Exclude a period written as two ISO-8601 dates joined by `->`, such as
    /// `2016-05-10->2016-05-15`.
    ///
    /// A period without a separator is ignored with a warning, while invalid
    /// dates in a period result in an error.
    pub fn exclude_period_str(self, period: &str) -> Result<Self> {
        match days_calculator_syntax::parse_period(period) {
            Ok(period) => Ok(self.exclude_period(period.start, period.end)),
            Err(ParserError::MissingPeriodSeparator { .. }) => {
                #[cfg(feature = "log")]
                log::warn!("Period ignored because no valid separator was found: {period}");
                Ok(self)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Exclude a collection of periods, see [`DaysCalculator::exclude_period_str`].
    pub fn exclude_periods_str<S: AsRef<str>>(
        self,
        periods: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        periods
            .into_iter()
            .try_fold(self, |calculator, period| {
                calculator.exclude_period_str(period.as_ref())
            })
    }

    fn exclude_item(self, item: ExcludedItem) -> Self {
        self.exclude_days(item.days())
    }

    // --
    // -- Excluded days of week
    // --

    /// Exclude all days falling on given day of week.
    pub fn exclude_weekday(mut self, wday: Weekday) -> Self {
        self.excluded_weekdays.insert(wday);
        self
    }

    /// Exclude a collection of days of week.
    pub fn exclude_weekdays(mut self, wdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.excluded_weekdays.extend(wdays);
        self
    }

    /// Exclude a collection of days of week given by their uppercase names,
    /// such as `SATURDAY`. Nothing is excluded if any of them is invalid.
    ///
    /// ```
    /// use days_calculator::DaysCalculator;
    ///
    /// assert!(DaysCalculator::new().exclude_weekdays_str(["SATURDAY", "SUNDAY"]).is_ok());
    /// assert!(DaysCalculator::new().exclude_weekdays_str(["Saturday"]).is_err());
    /// ```
    pub fn exclude_weekdays_str<S: AsRef<str>>(
        self,
        wdays: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let wdays: Vec<_> = wdays
            .into_iter()
            .map(|wday| parse_weekday(wday.as_ref()))
            .collect::<std::result::Result<_, _>>()?;

        Ok(self.exclude_weekdays(wdays))
    }

    pub fn exclude_mondays(self) -> Self {
        self.exclude_weekday(Weekday::Mon)
    }

    pub fn exclude_tuesdays(self) -> Self {
        self.exclude_weekday(Weekday::Tue)
    }

    pub fn exclude_wednesdays(self) -> Self {
        self.exclude_weekday(Weekday::Wed)
    }

    pub fn exclude_thursdays(self) -> Self {
        self.exclude_weekday(Weekday::Thu)
    }

    pub fn exclude_fridays(self) -> Self {
        self.exclude_weekday(Weekday::Fri)
    }

    pub fn exclude_saturdays(self) -> Self {
        self.exclude_weekday(Weekday::Sat)
    }

    pub fn exclude_sundays(self) -> Self {
        self.exclude_weekday(Weekday::Sun)
    }

    // --
    // -- Bulk configuration
    // --

    /// Apply a set of key-value pairs to this calculator. The recognized
    /// keys are listed in [`properties::KEYS`], other keys are ignored.
    ///
    /// ```
    /// use days_calculator::DaysCalculator;
    ///
    /// let calculator = DaysCalculator::new().configure([
    ///     ("startDate", "2016-06-01"),
    ///     ("endDate", "2016-06-10"),
    ///     ("excludedDays", "2016-06-01, 2016-06-05->2016-06-08"),
    ///     ("comment", "ignored"),
    /// ])?;
    ///
    /// assert_eq!(calculator.calculate()?, 5);
    /// # Ok::<(), days_calculator::Error>(())
    /// ```
    pub fn configure<K, V>(self, properties: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        properties
            .into_iter()
            .try_fold(self, |calculator, (key, value)| {
                calculator.configure_entry(key.as_ref(), value.as_ref())
            })
    }

    fn configure_entry(self, key: &str, value: &str) -> Result<Self> {
        match key {
            START_DATE_KEY => self.start_at_str(value),
            END_DATE_KEY => self.end_at_str(value),
            EXCLUDED_DAYS_KEY => Ok(parse_excluded_days(value)?
                .into_iter()
                .fold(self, Self::exclude_item)),
            EXCLUDED_WEEKDAYS_KEY => Ok(self.exclude_weekdays(parse_weekdays(value)?)),
            _ => {
                #[cfg(feature = "log")]
                log::debug!("Ignored unknown configuration key `{key}`");
                Ok(self)
            }
        }
    }

    /// Load a properties file and apply it to this calculator, see
    /// [`DaysCalculator::configure`].
    pub fn configure_from_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let properties = properties::load(path)?;
        self.configure(&properties)
    }

    // --
    // -- Evaluation
    // --

    /// First day of the range, if it was specified.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Last day of the range, if it was specified.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// All excluded days, including the ones outside of the range.
    pub fn excluded_days(&self) -> &BTreeSet<NaiveDate> {
        &self.excluded_days
    }

    pub fn excluded_weekdays(&self) -> WeekdaySet {
        self.excluded_weekdays
    }

    /// Excluded days grouped into periods of consecutive days.
    ///
    /// ```
    /// use days_calculator::{DaysCalculator, ExcludedItem};
    ///
    /// let calculator = DaysCalculator::new()
    ///     .exclude_period_str("2016-06-05->2016-06-08")?
    ///     .exclude_day_str("2016-06-01")?;
    ///
    /// let items: Vec<_> = calculator.excluded_items().map(|item| item.to_string()).collect();
    /// assert_eq!(items, ["2016-06-01", "2016-06-05->2016-06-08"]);
    /// # Ok::<(), days_calculator::Error>(())
    /// ```
    pub fn excluded_items(&self) -> impl Iterator<Item = ExcludedItem> + '_ {
        let mut days = self.excluded_days.iter().copied().peekable();

        std::iter::from_fn(move || {
            let start = days.next()?;
            let mut end = start;

            while let Some(next) = days.next_if(|day| end.succ_opt() == Some(*day)) {
                end = next;
            }

            if start == end {
                Some(ExcludedItem::Day(start))
            } else {
                Some(ExcludedItem::Period(Period::new(start, end)))
            }
        })
    }

    /// Check if a day is neither excluded nor falling on an excluded day of
    /// week, regardless of the range.
    pub fn is_counted(&self, day: NaiveDate) -> bool {
        !(self.excluded_days.contains(&day) || self.excluded_weekdays.contains(day.weekday()))
    }

    /// Count the days of the range that are not excluded.
    ///
    /// A range ending before it starts holds no day. The start and end dates
    /// must have been specified first.
    ///
    /// ```
    /// use days_calculator::{DaysCalculator, Error};
    ///
    /// let calculator = DaysCalculator::new().start_at_str("2016-05-10")?;
    /// assert!(matches!(calculator.calculate(), Err(Error::MissingEndDate)));
    ///
    /// let calculator = calculator.end_at_str("2016-05-10")?;
    /// assert_eq!(calculator.calculate()?, 1);
    /// # Ok::<(), days_calculator::Error>(())
    /// ```
    pub fn calculate(&self) -> Result<u32> {
        let start = self.start_date.ok_or(Error::MissingStartDate)?;
        let end = self.end_date.ok_or(Error::MissingEndDate)?;

        let count = Period::new(start, end)
            .days()
            .filter(|day| self.is_counted(*day))
            .count();

        Ok(count
            .try_into()
            .expect("number of days does not fit in supported date range"))
    }
}

impl Display for DaysCalculator {
    /// Write this configuration as properties that can be read back with
    /// [`DaysCalculator::configure`].
    ///
    /// ```
    /// use days_calculator::DaysCalculator;
    ///
    /// let calculator = DaysCalculator::new()
    ///     .start_at_str("2016-06-01")?
    ///     .end_at_str("2016-06-30")?
    ///     .exclude_period_str("2016-06-05->2016-06-08")?
    ///     .exclude_sundays();
    ///
    /// assert_eq!(
    ///     calculator.to_string(),
    ///     "startDate=2016-06-01\n\
    ///      endDate=2016-06-30\n\
    ///      excludedDays=2016-06-05->2016-06-08\n\
    ///      excludedDaysOfWeeks=SUNDAY\n",
    /// );
    /// # Ok::<(), days_calculator::Error>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(start_date) = self.start_date {
            writeln!(f, "{START_DATE_KEY}={start_date}")?;
        }

        if let Some(end_date) = self.end_date {
            writeln!(f, "{END_DATE_KEY}={end_date}")?;
        }

        if !self.excluded_days.is_empty() {
            write!(f, "{EXCLUDED_DAYS_KEY}=")?;
            write_list(f, self.excluded_items())?;
            writeln!(f)?;
        }

        if !self.excluded_weekdays.is_empty() {
            write!(f, "{EXCLUDED_WEEKDAYS_KEY}=")?;
            write_list(f, self.excluded_weekdays.iter().map(weekday_name))?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_list(
    f: &mut std::fmt::Formatter<'_>,
    mut seq: impl Iterator<Item = impl Display>,
) -> std::fmt::Result {
    let Some(first) = seq.next() else {
        return Ok(());
    };

    write!(f, "{first}")?;

    for elem in seq {
        write!(f, ",{elem}")?;
    }

    Ok(())
}
