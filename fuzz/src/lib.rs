//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{Days, NaiveDate, Weekday};

use std::fmt::Debug;

use days_calculator::DaysCalculator;

/// Longest range that will be evaluated, in days.
const MAX_RANGE_LEN: u64 = 366 * 20;

/// First day that can be picked by the fuzzer.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1990, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub start: u16,
    pub len: u16,
    pub excluded_days: String,
    pub excluded_weekdays: u8,
    pub periods: Vec<(u16, u8)>,
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// Compare the result with a naive count.
    Count,
    /// Compare with a calculator configured from the formatted properties.
    Stringified,
    /// Compare with a calculator where periods are excluded day by day.
    ExpandPeriods,
}

impl Data {
    fn start_date(&self) -> NaiveDate {
        EPOCH + Days::new(self.start.into())
    }

    fn end_date(&self) -> NaiveDate {
        self.start_date() + Days::new(u64::from(self.len) % MAX_RANGE_LEN)
    }

    fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        std::iter::successors(Some(Weekday::Mon), |wday| Some(wday.succ()))
            .take(7)
            .enumerate()
            .filter(|(i, _)| self.excluded_weekdays & (1 << i) != 0)
            .map(|(_, wday)| wday)
    }

    fn periods(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate)> + '_ {
        self.periods.iter().map(|&(offset, len)| {
            let start = EPOCH + Days::new(offset.into());
            (start, start + Days::new(len.into()))
        })
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("start", &self.start_date())
            .field("end", &self.end_date())
            .field("excluded_days", &self.excluded_days)
            .field("excluded_weekdays", &self.weekdays().collect::<Vec<_>>())
            .field("periods", &self.periods().collect::<Vec<_>>())
            .field("operation", &self.operation)
            .finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_calculate(data: Data) -> bool {
    let base = DaysCalculator::new()
        .start_at(data.start_date())
        .end_at(data.end_date())
        .exclude_weekdays(data.weekdays());

    let Ok(base) = base.configure([("excludedDays", data.excluded_days.as_str())]) else {
        return false;
    };

    let dc = data
        .periods()
        .fold(base.clone(), |dc, (start, end)| dc.exclude_period(start, end));

    let count = dc.calculate().expect("range is fully specified");
    assert_eq!(count, dc.calculate().unwrap(), "calculate is not idempotent");

    match &data.operation {
        Operation::Count => {
            let expected = data
                .start_date()
                .iter_days()
                .take_while(|day| *day <= data.end_date())
                .filter(|day| dc.is_counted(*day))
                .count();

            assert_eq!(usize::try_from(count).unwrap(), expected);
        }
        Operation::Stringified => {
            let properties = days_calculator_syntax::parse_properties(&dc.to_string())
                .unwrap_or_else(|err| {
                    eprintln!("[ERR] Initial calculator: {dc:?}");
                    eprintln!("[ERR] Invalid stringified calculator: {dc}");
                    panic!("{err}")
                });

            let dc_2 = DaysCalculator::new()
                .configure(&properties)
                .expect("could not configure from stringified calculator");

            assert_eq!(dc, dc_2);
            assert_eq!(count, dc_2.calculate().unwrap());
        }
        Operation::ExpandPeriods => {
            let dc_2 = data.periods().fold(base, |dc, (start, end)| {
                start
                    .iter_days()
                    .take_while(|day| *day <= end)
                    .fold(dc, DaysCalculator::exclude_day)
            });

            assert_eq!(dc, dc_2);
            assert_eq!(count, dc_2.calculate().unwrap());
        }
    }

    true
}
