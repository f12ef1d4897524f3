use std::collections::HashMap;

use chrono::Weekday;

use crate::properties::{END_DATE_KEY, EXCLUDED_DAYS_KEY, EXCLUDED_WEEKDAYS_KEY, START_DATE_KEY};
use crate::{date, DaysCalculator, Error, ParserError, Properties};

#[test]
fn configuration() -> Result<(), Error> {
    // 2016-06-06 is the first monday of june
    let properties: Properties = [
        (START_DATE_KEY, "2016-06-06"),
        (END_DATE_KEY, "2016-06-17"),
        (EXCLUDED_DAYS_KEY, "2016-06-07, 2016-06-08, 2016-06-12->2016-06-15"),
        (EXCLUDED_WEEKDAYS_KEY, "THURSDAY, FRIDAY"),
    ]
    .into_iter()
    .collect();

    let dc = DaysCalculator::new().configure(&properties)?;
    assert_eq!(dc.calculate()?, 2);
    Ok(())
}

#[test]
fn mixed_days_and_periods() -> Result<(), Error> {
    let dc = DaysCalculator::new().configure([
        ("startDate", "2016-06-01"),
        ("endDate", "2016-06-10"),
        ("excludedDays", "2016-06-01, 2016-06-05->2016-06-08"),
    ])?;

    assert_eq!(dc.excluded_days().len(), 5);
    assert_eq!(dc.calculate()?, 5);

    for day in ["2016-06-01", "2016-06-05", "2016-06-06", "2016-06-07", "2016-06-08"] {
        assert!(!dc.is_counted(date!(day)), "{day} should be excluded");
    }

    Ok(())
}

#[test]
fn configure_from_hash_map() -> Result<(), Error> {
    let mut properties = HashMap::new();
    properties.insert("startDate".to_string(), "2016-05-09".to_string());
    properties.insert("endDate".to_string(), "2016-05-15".to_string());
    properties.insert("excludedDaysOfWeeks".to_string(), "SATURDAY,SUNDAY".to_string());

    let dc = DaysCalculator::new().configure(properties)?;
    assert_eq!(dc.calculate()?, 5);
    Ok(())
}

#[test]
fn unknown_keys_are_ignored() -> Result<(), Error> {
    let dc = DaysCalculator::new().configure([
        ("startDate", "2016-05-10"),
        ("endDate", "2016-05-12"),
        ("startdate", "not a date"),
        ("excludedDaysOfWeek", "not a weekday"),
        ("", ""),
    ])?;

    assert_eq!(dc.calculate()?, 3);
    Ok(())
}

#[test]
fn empty_configuration() -> Result<(), Error> {
    let dc = DaysCalculator::new().configure(Vec::<(&str, &str)>::new())?;
    assert_eq!(dc, DaysCalculator::new());

    let dc = DaysCalculator::new().configure([("excludedDays", ""), ("excludedDaysOfWeeks", " ")])?;
    assert_eq!(dc, DaysCalculator::new());
    Ok(())
}

#[test]
fn configuration_overrides_range() -> Result<(), Error> {
    let dc = DaysCalculator::new()
        .start_at(date!("2016-01-01"))
        .end_at(date!("2016-12-31"))
        .exclude_sundays()
        .configure([("startDate", "2016-05-09"), ("endDate", "2016-05-15")])?
        .exclude_saturdays();

    assert_eq!(dc.start_date(), Some(date!("2016-05-09")));
    assert_eq!(dc.calculate()?, 5);
    Ok(())
}

#[test]
fn invalid_configuration() {
    let err = DaysCalculator::new()
        .configure([("startDate", "2016-13-40")])
        .unwrap_err();

    assert!(matches!(err, Error::Parse(ParserError::InvalidDate { .. })));

    let err = DaysCalculator::new()
        .configure([("excludedDays", "2016-06-01, 2016/06/02")])
        .unwrap_err();

    assert!(matches!(err, Error::Parse(ParserError::Syntax { .. })));
    assert!(err.to_string().contains("2016/06/02"), "{err}");

    let err = DaysCalculator::new()
        .configure([("excludedDays", "2016-06-01->2016-06-31")])
        .unwrap_err();

    assert!(matches!(err, Error::Parse(ParserError::InvalidDate { .. })));

    let err = DaysCalculator::new()
        .configure([("excludedDaysOfWeeks", "SATURDAY, Sunday")])
        .unwrap_err();

    assert!(matches!(err, Error::Parse(ParserError::UnknownWeekday { .. })));
}

#[test]
fn display_can_be_configured_back() -> Result<(), Error> {
    let dc = DaysCalculator::new()
        .start_at(date!("2016-06-01"))
        .end_at(date!("2016-07-31"))
        .exclude_day(date!("2016-06-03"))
        .exclude_period(date!("2016-06-10"), date!("2016-06-20"))
        .exclude_day(date!("2016-07-14"))
        .exclude_weekday(Weekday::Sun)
        .exclude_weekday(Weekday::Mon);

    assert_eq!(
        dc.to_string(),
        "startDate=2016-06-01\n\
         endDate=2016-07-31\n\
         excludedDays=2016-06-03,2016-06-10->2016-06-20,2016-07-14\n\
         excludedDaysOfWeeks=MONDAY,SUNDAY\n",
    );

    let properties = days_calculator_syntax::parse_properties(&dc.to_string())?;
    let parsed = DaysCalculator::new().configure(&properties)?;
    assert_eq!(parsed, dc);
    assert_eq!(parsed.calculate()?, dc.calculate()?);
    Ok(())
}
