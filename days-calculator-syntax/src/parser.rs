use chrono::{NaiveDate, Weekday};

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::rules::{ExcludedItem, Period, Properties};
use crate::{LIST_SEPARATOR, PERIOD_SEPARATOR};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DaysParser;

/// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`), surrounding
/// whitespaces being ignored.
///
/// ```
/// use chrono::NaiveDate;
/// use days_calculator_syntax::parse_date;
///
/// assert_eq!(parse_date("2016-05-10").unwrap(), NaiveDate::from_ymd_opt(2016, 5, 10).unwrap());
/// assert!(parse_date("2016-5-10").is_err());
/// assert!(parse_date("2016-13-40").is_err());
/// ```
pub fn parse_date(data: &str) -> Result<NaiveDate> {
    let pair = parse_single(Rule::input_date, data, "an ISO-8601 date (YYYY-MM-DD)")?;
    build_date(pair)
}

/// Parse two dates joined by `->`.
///
/// ```
/// use days_calculator_syntax::{parse_period, Error};
///
/// let period = parse_period("2016-05-10->2016-05-15").unwrap();
/// assert_eq!(period.days().count(), 6);
///
/// assert!(matches!(
///     parse_period("2016-05-10"),
///     Err(Error::MissingPeriodSeparator { .. }),
/// ));
/// ```
pub fn parse_period(data: &str) -> Result<Period> {
    if !data.contains(PERIOD_SEPARATOR) {
        return Err(Error::MissingPeriodSeparator { value: data.to_string() });
    }

    let pair = parse_single(
        Rule::input_period,
        data,
        "two ISO-8601 dates joined by `->` (YYYY-MM-DD->YYYY-MM-DD)",
    )?;

    build_period(pair)
}

/// Parse the uppercase english name of a day of week.
///
/// ```
/// use chrono::Weekday;
/// use days_calculator_syntax::parse_weekday;
///
/// assert_eq!(parse_weekday("SATURDAY").unwrap(), Weekday::Sat);
/// assert!(parse_weekday("Saturday").is_err());
/// ```
pub fn parse_weekday(data: &str) -> Result<Weekday> {
    let pair = DaysParser::parse(Rule::input_weekday, data)
        .map_err(|_| Error::UnknownWeekday { value: data.to_string() })?
        .next()
        .expect("grammar error: no weekday found");

    Ok(build_weekday(pair))
}

/// Split a comma-separated list, trimming its elements and skipping empty
/// ones.
///
/// ```
/// use days_calculator_syntax::split_list;
///
/// let items: Vec<_> = split_list(" 2016-06-01, 2016-06-05->2016-06-08 ,").collect();
/// assert_eq!(items, ["2016-06-01", "2016-06-05->2016-06-08"]);
/// ```
pub fn split_list(data: &str) -> impl Iterator<Item = &str> {
    data.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Parse a list of excluded days, where each element is either a single date
/// or a period.
///
/// ```
/// use days_calculator_syntax::parse_excluded_days;
/// use days_calculator_syntax::rules::ExcludedItem;
///
/// let items = parse_excluded_days("2016-06-01, 2016-06-05->2016-06-08").unwrap();
/// assert!(matches!(items[0], ExcludedItem::Day(_)));
/// assert!(matches!(items[1], ExcludedItem::Period(_)));
/// ```
pub fn parse_excluded_days(data: &str) -> Result<Vec<ExcludedItem>> {
    split_list(data)
        .map(|item| {
            if item.contains(PERIOD_SEPARATOR) {
                parse_period(item).map(ExcludedItem::Period)
            } else {
                parse_date(item).map(ExcludedItem::Day)
            }
        })
        .collect()
}

/// Parse a list of days of week.
///
/// ```
/// use chrono::Weekday;
/// use days_calculator_syntax::parse_weekdays;
///
/// assert_eq!(
///     parse_weekdays("SATURDAY, SUNDAY").unwrap(),
///     [Weekday::Sat, Weekday::Sun],
/// );
/// ```
pub fn parse_weekdays(data: &str) -> Result<Vec<Weekday>> {
    split_list(data).map(parse_weekday).collect()
}

/// Parse the content of a properties file.
///
/// ```
/// use days_calculator_syntax::parse_properties;
///
/// let properties = parse_properties("# range\nstartDate=2016-05-10\nendDate : 2016-05-12\n").unwrap();
/// assert_eq!(properties.get("startDate"), Some("2016-05-10"));
/// assert_eq!(properties.get("endDate"), Some("2016-05-12"));
/// ```
pub fn parse_properties(data: &str) -> Result<Properties> {
    let pairs = DaysParser::parse(Rule::input_properties, data)
        .map_err(|err| Error::syntax(data, "a properties file", err))?;

    let mut properties = Properties::new();

    for pair in pairs {
        match pair.as_rule() {
            Rule::entry => {
                let (key, value) = build_entry(pair);

                if properties.insert(key, value).is_some() {
                    #[cfg(feature = "log")]
                    log::debug!("Property `{key}` is defined several times, last value is kept");
                }
            }
            Rule::EOI => {}
            other => unexpected_token(other, Rule::input_properties),
        }
    }

    Ok(properties)
}

// ---
// --- Helpers
// ---

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn parse_single<'i>(rule: Rule, data: &'i str, expected: &'static str) -> Result<Pair<'i, Rule>> {
    let pair = DaysParser::parse(rule, data)
        .map_err(|err| Error::syntax(data, expected, err))?
        .next()
        .expect("grammar error: empty input rule");

    Ok(pair)
}

// ---
// --- Dates
// ---

fn build_date(pair: Pair<Rule>) -> Result<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::date);
    let raw = pair.as_str();
    let mut pairs = pair.into_inner();

    let year = build_year(pairs.next().expect("missing year"));
    let month = build_month(pairs.next().expect("missing month"));
    let day = build_day(pairs.next().expect("missing day"));

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidDate { value: raw.to_string() })
}

fn build_year(pair: Pair<Rule>) -> i32 {
    assert_eq!(pair.as_rule(), Rule::year);
    pair.as_str().parse().expect("invalid year format")
}

fn build_month(pair: Pair<Rule>) -> u32 {
    assert_eq!(pair.as_rule(), Rule::month);
    pair.as_str().parse().expect("invalid month format")
}

fn build_day(pair: Pair<Rule>) -> u32 {
    assert_eq!(pair.as_rule(), Rule::day);
    pair.as_str().parse().expect("invalid day format")
}

fn build_period(pair: Pair<Rule>) -> Result<Period> {
    assert_eq!(pair.as_rule(), Rule::period);
    let mut pairs = pair.into_inner();
    let start = build_date(pairs.next().expect("missing period start"))?;
    let end = build_date(pairs.next().expect("missing period end"))?;
    Ok(Period::new(start, end))
}

// ---
// --- Weekdays
// ---

fn build_weekday(pair: Pair<Rule>) -> Weekday {
    assert_eq!(pair.as_rule(), Rule::weekday);
    let pair = pair.into_inner().next().expect("empty week day");

    match pair.as_rule() {
        Rule::monday => Weekday::Mon,
        Rule::tuesday => Weekday::Tue,
        Rule::wednesday => Weekday::Wed,
        Rule::thursday => Weekday::Thu,
        Rule::friday => Weekday::Fri,
        Rule::saturday => Weekday::Sat,
        Rule::sunday => Weekday::Sun,
        other => unexpected_token(other, Rule::weekday),
    }
}

// ---
// --- Properties
// ---

fn build_entry<'i>(pair: Pair<'i, Rule>) -> (&'i str, String) {
    assert_eq!(pair.as_rule(), Rule::entry);
    let mut pairs = pair.into_inner();
    let key = build_key(pairs.next().expect("missing property key"));

    let value = pairs.next().map(build_value).unwrap_or_default();

    (key, value)
}

fn build_key<'i>(pair: Pair<'i, Rule>) -> &'i str {
    assert_eq!(pair.as_rule(), Rule::key);
    pair.as_str()
}

/// Join the lines of a value that spans over several lines.
fn build_value(pair: Pair<Rule>) -> String {
    assert_eq!(pair.as_rule(), Rule::value);

    pair.into_inner()
        .map(|part| {
            assert_eq!(part.as_rule(), Rule::value_part);
            part.as_str()
        })
        .collect()
}
