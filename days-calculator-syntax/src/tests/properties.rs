use crate::parse_properties;
use crate::rules::Properties;

#[test]
fn simple_entries() {
    let properties = parse_properties(
        "startDate=2016-05-10\n\
         endDate=2016-05-12\n\
         excludedDaysOfWeeks=SATURDAY, SUNDAY",
    )
    .unwrap();

    assert_eq!(properties.len(), 3);
    assert_eq!(properties.get("startDate"), Some("2016-05-10"));
    assert_eq!(properties.get("endDate"), Some("2016-05-12"));
    assert_eq!(properties.get("excludedDaysOfWeeks"), Some("SATURDAY, SUNDAY"));
}

#[test]
fn separators() {
    let properties = parse_properties("a=1\nb = 2\nc:3\nd : 4\ne 5\n\tf\t=\t6\n").unwrap();

    assert_eq!(
        properties,
        [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5"), ("f", "6")]
            .into_iter()
            .collect::<Properties>(),
    );
}

#[test]
fn comments_and_blank_lines() {
    let properties = parse_properties(
        "# A comment\n\
         \n\
         ! Another comment\n   \n\
         \x20   # An indented comment\n\
         startDate=2016-05-10\r\n\
         endDate=2016-05-12 # not a comment\n",
    )
    .unwrap();

    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get("startDate"), Some("2016-05-10"));
    assert_eq!(properties.get("endDate"), Some("2016-05-12 # not a comment"));
}

#[test]
fn empty_values_and_keys() {
    let properties = parse_properties("excludedDays=\nflag\n=orphan\n").unwrap();
    assert_eq!(properties.get("excludedDays"), Some(""));
    assert_eq!(properties.get("flag"), Some(""));
    assert_eq!(properties.get(""), Some("orphan"));
}

#[test]
fn continuation_lines() {
    let properties = parse_properties(
        "excludedDays=2016-06-01, \\\n    2016-06-05->2016-06-08, \\\r\n\t2016-06-10\nendDate=2016-06-30",
    )
    .unwrap();

    assert_eq!(
        properties.get("excludedDays"),
        Some("2016-06-01, 2016-06-05->2016-06-08, 2016-06-10"),
    );

    assert_eq!(properties.get("endDate"), Some("2016-06-30"));
}

#[test]
fn duplicated_keys_keep_last_value() {
    let properties = parse_properties("startDate=2016-05-10\nstartDate=2016-05-11\n").unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties.get("startDate"), Some("2016-05-11"));
}

#[test]
fn empty_file() {
    assert!(parse_properties("").unwrap().is_empty());
    assert!(parse_properties("\n\n# nothing\n").unwrap().is_empty());
}

#[test]
fn display_can_be_parsed_back() {
    let properties: Properties = [("startDate", "2016-05-10"), ("endDate", "2016-05-12")]
        .into_iter()
        .collect();

    assert_eq!(properties.to_string(), "endDate=2016-05-12\nstartDate=2016-05-10\n");
    assert_eq!(parse_properties(&properties.to_string()).unwrap(), properties);
}
