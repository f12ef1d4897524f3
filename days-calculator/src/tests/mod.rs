mod configure;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a calculator over a range given as ISO-8601 dates.
fn range(start: &str, end: &str) -> crate::DaysCalculator {
    crate::DaysCalculator::new()
        .start_at(date!(start))
        .end_at(date!(end))
}

/// Records emitted through `log`, kept per thread so that tests running in
/// parallel only see their own records.
#[cfg(feature = "log")]
mod logs {
    use std::cell::RefCell;
    use std::sync::Once;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    /// Run `f` and return the records it logged.
    pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
        static INIT: Once = Once::new();

        INIT.call_once(|| {
            log::set_logger(&CaptureLogger).expect("a logger is already installed");
            log::set_max_level(LevelFilter::Trace);
        });

        RECORDS.with(|records| records.borrow_mut().clear());
        let res = f();
        (res, RECORDS.with(RefCell::take))
    }

    /// Check if a record with given level contains `text`.
    pub(crate) fn contains(records: &[(Level, String)], level: Level, text: &str) -> bool {
        records
            .iter()
            .any(|(lvl, msg)| *lvl == level && msg.contains(text))
    }
}
