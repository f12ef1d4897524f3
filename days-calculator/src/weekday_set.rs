use std::fmt;

use chrono::Weekday;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of days of week, using a u8-based bit array.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Create a new set that does not include any day of week.
    ///
    /// ```
    /// use days_calculator::WeekdaySet;
    ///
    /// let set = WeekdaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a new set that includes all days of week.
    pub const fn all() -> Self {
        Self(0b111_1111)
    }

    fn bit(wday: Weekday) -> u8 {
        1 << wday.num_days_from_monday()
    }

    /// Include a day of week in this set. Return false if it was already
    /// included.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use days_calculator::WeekdaySet;
    ///
    /// let mut set = WeekdaySet::new();
    /// assert!(set.insert(Weekday::Sat));
    /// assert!(!set.insert(Weekday::Sat));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, wday: Weekday) -> bool {
        let included = self.contains(wday);
        self.0 |= Self::bit(wday);
        !included
    }

    /// Check if this set includes the given day of week.
    pub fn contains(self, wday: Weekday) -> bool {
        self.0 & Self::bit(wday) != 0
    }

    /// Count the number of days of week included in this set.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the days of week included in this set, starting from
    /// monday.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use days_calculator::WeekdaySet;
    ///
    /// let set: WeekdaySet = [Weekday::Sun, Weekday::Mon].into_iter().collect();
    /// let days: Vec<_> = set.iter().collect();
    /// assert_eq!(days, [Weekday::Mon, Weekday::Sun]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS.into_iter().filter(move |wday| self.contains(*wday))
    }
}

impl Extend<Weekday> for WeekdaySet {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for wday in iter {
            self.insert(wday);
        }
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl fmt::Debug for WeekdaySet {
    /// ```
    /// use chrono::Weekday;
    /// use days_calculator::WeekdaySet;
    ///
    /// let set: WeekdaySet = [Weekday::Sat, Weekday::Sun].into_iter().collect();
    /// assert_eq!(format!("{set:?}"), "{Sat, Sun}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
