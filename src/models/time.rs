//! Time-of-day and weekday handling for recurring schedule entries.
//!
//! Schedule entries carry no date component: a time range plus a set of
//! weekdays. The wire format uses `"HH:MM"` or `"HH:MM:SS"` strings for
//! times and lowercase day names for weekdays; both are normalized here.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Weekday};
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserializer, Serializer};

/// Parse a time-of-day string, accepting both `"HH:MM"` and `"HH:MM:SS"`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .with_context(|| format!("Invalid time of day: {:?}", s))
}

/// Lowercase full name for a weekday, as used on the wire.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse a weekday from its full or three-letter name, case-insensitive.
pub fn weekday_from_name(s: &str) -> Result<Weekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => bail!("Invalid weekday name: {:?}", s),
    }
}

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Set of weekdays on which an entry recurs, stored as a 7-bit mask
/// (bit 0 = Monday).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub fn empty() -> Self {
        DaySet(0)
    }

    pub fn single(day: Weekday) -> Self {
        DaySet(1 << day.num_days_from_monday())
    }

    pub fn from_days<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        let mut set = DaySet::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days present in both sets.
    pub fn intersection(&self, other: &DaySet) -> DaySet {
        DaySet(self.0 & other.0)
    }

    pub fn intersects(&self, other: &DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate contained days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_DAYS.into_iter().filter(|d| self.contains(*d))
    }
}

impl std::fmt::Display for DaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(weekday_name).collect();
        write!(f, "{}", names.join(", "))
    }
}

// Serialized as an array of lowercase day names, e.g. ["monday", "wednesday"].
impl serde::Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for day in self.iter() {
            seq.serialize_element(weekday_name(day))?;
        }
        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DaySetVisitor;

        impl<'de> Visitor<'de> for DaySetVisitor {
            type Value = DaySet;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an array of weekday names")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<DaySet, A::Error> {
                let mut set = DaySet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    let day = weekday_from_name(&name).map_err(serde::de::Error::custom)?;
                    set.insert(day);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(DaySetVisitor)
    }
}

/// Serde adapter for `NaiveTime` fields using the wire format `"HH:MM:SS"`
/// on output and the lenient parser on input.
pub mod time_of_day_format {
    use super::parse_time_of_day;
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &NaiveTime,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_time_of_day(&s).map_err(serde::de::Error::custom)
    }
}
