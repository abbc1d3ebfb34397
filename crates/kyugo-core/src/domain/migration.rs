use chrono::{NaiveDateTime, TimeDelta, Timelike};
use std::fmt;

const STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Ordering prefix of a migration pair, second resolution.
///
/// Renders as a 14-digit `YYYYMMDDHHMMSS` token, the layout
/// golang-migrate sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MigrationStamp(NaiveDateTime);

impl MigrationStamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at.with_nanosecond(0).unwrap_or(at))
    }

    pub fn token(&self) -> String {
        self.0.format(STAMP_FORMAT).to_string()
    }

    /// The stamp one second later.
    pub fn next(self) -> Self {
        Self(self.0 + TimeDelta::seconds(1))
    }

    pub fn up_file_name(&self, table: &str) -> String {
        format!("{}_{}.up.sql", self.token(), table)
    }

    pub fn down_file_name(&self, table: &str) -> String {
        format!("{}_{}.down.sql", self.token(), table)
    }

    /// Whether an existing file in the migrations directory already uses
    /// this stamp.
    pub fn is_taken_by(&self, file_name: &str) -> bool {
        let token = self.token();
        file_name
            .strip_prefix(token.as_str())
            .is_some_and(|rest| rest.starts_with('_'))
    }

    /// First stamp at or after `self` not used by any of `existing`.
    pub fn first_free<'a, I>(self, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let mut stamp = self;
        while existing.clone().into_iter().any(|name| stamp.is_taken_by(name)) {
            stamp = stamp.next();
        }
        stamp
    }
}

impl fmt::Display for MigrationStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
