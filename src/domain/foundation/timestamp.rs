//! UTC instants and the local calendar day they fall on.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, stored in UTC.
///
/// Windowing ("the last 14 days") is done with whole-day arithmetic on the
/// instant; grouping by day needs the author's offset, see [`Timestamp::date_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Strictly earlier than `other`.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    /// Strictly later than `other`.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }

    pub fn minus_days(&self, days: i64) -> Self {
        self.shift(-days)
    }

    pub fn plus_days(&self, days: i64) -> Self {
        self.shift(days)
    }

    /// `YYYY-MM-DD` of this instant on a clock at `offset`.
    pub fn date_key(&self, offset: FixedOffset) -> String {
        self.0.with_timezone(&offset).date_naive().format("%Y-%m-%d").to_string()
    }

    fn shift(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }
}
