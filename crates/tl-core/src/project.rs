//! Project records as supplied by the host.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A named date range to place on the timeline.
///
/// `start <= end` is not enforced here; the sweep validates it when
/// building entries so hosts get a structured error instead of a
/// reversed-duration segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name. Unnamed projects are labeled by position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the project begins.
    #[serde(deserialize_with = "de_timestamp")]
    pub start: DateTime<Utc>,
    /// When the project ends.
    #[serde(deserialize_with = "de_timestamp")]
    pub end: DateTime<Utc>,
}

impl Project {
    /// Creates an unnamed project.
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            name: None,
            start,
            end,
        }
    }

    /// Creates a named project.
    pub fn named(name: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.into()),
            start,
            end,
        }
    }

    /// The label to draw for this project, given its position in the input.
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Project {}", index + 1))
    }
}

/// Parses an RFC 3339 timestamp or a bare calendar date (midnight UTC).
///
/// Hosts commonly supply dates without a time-of-day component, so both
/// forms are accepted, the same leniency applied elsewhere to external
/// data.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            value.parse::<NaiveDate>().map(|date| {
                date.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap())
                    .and_utc()
            })
        })
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value).map_err(serde::de::Error::custom)
}
