use std::str::FromStr;

use bon::Builder;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::quantity::{fuel::LitresPerHour, percentage::Percentage, power::Kilowatts};

/// Single telemetry sample as it comes from the API.
///
/// The field names are the wire contract with the upstream producers.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Builder, Deserialize, Serialize)]
pub struct EnergyReading {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,

    pub solar_output: Kilowatts,

    /// State of charge, not validated against `0..=100`.
    pub battery_level: Percentage,

    pub diesel_usage: LitresPerHour,
}

/// Accept RFC 3339 timestamps, and treat offset-less ones as UTC.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let timestamp = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&timestamp)
        .map(|timestamp| timestamp.to_utc())
        .or_else(|_| NaiveDateTime::from_str(&timestamp).map(|timestamp| timestamp.and_utc()))
        .map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&timestamp), &"an ISO 8601 timestamp")
        })
}
