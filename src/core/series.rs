use serde::{Deserialize, Deserializer, Serialize};
use serde_with::serde_as;

use crate::core::reading::EnergyReading;

/// Readings in chronological order, the most recent one last.
#[must_use]
#[derive(Clone, Debug, Default, Serialize, derive_more::Deref, derive_more::IntoIterator)]
pub struct Series(Vec<EnergyReading>);

impl From<Vec<EnergyReading>> for Series {
    /// Stable sort so that readings sharing a timestamp keep their arrival order.
    fn from(mut readings: Vec<EnergyReading>) -> Self {
        readings.sort_by_key(|reading| reading.timestamp);
        Self(readings)
    }
}

impl FromIterator<EnergyReading> for Series {
    fn from_iter<T: IntoIterator<Item = EnergyReading>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'de> Deserialize<'de> for Series {
    /// Malformed records are dropped here, before they ever reach the analytics.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[serde_as]
        #[derive(Deserialize)]
        struct Received(#[serde_as(as = "serde_with::VecSkipError<_>")] Vec<EnergyReading>);

        Ok(Self::from(Received::deserialize(deserializer)?.0))
    }
}
