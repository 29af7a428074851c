use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Distance-from-courthouse band; the set of bands is defined by the cost tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DistanceBand(String);

impl DistanceBand {
    pub fn new(band: impl Into<String>) -> Self {
        Self(band.into().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DistanceBand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(DistanceBand::new)
    }
}

/// Values entered by the user, shared read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    /// Annual household income.
    pub income: f64,
    pub distance: DistanceBand,
}

impl UserInputs {
    pub fn new(income: f64, distance: impl Into<String>) -> Self {
        Self {
            income,
            distance: DistanceBand::new(distance),
        }
    }
}
