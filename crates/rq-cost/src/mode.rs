//! Route evaluation mode.

use std::str::FromStr;

use crate::CostError;

/// What a route is judged by: raw length, or travel time with penalties.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostMode {
    /// Sum of edge lengths in metres.
    Distance,
    /// Travel time in minutes including congestion and signal delays.
    Time,
}

impl FromStr for CostMode {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(CostMode::Distance),
            "time" => Ok(CostMode::Time),
            other => Err(CostError::InvalidMode(other.to_string())),
        }
    }
}
