//! Incidence and endpoint query selectors.

use std::str::FromStr;

use crate::GraphError;

/// Which edges of a node an incidence query returns.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Edges whose end node is the queried node.
    Incoming,
    /// Edges whose start node is the queried node.
    Outgoing,
    /// Incoming edges followed by outgoing edges.
    Either,
}

impl FromStr for Direction {
    type Err = GraphError;

    /// Parse a configuration string.  Anything other than `"incoming"`,
    /// `"outgoing"` or `"either"` is rejected — the typed enum makes bad
    /// values unrepresentable past this boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(Direction::Incoming),
            "outgoing" => Ok(Direction::Outgoing),
            "either" => Ok(Direction::Either),
            other => Err(GraphError::InvalidDirection(other.to_string())),
        }
    }
}

/// Which endpoint of an edge an endpoint query returns.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Start,
    End,
}
