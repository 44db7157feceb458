//! Definition for the [`CostPolicy`] type, implemented by an enum.
//!
//! The policy picks which edge weight drives the search. The other
//! weight is still summed along the winning path so both totals can be
//! reported.
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::router::router_types::edge::Edge;

/// Which edge weight a route is optimized for.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Default, Serialize, Deserialize)]
pub enum CostPolicy {
    /// Rank paths by cumulative distance.
    #[serde(rename = "distance")]
    ByDistance,
    /// Rank paths by cumulative toll.
    #[default]
    #[serde(rename = "toll")]
    ByToll,
}

impl CostPolicy {
    /// The weight the search minimizes.
    pub fn active_weight(&self, edge: &Edge) -> f64 {
        match self {
            CostPolicy::ByDistance => edge.distance.into_inner(),
            CostPolicy::ByToll => edge.toll.into_inner(),
        }
    }

    /// The weight accumulated alongside the active one.
    pub fn passive_weight(&self, edge: &Edge) -> f64 {
        match self {
            CostPolicy::ByDistance => edge.toll.into_inner(),
            CostPolicy::ByToll => edge.distance.into_inner(),
        }
    }

    /// Maps `(active, passive)` totals back to `(distance, toll)`.
    pub fn label_metrics(&self, active: f64, passive: f64) -> (f64, f64) {
        match self {
            CostPolicy::ByDistance => (active, passive),
            CostPolicy::ByToll => (passive, active),
        }
    }
}

impl Display for CostPolicy {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CostPolicy::ByDistance => write!(f, "distance"),
            CostPolicy::ByToll => write!(f, "toll"),
        }
    }
}

impl FromStr for CostPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "shortest" => Ok(CostPolicy::ByDistance),
            "toll" | "cheapest" | "cost" => Ok(CostPolicy::ByToll),
            other => Err(format!(
                "unknown cost policy '{}', expected 'distance' or 'toll'",
                other
            )),
        }
    }
}
