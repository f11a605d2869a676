//! Trade routes between regions

use serde::{Deserialize, Serialize};

use crate::conflict::constants::{DISRUPTION_RISK_GAIN, DISRUPTION_THROUGHPUT_LOSS};

/// A trade route linking two regions by name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRoute {
    pub name: String,
    /// Region name
    pub origin: String,
    /// Region name
    pub destination: String,
    pub throughput: f64,
    /// 0.0 to 1.0
    pub risk: f64,
    pub chokepoint: bool,
}

impl TradeRoute {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        throughput: f64,
        risk: f64,
        chokepoint: bool,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            destination: destination.into(),
            throughput,
            risk,
            chokepoint,
        }
    }

    /// Raise risk and choke throughput under the given pressure
    pub fn apply_disruption(&mut self, pressure: f64) {
        self.risk = (self.risk + pressure * DISRUPTION_RISK_GAIN).min(1.0);
        self.throughput = (self.throughput * (1.0 - pressure * DISRUPTION_THROUGHPUT_LOSS)).max(0.0);
    }
}
