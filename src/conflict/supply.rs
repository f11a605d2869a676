//! Supply network - an actor's stocks and the rates at which they bleed away
//!
//! There is no replenishment: every stock is non-increasing over a campaign.

use serde::{Deserialize, Serialize};

use crate::conflict::constants::{
    DEFAULT_CORRUPTION_RATE, DEFAULT_CYBER_INTERFERENCE_RATE, DEFAULT_DELAY_RATE,
    DEFAULT_INTERDICTION_RATE, DEFAULT_LOSS_RATE,
};

/// Number of stock levels tracked by a supply network
pub const STOCK_COUNT: usize = 7;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyNetwork {
    pub fuel: f64,
    pub food: f64,
    pub spare_parts: f64,
    pub industrial_capacity: f64,
    pub data_bandwidth: f64,
    pub political_capital: f64,
    pub public_tolerance: f64,

    // Decay rates (0.0 to 1.0), fixed per network
    #[serde(default = "default_loss_rate")]
    pub loss_rate: f64,
    #[serde(default = "default_delay_rate")]
    pub delay_rate: f64,
    #[serde(default = "default_corruption_rate")]
    pub corruption_rate: f64,
    #[serde(default = "default_interdiction_rate")]
    pub interdiction_rate: f64,
    #[serde(default = "default_cyber_interference_rate")]
    pub cyber_interference_rate: f64,
}

fn default_loss_rate() -> f64 {
    DEFAULT_LOSS_RATE
}

fn default_delay_rate() -> f64 {
    DEFAULT_DELAY_RATE
}

fn default_corruption_rate() -> f64 {
    DEFAULT_CORRUPTION_RATE
}

fn default_interdiction_rate() -> f64 {
    DEFAULT_INTERDICTION_RATE
}

fn default_cyber_interference_rate() -> f64 {
    DEFAULT_CYBER_INTERFERENCE_RATE
}

/// Amount each stock lost in one call to [`SupplyNetwork::degrade`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SupplyLosses {
    pub fuel: f64,
    pub food: f64,
    pub spare_parts: f64,
    pub industrial_capacity: f64,
    pub data_bandwidth: f64,
    pub political_capital: f64,
    pub public_tolerance: f64,
}

impl SupplyNetwork {
    /// Create a network with the given stocks and default decay rates
    pub fn new(
        fuel: f64,
        food: f64,
        spare_parts: f64,
        industrial_capacity: f64,
        data_bandwidth: f64,
        political_capital: f64,
        public_tolerance: f64,
    ) -> Self {
        Self {
            fuel,
            food,
            spare_parts,
            industrial_capacity,
            data_bandwidth,
            political_capital,
            public_tolerance,
            loss_rate: DEFAULT_LOSS_RATE,
            delay_rate: DEFAULT_DELAY_RATE,
            corruption_rate: DEFAULT_CORRUPTION_RATE,
            interdiction_rate: DEFAULT_INTERDICTION_RATE,
            cyber_interference_rate: DEFAULT_CYBER_INTERFERENCE_RATE,
        }
    }

    /// Apply one week of attrition to every stock
    ///
    /// Returns what was lost, for reporting.
    pub fn degrade(&mut self) -> SupplyLosses {
        let losses = SupplyLosses {
            fuel: self.fuel * self.loss_rate,
            food: self.food * self.loss_rate,
            spare_parts: self.spare_parts * self.loss_rate,
            industrial_capacity: self.industrial_capacity * self.delay_rate,
            data_bandwidth: self.data_bandwidth * self.cyber_interference_rate,
            political_capital: self.political_capital * self.corruption_rate,
            public_tolerance: self.public_tolerance * self.interdiction_rate,
        };

        self.fuel = (self.fuel - losses.fuel).max(0.0);
        self.food = (self.food - losses.food).max(0.0);
        self.spare_parts = (self.spare_parts - losses.spare_parts).max(0.0);
        self.industrial_capacity = (self.industrial_capacity - losses.industrial_capacity).max(0.0);
        self.data_bandwidth = (self.data_bandwidth - losses.data_bandwidth).max(0.0);
        self.political_capital = (self.political_capital - losses.political_capital).max(0.0);
        self.public_tolerance = (self.public_tolerance - losses.public_tolerance).max(0.0);

        losses
    }

    /// The seven stock levels in declaration order
    pub fn stocks(&self) -> [f64; STOCK_COUNT] {
        [
            self.fuel,
            self.food,
            self.spare_parts,
            self.industrial_capacity,
            self.data_bandwidth,
            self.political_capital,
            self.public_tolerance,
        ]
    }

    /// Mean of the seven stock levels
    pub fn resilience_score(&self) -> f64 {
        self.stocks().iter().sum::<f64>() / STOCK_COUNT as f64
    }
}
