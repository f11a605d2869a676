//! Information state - how well an actor can see the war it is fighting

use serde::{Deserialize, Serialize};

use crate::conflict::constants::{
    MAX_LATENCY, SHOCK_DISTORTION_GAIN, SHOCK_LATENCY_GAIN, SHOCK_RELIABILITY_LOSS,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InformationState {
    /// 0.0 to 1.0
    pub reliability: f64,
    /// 0.0 to 5.0
    pub latency: f64,
    /// 0.0 to 1.0
    pub distortion: f64,
}

impl InformationState {
    pub fn new(reliability: f64, latency: f64, distortion: f64) -> Self {
        Self {
            reliability,
            latency,
            distortion,
        }
    }

    /// Degrade the picture by a shock of the given magnitude
    pub fn apply_shock(&mut self, magnitude: f64) {
        self.reliability = (self.reliability - magnitude * SHOCK_RELIABILITY_LOSS).max(0.0);
        self.latency = (self.latency + magnitude * SHOCK_LATENCY_GAIN).min(MAX_LATENCY);
        self.distortion = (self.distortion + magnitude * SHOCK_DISTORTION_GAIN).min(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shock_formula() {
        let mut info = InformationState::new(0.8, 0.6, 0.2);
        info.apply_shock(0.1);
        assert!((info.reliability - 0.76).abs() < 1e-9);
        assert!((info.latency - 0.66).abs() < 1e-9);
        assert!((info.distortion - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_shock_clamps() {
        let mut info = InformationState::new(0.1, 4.9, 0.9);
        info.apply_shock(2.0);
        assert_eq!(info.reliability, 0.0);
        assert_eq!(info.latency, MAX_LATENCY);
        assert_eq!(info.distortion, 1.0);
    }

    #[test]
    fn test_zero_shock_is_noop() {
        let mut info = InformationState::new(0.7, 0.8, 0.3);
        let before = info.clone();
        info.apply_shock(0.0);
        assert_eq!(info, before);
    }
}
