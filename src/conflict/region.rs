//! Region - contested territory held by one actor

use serde::{Deserialize, Serialize};

use crate::conflict::constants::{
    DAMAGE_INSURGENCY_GAIN, DAMAGE_OCCUPATION_GAIN, MAX_OCCUPATION_COST,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,

    // Geography and society (0.0 to 1.0)
    pub terrain_friction: f64,
    pub urbanization: f64,
    pub infrastructure_health: f64,
    pub insurgency: f64,

    /// 0.0 to 2.0
    pub occupation_cost: f64,

    /// Actor name
    pub controlling_actor: String,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        terrain_friction: f64,
        urbanization: f64,
        infrastructure_health: f64,
        insurgency: f64,
        occupation_cost: f64,
        controlling_actor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            terrain_friction,
            urbanization,
            infrastructure_health,
            insurgency,
            occupation_cost,
            controlling_actor: controlling_actor.into(),
        }
    }

    /// Terrain, insurgency and missing infrastructure, summed
    pub fn friction(&self) -> f64 {
        self.terrain_friction + self.insurgency + (1.0 - self.infrastructure_health)
    }

    pub fn apply_infrastructure_damage(&mut self, magnitude: f64) {
        self.infrastructure_health = (self.infrastructure_health - magnitude).max(0.0);
        self.insurgency = (self.insurgency + magnitude * DAMAGE_INSURGENCY_GAIN).min(1.0);
        self.occupation_cost =
            (self.occupation_cost + magnitude * DAMAGE_OCCUPATION_GAIN).min(MAX_OCCUPATION_COST);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friction() {
        let region = Region::new("North Arc", 0.4, 0.7, 0.8, 0.2, 0.6, "Union");
        assert!((region.friction() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_damage_formula() {
        let mut region = Region::new("Equatorial Belt", 0.6, 0.5, 0.6, 0.4, 0.7, "Coalition");
        region.apply_infrastructure_damage(0.2);
        assert!((region.infrastructure_health - 0.4).abs() < 1e-9);
        assert!((region.insurgency - 0.44).abs() < 1e-9);
        assert!((region.occupation_cost - 0.76).abs() < 1e-9);
    }

    #[test]
    fn test_damage_clamps() {
        let mut region = Region::new("Maritime Hub", 0.3, 0.8, 0.9, 0.95, 1.9, "Trade League");
        region.apply_infrastructure_damage(5.0);
        assert_eq!(region.infrastructure_health, 0.0);
        assert_eq!(region.insurgency, 1.0);
        assert_eq!(region.occupation_cost, MAX_OCCUPATION_COST);
    }
}
