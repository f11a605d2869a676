//! Actor - a nation or bloc projecting pressure on the others

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::conflict::force::ForceGroup;
use crate::conflict::information::InformationState;
use crate::conflict::supply::SupplyNetwork;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,

    // Doctrine (0.0 to 1.0)
    pub risk_tolerance: f64,
    pub logistics_efficiency: f64,
    pub escalation_doctrine: f64,

    /// Resource tag -> weight
    pub dependencies: BTreeMap<String, f64>,

    pub supply: SupplyNetwork,
    pub information: InformationState,

    /// Resolved in this order every turn
    #[serde(default)]
    pub force_groups: Vec<ForceGroup>,

    /// Allied actor names
    #[serde(default)]
    pub alliances: Vec<String>,
}

impl Actor {
    pub fn new(
        name: impl Into<String>,
        risk_tolerance: f64,
        logistics_efficiency: f64,
        escalation_doctrine: f64,
        supply: SupplyNetwork,
        information: InformationState,
    ) -> Self {
        Self {
            name: name.into(),
            risk_tolerance,
            logistics_efficiency,
            escalation_doctrine,
            dependencies: BTreeMap::new(),
            supply,
            information,
            force_groups: Vec::new(),
            alliances: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, resource: impl Into<String>, weight: f64) -> Self {
        self.dependencies.insert(resource.into(), weight);
        self
    }

    pub fn with_force_group(mut self, group: ForceGroup) -> Self {
        self.force_groups.push(group);
        self
    }

    pub fn with_ally(mut self, actor: impl Into<String>) -> Self {
        let actor = actor.into();
        if !self.alliances.contains(&actor) {
            self.alliances.push(actor);
        }
        self
    }

    /// Capacity to project disruptive pressure this turn
    pub fn pressure_budget(&self) -> f64 {
        self.supply.resilience_score() * self.logistics_efficiency * (1.0 + self.risk_tolerance)
    }

    pub fn is_allied_with(&self, other: &str) -> bool {
        self.alliances.iter().any(|a| a == other)
    }
}
