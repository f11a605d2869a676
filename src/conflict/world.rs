//! ConflictWorld - the main world state container

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::conflict::actor::Actor;
use crate::conflict::region::Region;
use crate::conflict::trade::TradeRoute;
use crate::core::error::{Result, WarError};

/// The full state of a conflict
///
/// Regions and actors are name-keyed collections kept in insertion order.
/// That order decides how the turn resolver consumes random draws, so it is
/// part of the world's identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConflictWorld {
    /// Weeks resolved so far
    pub week: u32,
    pub regions: Vec<Region>,
    pub actors: Vec<Actor>,
    pub trade_routes: Vec<TradeRoute>,
    /// Seed the world was built from (provenance only)
    pub rng_seed: u64,
    /// Append-only log of turn notes
    #[serde(default)]
    pub events: Vec<String>,
}

impl ConflictWorld {
    pub fn new(rng_seed: u64) -> Self {
        Self {
            week: 0,
            regions: Vec::new(),
            actors: Vec::new(),
            trade_routes: Vec::new(),
            rng_seed,
            events: Vec::new(),
        }
    }

    /// Insert a region, replacing any region with the same name in place
    pub fn insert_region(&mut self, region: Region) {
        match self.regions.iter_mut().find(|r| r.name == region.name) {
            Some(existing) => *existing = region,
            None => self.regions.push(region),
        }
    }

    /// Insert an actor, replacing any actor with the same name in place
    pub fn insert_actor(&mut self, actor: Actor) {
        match self.actors.iter_mut().find(|a| a.name == actor.name) {
            Some(existing) => *existing = actor,
            None => self.actors.push(actor),
        }
    }

    pub fn add_trade_route(&mut self, route: TradeRoute) {
        self.trade_routes.push(route);
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name == name)
    }

    pub fn actor_mut(&mut self, name: &str) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.name == name)
    }

    pub fn trade_route(&self, name: &str) -> Option<&TradeRoute> {
        self.trade_routes.iter().find(|r| r.name == name)
    }

    /// Check that names are unique and every name reference resolves
    ///
    /// Duplicate actor or region names are reported first. After that comes
    /// the first dangling reference, walking regions, then force groups,
    /// then trade routes.
    pub fn validate(&self) -> Result<()> {
        check_unique("actor", self.actors.iter().map(|a| a.name.as_str()))?;
        check_unique("region", self.regions.iter().map(|r| r.name.as_str()))?;

        for region in &self.regions {
            find_actor(&self.actors, &region.controlling_actor, || {
                format!("region '{}'", region.name)
            })?;
        }

        for actor in &self.actors {
            for group in &actor.force_groups {
                find_region(&self.regions, &group.region, || {
                    format!("force group '{}'", group.name)
                })?;
            }
        }

        for route in &self.trade_routes {
            for end in [&route.origin, &route.destination] {
                find_region(&self.regions, end, || format!("trade route '{}'", route.name))?;
            }
        }

        Ok(())
    }
}

fn check_unique<'a>(kind: &'static str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(WarError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Resolve an actor by name, naming the referrer on failure
pub(crate) fn find_actor<'a>(
    actors: &'a [Actor],
    name: &str,
    referenced_by: impl FnOnce() -> String,
) -> Result<&'a Actor> {
    actors
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| WarError::UnknownActor {
            referenced_by: referenced_by(),
            name: name.to_string(),
        })
}

/// Resolve a region by name, naming the referrer on failure
pub(crate) fn find_region<'a>(
    regions: &'a [Region],
    name: &str,
    referenced_by: impl FnOnce() -> String,
) -> Result<&'a Region> {
    regions
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| WarError::UnknownRegion {
            referenced_by: referenced_by(),
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::force::ForceGroup;
    use crate::conflict::information::InformationState;
    use crate::conflict::supply::SupplyNetwork;

    fn actor(name: &str) -> Actor {
        Actor::new(
            name,
            0.4,
            0.8,
            0.6,
            SupplyNetwork::new(10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0),
            InformationState::new(0.8, 0.6, 0.2),
        )
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        world.insert_actor(actor("Coalition"));
        world.insert_actor(actor("Trade League"));
        let names: Vec<_> = world.actors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Union", "Coalition", "Trade League"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        world.insert_actor(actor("Coalition"));

        let mut replacement = actor("Union");
        replacement.risk_tolerance = 0.9;
        world.insert_actor(replacement);

        assert_eq!(world.actors.len(), 2);
        assert_eq!(world.actors[0].name, "Union");
        assert_eq!(world.actors[0].risk_tolerance, 0.9);
    }

    #[test]
    fn test_validate_reports_dangling_controller() {
        let mut world = ConflictWorld::new(1);
        world.insert_region(Region::new("North Arc", 0.4, 0.7, 0.8, 0.2, 0.6, "Nobody"));
        let err = world.validate().unwrap_err();
        assert!(matches!(err, WarError::UnknownActor { ref name, .. } if name == "Nobody"));
    }

    #[test]
    fn test_validate_reports_dangling_force_region() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union").with_force_group(ForceGroup::new(
            "Union Ground",
            "land",
            0.7,
            0.7,
            0.6,
            "stabilize",
            "Nowhere",
        )));
        let err = world.validate().unwrap_err();
        assert!(matches!(err, WarError::UnknownRegion { ref name, .. } if name == "Nowhere"));
    }

    #[test]
    fn test_validate_rejects_duplicate_actor() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        world.insert_actor(actor("Coalition"));
        // Bypasses insert_actor, as a hand-edited snapshot would
        world.actors.push(actor("Union"));

        let err = world.validate().unwrap_err();
        assert!(matches!(
            err,
            WarError::DuplicateName { kind: "actor", ref name } if name == "Union"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_region() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        world.insert_region(Region::new("North Arc", 0.4, 0.7, 0.8, 0.2, 0.6, "Union"));
        world.regions.push(Region::new("North Arc", 0.1, 0.1, 0.1, 0.1, 0.1, "Union"));

        let err = world.validate().unwrap_err();
        assert!(matches!(
            err,
            WarError::DuplicateName { kind: "region", ref name } if name == "North Arc"
        ));
    }

    #[test]
    fn test_decoded_duplicate_actor_fails_validation() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        let mut value = serde_json::to_value(&world).unwrap();
        let copy = value["actors"][0].clone();
        value["actors"].as_array_mut().unwrap().push(copy);

        let decoded: ConflictWorld = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.actors.len(), 2);
        assert!(matches!(decoded.validate(), Err(WarError::DuplicateName { .. })));
    }

    #[test]
    fn test_validate_checks_trade_route_ends() {
        let mut world = ConflictWorld::new(1);
        world.insert_actor(actor("Union"));
        world.insert_region(Region::new("North Arc", 0.4, 0.7, 0.8, 0.2, 0.6, "Union"));
        world.add_trade_route(TradeRoute::new("Spur", "North Arc", "Atlantis", 10.0, 0.1, false));
        assert!(matches!(world.validate(), Err(WarError::UnknownRegion { .. })));
    }
}
