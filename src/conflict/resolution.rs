//! Turn resolution - advances the whole conflict by one week
//!
//! Phases run in a fixed order and later phases read what earlier phases
//! wrote: actors, then trade routes, then regions, then force groups.
//! A failed lookup aborts the turn; phases already applied stay applied.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::conflict::constants::{
    DISTORTION_PRESSURE_PENALTY, RESILIENCE_SCALE, ROUTE_RISK_PRESSURE, TRADE_PRESSURE_SCALE,
};
use crate::conflict::world::{find_actor, find_region, ConflictWorld};
use crate::core::error::Result;

/// A sequential source of uniform draws in [0, 1)
///
/// Any `rand` generator qualifies. The resolver draws exactly once per actor
/// per turn, in actor order.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Everything one turn did, keyed by entity name in resolution order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Week number after the turn
    pub week: u32,
    pub actor_pressure: Vec<(String, f64)>,
    pub trade_disruptions: Vec<(String, f64)>,
    pub region_damage: Vec<(String, f64)>,
    pub info_shocks: Vec<(String, f64)>,
    pub notes: Vec<String>,
}

impl TurnReport {
    pub fn pressure_of(&self, actor: &str) -> Option<f64> {
        lookup(&self.actor_pressure, actor)
    }

    pub fn disruption_of(&self, route: &str) -> Option<f64> {
        lookup(&self.trade_disruptions, route)
    }

    pub fn damage_of(&self, region: &str) -> Option<f64> {
        lookup(&self.region_damage, region)
    }

    pub fn shock_of(&self, actor: &str) -> Option<f64> {
        lookup(&self.info_shocks, actor)
    }
}

fn lookup(entries: &[(String, f64)], name: &str) -> Option<f64> {
    entries.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
}

/// Resolve one week of conflict
pub fn resolve_turn(world: &mut ConflictWorld, rng: &mut impl RandomSource) -> Result<TurnReport> {
    let mut report = TurnReport::default();

    resolve_actors(world, rng, &mut report);
    resolve_trade(world, &mut report);
    resolve_regions(world, &mut report)?;
    resolve_forces(world)?;

    world.week += 1;
    world.events.extend(report.notes.iter().cloned());
    report.week = world.week;

    info!(week = world.week, notes = report.notes.len(), "Turn resolved");

    Ok(report)
}

/// 1. Supply attrition, pressure, and information shocks
fn resolve_actors(world: &mut ConflictWorld, rng: &mut impl RandomSource, report: &mut TurnReport) {
    for actor in world.actors.iter_mut() {
        let losses = actor.supply.degrade();

        let pressure = actor.pressure_budget()
            * (1.0 - actor.information.distortion * DISTORTION_PRESSURE_PENALTY);
        report.actor_pressure.push((actor.name.clone(), pressure));

        let info_shock = rng.next_uniform() * (1.0 - actor.information.reliability);
        actor.information.apply_shock(info_shock);
        report.info_shocks.push((actor.name.clone(), info_shock));

        report.notes.push(format!(
            "{} supply losses: fuel {:.1}, food {:.1}.",
            actor.name, losses.fuel, losses.food
        ));
    }

    debug!(actors = world.actors.len(), "Actor phase complete");
}

/// 2. Aggregate pressure bleeds into every trade route
fn resolve_trade(world: &mut ConflictWorld, report: &mut TurnReport) {
    let actor_count = world.actors.len();
    let aggregate_pressure = if actor_count == 0 {
        0.0
    } else {
        let total: f64 = report.actor_pressure.iter().map(|(_, p)| p).sum();
        total / (actor_count as f64 * TRADE_PRESSURE_SCALE)
    };

    for route in world.trade_routes.iter_mut() {
        let pressure = aggregate_pressure + route.risk * ROUTE_RISK_PRESSURE;
        route.apply_disruption(pressure);
        report.trade_disruptions.push((route.name.clone(), pressure));
    }

    debug!(aggregate_pressure, routes = world.trade_routes.len(), "Trade phase complete");
}

/// 3. Regions decay faster under actors with poor logistics
fn resolve_regions(world: &mut ConflictWorld, report: &mut TurnReport) -> Result<()> {
    for region in world.regions.iter_mut() {
        let controller = find_actor(&world.actors, &region.controlling_actor, || {
            format!("region '{}'", region.name)
        })
        .inspect_err(|e| warn!("Region phase aborted: {}", e))?;

        let damage = region.friction() * (1.0 - controller.logistics_efficiency);
        region.apply_infrastructure_damage(damage);
        report.region_damage.push((region.name.clone(), damage));
    }

    debug!(regions = world.regions.len(), "Region phase complete");
    Ok(())
}

/// 4. Force groups wear down against their region and their own supply
fn resolve_forces(world: &mut ConflictWorld) -> Result<()> {
    let regions = &world.regions;

    for actor in world.actors.iter_mut() {
        let supply_deficit = 1.0 - actor.supply.resilience_score() / RESILIENCE_SCALE;

        for group in actor.force_groups.iter_mut() {
            let region = find_region(regions, &group.region, || {
                format!("force group '{}'", group.name)
            })
            .inspect_err(|e| warn!("Force phase aborted: {}", e))?;

            let force_friction = region.terrain_friction + region.insurgency + supply_deficit;
            group.degrade(force_friction);
        }
    }

    debug!("Force phase complete");
    Ok(())
}
