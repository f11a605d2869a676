//! Campaign driver - runs many turns from one seeded generator

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::conflict::output::summarize_world;
use crate::conflict::resolution::{resolve_turn, TurnReport};
use crate::conflict::scenario::build_reference_world;
use crate::conflict::world::ConflictWorld;
use crate::core::config::CampaignConfig;
use crate::core::error::Result;

/// Complete campaign output
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignOutput {
    /// Summary of the world before the first turn
    pub initial_summary: String,
    pub reports: Vec<TurnReport>,
    pub final_world: ConflictWorld,
}

impl CampaignOutput {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Resolved {} turns, {} events logged\n{}",
            self.reports.len(),
            self.final_world.events.len(),
            summarize_world(&self.final_world)
        )
    }
}

/// A world in progress, resolved one turn at a time
///
/// The generator is seeded once, so stepping N times gives the same history
/// as a single N-turn run.
pub struct Campaign {
    world: ConflictWorld,
    rng: ChaCha8Rng,
    initial_summary: String,
    reports: Vec<TurnReport>,
}

impl Campaign {
    /// The generator is seeded from `seed`, not from the world's `rng_seed`
    pub fn new(world: ConflictWorld, seed: u64) -> Self {
        info!(seed, start_week = world.week, "Starting campaign");
        Self {
            initial_summary: summarize_world(&world),
            rng: ChaCha8Rng::seed_from_u64(seed),
            world,
            reports: Vec::new(),
        }
    }

    pub fn initial_summary(&self) -> &str {
        &self.initial_summary
    }

    pub fn world(&self) -> &ConflictWorld {
        &self.world
    }

    pub fn reports(&self) -> &[TurnReport] {
        &self.reports
    }

    /// Resolve the next turn
    ///
    /// On failure the world keeps whatever phases completed and earlier
    /// reports are unaffected.
    pub fn step(&mut self) -> Result<&TurnReport> {
        let report = resolve_turn(&mut self.world, &mut self.rng)?;
        self.reports.push(report);
        Ok(&self.reports[self.reports.len() - 1])
    }

    pub fn finish(self) -> CampaignOutput {
        CampaignOutput {
            initial_summary: self.initial_summary,
            reports: self.reports,
            final_world: self.world,
        }
    }
}

/// Run a campaign on the reference world
pub fn run_campaign(config: &CampaignConfig) -> Result<CampaignOutput> {
    run_campaign_on(build_reference_world(config.seed), config)
}

/// Run a campaign on a caller-supplied world
pub fn run_campaign_on(world: ConflictWorld, config: &CampaignConfig) -> Result<CampaignOutput> {
    let mut campaign = Campaign::new(world, config.seed);
    for _ in 0..config.turns {
        campaign.step()?;
    }
    Ok(campaign.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::WarError;

    #[test]
    fn test_campaign_runs_requested_turns() {
        let config = CampaignConfig {
            turns: 4,
            ..CampaignConfig::default()
        };
        let output = run_campaign(&config).unwrap();
        assert_eq!(output.reports.len(), 4);
        assert_eq!(output.final_world.week, 4);
        assert_eq!(output.final_world.events.len(), 12);
        assert!(output.initial_summary.starts_with("Week 0"));
        assert_eq!(output.reports.last().unwrap().week, 4);
    }

    #[test]
    fn test_campaign_is_reproducible() {
        let config = CampaignConfig::default();
        let a = run_campaign(&config).unwrap();
        let b = run_campaign(&config).unwrap();
        assert_eq!(a.reports, b.reports);
        assert_eq!(a.final_world, b.final_world);
    }

    #[test]
    fn test_zero_turns_leaves_world_untouched() {
        let config = CampaignConfig {
            turns: 0,
            ..CampaignConfig::default()
        };
        let output = run_campaign(&config).unwrap();
        assert_eq!(output.final_world, build_reference_world(config.seed));
    }

    #[test]
    fn test_stepping_matches_batch_run() {
        let config = CampaignConfig {
            turns: 6,
            ..CampaignConfig::default()
        };
        let batch = run_campaign(&config).unwrap();

        let mut campaign = Campaign::new(build_reference_world(config.seed), config.seed);
        for turn in 1..=6 {
            assert_eq!(campaign.step().unwrap().week, turn);
        }
        assert_eq!(campaign.finish(), batch);
    }

    #[test]
    fn test_failed_step_keeps_earlier_reports() {
        let mut campaign = Campaign::new(build_reference_world(7), 7);
        campaign.step().unwrap();
        campaign.step().unwrap();

        campaign.world.regions[0].controlling_actor = "Nobody".to_string();
        let err = campaign.step().unwrap_err();
        assert!(matches!(err, WarError::UnknownActor { .. }));

        assert_eq!(campaign.reports().len(), 2);
        assert_eq!(campaign.world().week, 2);
        assert_eq!(campaign.world().events.len(), 6);
    }

    #[test]
    fn test_output_json_round_trip() {
        let config = CampaignConfig {
            turns: 3,
            ..CampaignConfig::default()
        };
        let output = run_campaign(&config).unwrap();
        let decoded: CampaignOutput = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(decoded, output);
    }
}
