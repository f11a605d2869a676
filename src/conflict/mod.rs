//! Turn-based conflict model
//!
//! Actors bleed supply, project pressure onto shared trade routes, and wear
//! down the regions and forces they hold. One call to [`resolve_turn`]
//! advances the whole world by one week.

pub mod actor;
pub mod constants;
pub mod force;
pub mod information;
pub mod output;
pub mod region;
pub mod resolution;
pub mod scenario;
pub mod simulation;
pub mod snapshot;
pub mod supply;
pub mod trade;
pub mod world;

pub use actor::Actor;
pub use force::ForceGroup;
pub use information::InformationState;
pub use output::{summarize_turn, summarize_world};
pub use region::Region;
pub use resolution::{resolve_turn, RandomSource, TurnReport};
pub use scenario::build_reference_world;
pub use simulation::{run_campaign, run_campaign_on, Campaign, CampaignOutput};
pub use snapshot::{from_json, load_world, save_world, to_json};
pub use supply::{SupplyLosses, SupplyNetwork};
pub use trade::TradeRoute;
pub use world::ConflictWorld;
