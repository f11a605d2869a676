pub mod config;
pub mod error;

pub use config::CampaignConfig;
pub use error::{Result, WarError};
