//! War Is Choice - turn-based geopolitical conflict simulation

pub mod conflict;
pub mod core;
