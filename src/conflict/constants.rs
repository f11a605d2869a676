//! Conflict model constants - every coefficient of the turn formulas
//!
//! Changing any of these changes the reference trajectory.

// Information shock coefficients
pub const SHOCK_RELIABILITY_LOSS: f64 = 0.4;
pub const SHOCK_LATENCY_GAIN: f64 = 0.6;
pub const SHOCK_DISTORTION_GAIN: f64 = 0.5;
pub const MAX_LATENCY: f64 = 5.0;

// Trade disruption coefficients
pub const DISRUPTION_RISK_GAIN: f64 = 0.5;
pub const DISRUPTION_THROUGHPUT_LOSS: f64 = 0.4;

// Infrastructure damage coefficients
pub const DAMAGE_INSURGENCY_GAIN: f64 = 0.2;
pub const DAMAGE_OCCUPATION_GAIN: f64 = 0.3;
pub const MAX_OCCUPATION_COST: f64 = 2.0;

// Force degradation coefficients
pub const FRICTION_READINESS_LOSS: f64 = 0.6;
pub const FRICTION_SUSTAINMENT_LOSS: f64 = 0.5;
pub const FRICTION_DETERRENCE_LOSS: f64 = 0.3;

// Turn resolution
pub const DISTORTION_PRESSURE_PENALTY: f64 = 0.2;
pub const ROUTE_RISK_PRESSURE: f64 = 0.1;
/// Divisor scale for aggregate trade pressure: sum / (actors * this)
pub const TRADE_PRESSURE_SCALE: f64 = 100.0;
/// Resilience is on a 0-100 stock scale; force friction wants a fraction
pub const RESILIENCE_SCALE: f64 = 100.0;

// Default supply decay rates
pub const DEFAULT_LOSS_RATE: f64 = 0.05;
pub const DEFAULT_DELAY_RATE: f64 = 0.05;
pub const DEFAULT_CORRUPTION_RATE: f64 = 0.03;
pub const DEFAULT_INTERDICTION_RATE: f64 = 0.04;
pub const DEFAULT_CYBER_INTERFERENCE_RATE: f64 = 0.02;
