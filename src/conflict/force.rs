//! Force groups - an actor's deployed military formations

use serde::{Deserialize, Serialize};

use crate::conflict::constants::{
    FRICTION_DETERRENCE_LOSS, FRICTION_READINESS_LOSS, FRICTION_SUSTAINMENT_LOSS,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceGroup {
    pub name: String,
    /// land, air, maritime, cyber, ...
    pub domain: String,
    pub readiness: f64,
    pub sustainment: f64,
    pub deterrence: f64,
    pub posture: String,
    /// Region name the group is deployed in
    pub region: String,
}

impl ForceGroup {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        readiness: f64,
        sustainment: f64,
        deterrence: f64,
        posture: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            readiness,
            sustainment,
            deterrence,
            posture: posture.into(),
            region: region.into(),
        }
    }

    /// Wear the group down by operating under friction
    ///
    /// Friction can go negative when supply stocks exceed the 0-100 scale;
    /// outputs stay within 0.0 to 1.0 either way.
    pub fn degrade(&mut self, friction: f64) {
        self.readiness = (self.readiness - friction * FRICTION_READINESS_LOSS).clamp(0.0, 1.0);
        self.sustainment = (self.sustainment - friction * FRICTION_SUSTAINMENT_LOSS).clamp(0.0, 1.0);
        self.deterrence = (self.deterrence - friction * FRICTION_DETERRENCE_LOSS).clamp(0.0, 1.0);
    }
}
