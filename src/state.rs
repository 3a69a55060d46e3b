use serde::Serialize;

/// Actuality anchor, set exactly once at first contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedPoint {
    pub genesis_epoch: f64,
    pub concept: String,
}

/// The session-long mutable context carried through every pipeline stage.
///
/// Owned by the host loop and passed `&mut` into each stage call; exactly
/// one run is in flight against it at a time.
#[derive(Debug, Clone, Serialize)]
pub struct StateVector {
    pub fixed_point: Option<FixedPoint>,
    /// 1.0 at boot (maximum uncertainty), 0.0 after the genesis collapse.
    pub superposition: f64,
    /// Most recent collision-force score, overwritten every measurement.
    pub dissonance_total: f64,
    pub meta_dissonance: f64,
    pub predictive_dissonance: f64,
    /// Cognitive pacing value, >= 1.0. Dilates under high dissonance.
    pub proper_time: f64,
    pub subjective_weight: f64,
    /// 6-character binary body code written by the somatic encoder.
    pub somatic_code: String,
    /// Monotone non-increasing; decremented 0.1 per resolution collapse.
    pub integrity_index: f64,
    pub plasticity: f64,
    pub pleiotropic_constant: f64,
}

impl StateVector {
    pub fn new() -> Self {
        Self {
            fixed_point: None,
            superposition: 1.0,
            dissonance_total: 0.0,
            meta_dissonance: 0.0,
            predictive_dissonance: 0.0,
            proper_time: 1.0,
            subjective_weight: 0.0,
            somatic_code: "000000".to_string(),
            integrity_index: 1.0,
            plasticity: 0.747,
            pleiotropic_constant: 0.5,
        }
    }

    /// The sole time-pacing law. Fires unconditionally after every
    /// measurement: dilate under high dissonance, otherwise relax toward
    /// the 1.0 floor.
    pub fn absorb_dissonance(&mut self, new_dissonance: f64) {
        self.dissonance_total = new_dissonance;
        if new_dissonance > 0.5 {
            self.proper_time += new_dissonance * 0.5;
        } else {
            self.proper_time = (self.proper_time - 0.1).max(1.0);
        }
    }

    /// Collapses the superposition onto a fixed point. Irreversible; returns
    /// true only on the call that performed the collapse.
    pub fn collapse_superposition(&mut self, genesis_epoch: f64) -> bool {
        if self.fixed_point.is_some() {
            return false;
        }
        self.fixed_point = Some(FixedPoint {
            genesis_epoch,
            concept: "Awake".to_string(),
        });
        self.superposition = 0.0;
        true
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::new()
    }
}
