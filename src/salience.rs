use serde::Serialize;

use crate::pipeline::types::{ContextPacket, HaltStatus, Tier1Status, round3};

const THREAT_BASELINE: f64 = 0.05;
const HPA_TRIGGER_THRESHOLD: f64 = 0.8;
const HIGH_SALIENCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HpaStatus {
    #[serde(rename = "Active_Drive")]
    ActiveDrive,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalienceBand {
    #[serde(rename = "High_Salience")]
    High,
    #[serde(rename = "Low_Salience")]
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalienceReport {
    pub threat_probability: f64,
    pub hpa_status: HpaStatus,
    pub affective_weight: SalienceBand,
}

/// Auxiliary threat-salience scorer. Pure read over the run's outputs; it
/// is not part of the stage sequence and never touches the state vector.
pub fn score(dissonance_total: f64, context: &ContextPacket) -> SalienceReport {
    let mut threat = THREAT_BASELINE + dissonance_total * dissonance_total;
    if context.tier_1 == Tier1Status::DirectMatchFound {
        threat *= 0.5;
    }
    if context.halt == HaltStatus::Triggered {
        threat = 1.0;
    }
    let threat_probability = round3(threat).min(1.0);

    SalienceReport {
        threat_probability,
        hpa_status: if threat > HPA_TRIGGER_THRESHOLD {
            HpaStatus::ActiveDrive
        } else {
            HpaStatus::Idle
        },
        affective_weight: if threat > HIGH_SALIENCE_THRESHOLD {
            SalienceBand::High
        } else {
            SalienceBand::Low
        },
    }
}
