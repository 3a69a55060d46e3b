use crate::{
    pipeline::types::{
        ContextPacket, IntegrityStatus, MachineOutput, TransmissionPacket, round2,
    },
    pipeline::router::{EXECUTIVE_UNIT, FOCUS_UNIT, VIGILANCE_UNIT},
    state::StateVector,
};

/// Constant background force present in every solve.
const AWARENESS_FORCE: f64 = 0.5;
/// Each unit of gain costs this much drag.
const DRAG_PER_GAIN: f64 = 0.3;
/// Integrity lost per resolution collapse. Unbounded below.
const COLLAPSE_PENALTY: f64 = 0.1;

/// Polarity words denoting an assertive/approach stance.
const APPROACH_POLARITIES: [&str; 3] = ["Determined", "Motivated", "Excited"];
const APPROACH_MARKER: &str = "Yang";

/// Executive delegate: scores the forward drive available for the target
/// polarity, capped at 2.0.
pub fn ego_force(dissonance_total: f64, target_polarity: &str) -> f64 {
    let assertive = target_polarity.contains(APPROACH_MARKER)
        || APPROACH_POLARITIES.contains(&target_polarity);
    let base_force = if assertive {
        1.0 + dissonance_total * 0.5
    } else {
        0.2
    };
    base_force.min(2.0)
}

/// Terminal gate of the pipeline: evolves the physics one step and verdicts
/// the run. A collapse is communicated through the verdict alone; the
/// solver itself never fails, and mutations made by earlier stages stand.
pub fn solve(
    transmission: &TransmissionPacket,
    _context: &ContextPacket,
    state: &mut StateVector,
) -> MachineOutput {
    let active = |uid: &str| transmission.hardware.iter().any(|unit| unit.uid == uid);

    let ego = if active(EXECUTIVE_UNIT) {
        ego_force(state.dissonance_total, &transmission.target_polarity)
    } else {
        0.0
    };

    // Sequential checks: the vigilance check runs second and overwrites, so
    // vigilance wins when both units are active.
    let mut gain = 1.0;
    if active(FOCUS_UNIT) {
        gain = 1.5;
    }
    if active(VIGILANCE_UNIT) {
        gain = 2.0;
    }

    let drag = -(gain * DRAG_PER_GAIN);
    let s_dot = state.proper_time * (drag + ego + AWARENESS_FORCE);

    let status = if s_dot < 0.0 {
        state.integrity_index -= COLLAPSE_PENALTY;
        IntegrityStatus::Collapsed
    } else {
        IntegrityStatus::Verified
    };

    MachineOutput {
        ego_force: round2(ego),
        drag: round2(drag),
        s_dot: round2(s_dot),
        integrity_index: state.integrity_index,
        status,
        action_allowed: status == IntegrityStatus::Verified,
    }
}
