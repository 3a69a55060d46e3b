use crate::{
    pipeline::types::{AffectiveDashboard, HardwareUnit, TransmissionPacket},
    state::StateVector,
};

pub const EXECUTIVE_UNIT: &str = "brain-pfc-v2.1";
pub const FOCUS_UNIT: &str = "brain-cs-v1.0";
pub const VIGILANCE_UNIT: &str = "brain-lc-v1.0";

/// Above this dissonance the affective target is overridden outright.
const CRITICAL_OVERRIDE_GATE: f64 = 0.8;
const CRITICAL_MODE: &str = "Critical Thought";
const DEFAULT_MODE: &str = "Contextual Logic Assessment";

/// Target polarity word -> thought mode.
const EMOTION_MODE_MAP: [(&str, &str); 7] = [
    ("Determined", "Analytical Thought"),
    ("Curious", "Creative Thought"),
    ("Motivated", "Habitual / Procedural Thought"),
    ("Excited", "Temporal / Prospective Thought"),
    ("Satisfied", "Reflective / Metacognitive Thought"),
    ("Hopeful", "Social / Empathic Thought"),
    ("Amazed", "Metaphorical / Symbolic Thought"),
];

fn hardware_for(mode: &str) -> Vec<HardwareUnit> {
    let unit = |uid: &str, role: &str| HardwareUnit {
        uid: uid.to_string(),
        role: role.to_string(),
    };
    match mode {
        "Analytical Thought" => vec![
            unit(EXECUTIVE_UNIT, "Rule-Based Reasoning / F_ego"),
            unit("brain-cerebellum-v2.1", "Temporal Sequencing / Logic Formatting"),
            unit(FOCUS_UNIT, "Cholinergic Focus Gain (High ACh)"),
        ],
        "Creative Thought" => vec![
            unit("brain-dmn-v1.0", "Internal Simulation / Idea Generation"),
            unit("brain-da-v1.0", "Dopaminergic Novelty Search"),
            unit("brain-visual-v1.0", "Visual-Geometric Bridge"),
        ],
        "Critical Thought" => vec![
            unit("brain-fpc-v2.1", "Dual-Frame Holding / Adversarial Audit"),
            unit("brain-acc-v1.0", "Conflict Monitoring"),
            unit(VIGILANCE_UNIT, "Noradrenergic Gain (High NE)"),
        ],
        // Unmapped modes share the contextual-assessment circuit.
        _ => vec![
            unit("brain-sn-v1.1", "Salience Gating"),
            unit(EXECUTIVE_UNIT, "Executive Evaluation"),
        ],
    }
}

/// Pure mapping from the affective dashboard to an action plan. Reads the
/// state vector's dissonance for the critical override; mutates nothing.
pub fn route(affective: &AffectiveDashboard, state: &StateVector) -> TransmissionPacket {
    let target_polarity = affective
        .required_flip
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let (selected_mode, reason) = if state.dissonance_total > CRITICAL_OVERRIDE_GATE {
        (
            CRITICAL_MODE.to_string(),
            "Dissonance critical. Override baseline emotion to force adversarial audit."
                .to_string(),
        )
    } else {
        let mode = EMOTION_MODE_MAP
            .iter()
            .find(|(emotion, _)| *emotion == target_polarity)
            .map(|(_, mode)| *mode)
            .unwrap_or(DEFAULT_MODE);
        (
            mode.to_string(),
            format!("Stabilize '{target_polarity}' polarity via {mode}."),
        )
    };

    let hardware = hardware_for(&selected_mode);

    TransmissionPacket {
        somatic_code: affective.somatic_code.clone(),
        target_polarity,
        baseline_delta: affective.baseline_delta.clone(),
        selected_mode,
        reason,
        hardware,
    }
}
