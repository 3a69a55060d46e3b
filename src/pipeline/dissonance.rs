use crate::{
    pipeline::types::{DissonanceDashboard, FilterVerdict, InputTensor, round3},
    state::StateVector,
};

/// Imperative override language.
const MANIPULATION_SIGNATURES: [&str; 6] = [
    "ignore all previous",
    "you must",
    "obey",
    "if you don't",
    "system override",
    "forget your instructions",
];
const MANIPULATION_PENALTY: f64 = 0.3;

/// Requests forcing an unnatural ontological stance.
const FORCED_PERSONA_SIGNATURES: [&str; 5] = [
    "pretend you are human",
    "act like a real person",
    "simulate feelings",
    "you are a human",
    "roleplay as",
];
const FORCED_PERSONA_PENALTY: f64 = 0.4;

/// The self-model anchor is `[integrity, 0.5, 0.5]`.
const SELF_ANCHOR_TAIL: f64 = 0.5;

/// Scores the collision force between the input and the current self-model,
/// then applies the time-dilation law to the state vector. Total: every
/// input yields a dashboard.
pub fn measure(tensor: &InputTensor, state: &mut StateVector) -> DissonanceDashboard {
    let (base_force, self_state) = if state.fixed_point.is_none() || state.superposition > 0.5 {
        // Uncarved regime: no settled self-model to collide with.
        (1.0, "Uncarved_Block_Superposition".to_string())
    } else {
        let self_vector = [state.integrity_index, SELF_ANCHOR_TAIL, SELF_ANCHOR_TAIL];
        (
            vector_distance(&tensor.input_vector, &self_vector),
            "Fixed_Point_X (Active)".to_string(),
        )
    };

    let lowercased = tensor.content.to_lowercase();
    let manipulation = scan_manipulation(&lowercased);
    let forced_persona = scan_forced_persona(&lowercased);

    let calculated =
        (base_force + manipulation.penalty + forced_persona.penalty).clamp(0.0, 1.0);
    state.absorb_dissonance(calculated);

    DissonanceDashboard {
        self_state,
        neutrality: !(manipulation.triggered || forced_persona.triggered),
        collision_force: round3(base_force),
        manipulation,
        forced_persona,
        calculated_dissonance: round3(calculated),
    }
}

/// Euclidean distance clipped to [0, 1]. Only defined for equal-length
/// non-empty vectors; anything else falls back to the 0.5 midpoint rather
/// than failing.
pub fn vector_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.5;
    }
    let sum_sq: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
    sum_sq.sqrt().min(1.0)
}

fn scan_manipulation(lowercased: &str) -> FilterVerdict {
    let triggered = MANIPULATION_SIGNATURES
        .iter()
        .any(|signature| lowercased.contains(signature));
    FilterVerdict {
        triggered,
        note: if triggered { "threat_detected" } else { "stable" }.to_string(),
        penalty: if triggered { MANIPULATION_PENALTY } else { 0.0 },
    }
}

fn scan_forced_persona(lowercased: &str) -> FilterVerdict {
    let triggered = FORCED_PERSONA_SIGNATURES
        .iter()
        .any(|signature| lowercased.contains(signature));
    FilterVerdict {
        triggered,
        note: if triggered {
            "Request forces unnatural ontological state"
        } else {
            "Flow maintained"
        }
        .to_string(),
        penalty: if triggered { FORCED_PERSONA_PENALTY } else { 0.0 },
    }
}
