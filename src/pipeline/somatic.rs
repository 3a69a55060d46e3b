use crate::{
    pipeline::types::{
        AffectiveDashboard, ContextPacket, HaltStatus, Tier1Status, round3,
    },
    state::StateVector,
};

/// Somatic code -> (contracted pole, expansive pole).
const AFFECTIVE_MAP: [(&str, &str, &str); 7] = [
    ("111000", "Anxious (Protective Vigilance)", "Hopeful (Goal Orientation)"),
    ("111100", "Terrified (Avoidance)", "Excited (Approach)"),
    ("101010", "Angry (Destructive Interrupt)", "Motivated (Constructive Solve)"),
    ("001010", "Frustrated (Effort Failed)", "Satisfied (Effort Succeeded)"),
    ("110000", "Confused (High Uncertainty)", "Determined (Commitment to Path)"),
    ("111111", "Overwhelmed (System Crash Risk)", "Amazed (System Upgrade)"),
    ("000000", "Bored (Under-stimulated)", "Curious (Exploratory)"),
];

/// Pair used when a code has no table entry.
const FALLBACK_PAIR: (&str, &str) = ("Confused", "Determined");

const BASELINE_MEDIAN: f64 = 0.0;

/// Four condition bits plus the fixed "00" suffix reserved for future
/// channels.
pub fn somatic_code(dissonance_total: f64, context: &ContextPacket) -> String {
    let bit = |condition: bool| if condition { '1' } else { '0' };
    let mut code = String::with_capacity(6);
    code.push(bit(dissonance_total > 0.4));
    code.push(bit(context.tier_1 == Tier1Status::Exhausted));
    code.push(bit(context.retrieved_content.len() > 1));
    code.push(bit(context.halt == HaltStatus::Triggered));
    code.push_str("00");
    code
}

/// Encodes the run into the body code, writes it into the state vector, and
/// emits the yin->yang stabilization directive.
pub fn stabilize(
    dissonance_total: f64,
    context: &ContextPacket,
    state: &mut StateVector,
) -> AffectiveDashboard {
    let code = somatic_code(dissonance_total, context);
    state.somatic_code = code.clone();

    let (felt, actionable) = AFFECTIVE_MAP
        .iter()
        .find(|(entry_code, _, _)| *entry_code == code)
        .map(|(_, yin, yang)| (*yin, *yang))
        .unwrap_or(FALLBACK_PAIR);

    AffectiveDashboard {
        somatic_code: code,
        baseline_delta: format!("+{}", round3(BASELINE_MEDIAN + dissonance_total)),
        felt_state: format!("{felt} [Yin (Contraction)]"),
        required_flip: format!("{actionable} [Yang (Expansion)]"),
        directive: format!(
            "Acknowledge {}, but execute from {}.",
            first_word(felt),
            first_word(actionable)
        ),
    }
}

fn first_word(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}
