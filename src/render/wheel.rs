use serde_json::{Value, json};

use crate::pipeline::types::round2;

/// Somatic code -> (yin name, yin [valence, arousal], yang name, yang
/// [valence, arousal]) on the affective circumplex.
const EMOTION_WHEEL: [(&str, &str, [f64; 2], &str, [f64; 2]); 6] = [
    ("111000", "Anxious", [-0.6, 0.8], "Hopeful", [0.6, 0.8]),
    ("111100", "Terrified", [-0.9, 1.0], "Excited", [0.9, 1.0]),
    ("101010", "Angry", [-0.8, 0.9], "Motivated", [0.8, 0.9]),
    ("001010", "Frustrated", [-0.5, 0.5], "Satisfied", [0.5, 0.3]),
    ("110000", "Confused", [-0.3, 0.6], "Determined", [0.7, 0.7]),
    ("000000", "Bored", [-0.2, 0.1], "Curious", [0.4, 0.4]),
];

const FALLBACK_CODE: &str = "110000";

/// Projects the somatic code onto the circumplex wheel document. Unknown
/// codes fall back to the confusion/determination pair.
pub fn wheel_document(somatic_code: &str) -> Value {
    let entry = EMOTION_WHEEL
        .iter()
        .find(|(code, ..)| *code == somatic_code)
        .or_else(|| EMOTION_WHEEL.iter().find(|(code, ..)| *code == FALLBACK_CODE))
        .expect("fallback wheel entry is always present");
    let (_, yin_name, yin_coord, yang_name, yang_coord) = entry;

    json!({
        "manifold_type": "Affective_Circumplex",
        "current_locus": {
            "state": yin_name,
            "polarity": "YIN_CONTRACTION",
            "coordinates": { "valence": yin_coord[0], "arousal": yin_coord[1] }
        },
        "target_locus": {
            "state": yang_name,
            "polarity": "YANG_EXPANSION",
            "coordinates": { "valence": yang_coord[0], "arousal": yang_coord[1] }
        },
        "polarity_flip_distance": round2((yang_coord[0] - yin_coord[0]).abs()),
        "system_directive": format!(
            "You are currently at Valence {}. Assert F_ego to cross zero-point to Valence {}.",
            yin_coord[0], yang_coord[0]
        ),
    })
}
