use serde_json::{Value, json};

use crate::pipeline::types::{round2, round3};

/// Fixed neural atlas: uid -> (display name, position, color).
const ATLAS: [(&str, &str, [i32; 3], &str); 4] = [
    ("brain-pfc-v2.1", "Prefrontal Cortex", [0, 50, 30], "#D4AF37"),
    ("brain-acc-v1.0", "Anterior Cingulate", [0, 30, 20], "#FF0000"),
    ("brain-amg-v1.0", "Amygdala", [-25, -5, -15], "#FF4500"),
    ("brain-lc-v1.0", "Locus Coeruleus", [5, -35, -5], "#0000FF"),
];

/// Nodes that swell under dissonance.
const DISSONANCE_SCALED: [&str; 2] = ["brain-acc-v1.0", "brain-amg-v1.0"];

/// Renders the active circuit against the atlas. Uids without an atlas
/// entry are skipped.
pub fn topology_document(active_uids: &[String], s_dot: f64, dissonance_total: f64) -> Value {
    let nodes: Vec<Value> = active_uids
        .iter()
        .filter_map(|uid| {
            ATLAS
                .iter()
                .find(|(atlas_uid, ..)| atlas_uid == uid)
                .map(|(atlas_uid, name, pos, color)| {
                    let scale = if DISSONANCE_SCALED.contains(atlas_uid) {
                        1.0 + dissonance_total * 0.5
                    } else {
                        1.0
                    };
                    json!({
                        "id": atlas_uid,
                        "label": name,
                        "position": { "x": pos[0], "y": pos[1], "z": pos[2] },
                        "color": color,
                        "activation_scale": round2(scale),
                    })
                })
        })
        .collect();

    json!({
        "system_state": "ACTIVE_SOLVE",
        "global_velocity_S_dot": round3(s_dot),
        "global_dissonance_D": round3(dissonance_total),
        "active_manifold": { "nodes": nodes, "edges": [] },
    })
}
