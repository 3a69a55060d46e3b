use serde_json::{Value, json};

use crate::pipeline::types::CorpusRecord;

const PREVIEW_CHARS: usize = 50;

/// Spatial view of one run: the input collision point, the ghost probe, and
/// the memories it pulled in.
pub fn latent_document(
    input_vector: &[f64; 3],
    ghost_vector: &[f64; 3],
    records: &[CorpusRecord],
    dissonance_total: f64,
) -> Value {
    let memory_nodes: Vec<Value> = records
        .iter()
        .map(|record| {
            json!({
                "id": record.id,
                "kind": record.kind,
                "coordinates": record.vector,
                "content_preview": preview(&record.content),
            })
        })
        .collect();

    json!({
        "manifold_type": "Hilbert_Latent_Space",
        "global_dissonance_D": dissonance_total,
        "entities": {
            "Input_Collision": { "coordinates": input_vector, "color": "#FF0000" },
            "Ghost_Vector": { "coordinates": ghost_vector, "color": "#00FF00" },
            "Active_Memories": memory_nodes,
        },
    })
}

fn preview(content: &str) -> String {
    let truncated: String = content.chars().take(PREVIEW_CHARS).collect();
    format!("{truncated}...")
}
