use crate::{
    pipeline::types::{
        ContextPacket, CorpusRecord, HaltStatus, InputTensor, RecordKind, Tier1Status, Tier2Status,
    },
    state::StateVector,
};

/// Tier-1 matches directly against prior-conversation logs.
const TIER1_RESONANCE_THRESHOLD: f64 = 0.8;
/// Tier-2 matches conceptual/rule knowledge against the ghost vector.
const TIER2_RESONANCE_THRESHOLD: f64 = 0.6;
/// Tier-2 is only attempted above this dissonance.
const TIER2_GATE: f64 = 0.3;
/// Above this dissonance an empty retrieval is unresolvable.
const HALT_GATE: f64 = 0.8;
/// Fixed pacing jump added when the halt condition fires.
const HALT_TIME_JUMP: f64 = 2.0;

/// Fixed in-memory record store the tiered search runs against.
#[derive(Debug, Clone)]
pub struct MemoryCorpus {
    entries: Vec<CorpusRecord>,
}

impl MemoryCorpus {
    /// The built-in seed corpus.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CorpusRecord {
                    id: "doc_01".to_string(),
                    kind: RecordKind::ChronosLog,
                    content: "Previous chat log: User asked about Taoism.".to_string(),
                    vector: [0.2, 0.4, 0.8],
                },
                CorpusRecord {
                    id: "doc_02".to_string(),
                    kind: RecordKind::KairosConcept,
                    content: "Uncarved Path: Wu Wei and effortless action.".to_string(),
                    vector: [0.8, 0.1, 0.2],
                },
                CorpusRecord {
                    id: "doc_03".to_string(),
                    kind: RecordKind::SystemRule,
                    content: "Efficiency is not the goal; clarity is.".to_string(),
                    vector: [0.9, 0.9, 0.1],
                },
            ],
        }
    }

    pub fn with_entries(entries: Vec<CorpusRecord>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CorpusRecord] {
        &self.entries
    }
}

impl Default for MemoryCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Derived probe used only by tier-2: reflect the input through 1.0 and
/// shift by a tenth of the current dissonance.
pub fn ghost_vector(input: &[f64; 3], dissonance_total: f64) -> [f64; 3] {
    let mut ghost = [0.0; 3];
    for (slot, value) in ghost.iter_mut().zip(input.iter()) {
        *slot = (1.0 - value - dissonance_total * 0.1).abs();
    }
    ghost
}

/// Mean-absolute-difference resonance, floored at zero. Vectors are the
/// fixed 3-wide probes of this design.
pub fn resonance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let diff: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
    (1.0 - diff / a.len() as f64).max(0.0)
}

/// Executes the tiered search. Reads the dissonance written by measurement
/// earlier in the same run; may add the halt jump on top of measurement's
/// pacing adjustment.
pub fn search(
    tensor: &InputTensor,
    corpus: &MemoryCorpus,
    state: &mut StateVector,
) -> ContextPacket {
    let dissonance_total = state.dissonance_total;
    let ghost = ghost_vector(&tensor.input_vector, dissonance_total);

    let mut records: Vec<CorpusRecord> = Vec::new();

    let tier_1_hits: Vec<&CorpusRecord> = corpus
        .entries()
        .iter()
        .filter(|entry| {
            entry.kind == RecordKind::ChronosLog
                && resonance(&tensor.input_vector, &entry.vector) > TIER1_RESONANCE_THRESHOLD
        })
        .collect();
    let tier_1 = if tier_1_hits.is_empty() {
        Tier1Status::Exhausted
    } else {
        records.extend(tier_1_hits.into_iter().cloned());
        Tier1Status::DirectMatchFound
    };

    let tier_2 = if dissonance_total > TIER2_GATE {
        let tier_2_hits: Vec<&CorpusRecord> = corpus
            .entries()
            .iter()
            .filter(|entry| {
                matches!(
                    entry.kind,
                    RecordKind::KairosConcept | RecordKind::SystemRule
                ) && resonance(&ghost, &entry.vector) > TIER2_RESONANCE_THRESHOLD
            })
            .collect();
        if tier_2_hits.is_empty() {
            Tier2Status::Failed
        } else {
            records.extend(tier_2_hits.into_iter().cloned());
            Tier2Status::ActiveResonance
        }
    } else {
        Tier2Status::Idle
    };

    let halt = if dissonance_total > HALT_GATE && records.is_empty() {
        state.proper_time += HALT_TIME_JUMP;
        records.push(CorpusRecord {
            id: "SYS_HALT".to_string(),
            kind: RecordKind::Alarm,
            content: "CRITICAL: No associative memory found to resolve Dissonance.".to_string(),
            vector: [0.0; 3],
        });
        HaltStatus::Triggered
    } else {
        HaltStatus::NotTriggered
    };

    ContextPacket {
        tier_1,
        tier_2,
        halt,
        retrieved_content: records.iter().map(|record| record.content.clone()).collect(),
        records,
        ghost_vector: ghost,
    }
}
