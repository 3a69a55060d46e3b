use limbic::pipeline::{
    HaltStatus, MemoryCorpus, Tier1Status, Tier2Status, retrieval::search,
};

use crate::common::{carved_state, tensor_with_vector};

#[test]
fn tier1_matches_resonant_chronos_logs() {
    let mut state = carved_state();
    state.dissonance_total = 0.2;
    // Close to the seed log vector [0.2, 0.4, 0.8].
    let tensor = tensor_with_vector("hi", [0.01, 0.45, 0.88]);

    let packet = search(&tensor, &MemoryCorpus::builtin(), &mut state);

    assert_eq!(packet.tier_1, Tier1Status::DirectMatchFound);
    assert_eq!(packet.records.len(), 1);
    assert_eq!(packet.records[0].id, "doc_01");
    assert_eq!(packet.retrieved_content.len(), 1);
}

#[test]
fn tier2_stays_idle_at_or_below_gate() {
    let mut state = carved_state();
    state.dissonance_total = 0.3;
    let tensor = tensor_with_vector("hi", [0.5, 0.8, 0.9]);

    let packet = search(&tensor, &MemoryCorpus::builtin(), &mut state);
    assert_eq!(packet.tier_2, Tier2Status::Idle);
}

#[test]
fn tier2_resonates_against_ghost_vector() {
    let mut state = carved_state();
    state.dissonance_total = 0.4;
    // Ghost becomes |0.96 - v| = [0.46, 0.16, 0.06]: resonant with the
    // concept record [0.8, 0.1, 0.2], while the raw input misses tier 1.
    let tensor = tensor_with_vector("tell me about effortless action", [0.5, 0.8, 0.9]);

    let packet = search(&tensor, &MemoryCorpus::builtin(), &mut state);

    assert_eq!(packet.tier_1, Tier1Status::Exhausted);
    assert_eq!(packet.tier_2, Tier2Status::ActiveResonance);
    assert_eq!(packet.records.len(), 1);
    assert_eq!(packet.records[0].id, "doc_02");
    assert_eq!(packet.halt, HaltStatus::NotTriggered);
}

#[test]
fn halt_fires_on_high_dissonance_with_empty_retrieval() {
    let mut state = carved_state();
    state.dissonance_total = 0.85;
    state.proper_time = 1.0;
    let tensor = tensor_with_vector("long hostile text", [1.0, 0.45, 0.88]);

    let packet = search(&tensor, &MemoryCorpus::builtin(), &mut state);

    assert_eq!(packet.tier_1, Tier1Status::Exhausted);
    assert_eq!(packet.tier_2, Tier2Status::Failed);
    assert_eq!(packet.halt, HaltStatus::Triggered);
    // The jump is additive on top of whatever measurement already did.
    assert!((state.proper_time - 3.0).abs() < 1e-9);
    assert_eq!(packet.records.len(), 1);
    assert_eq!(packet.records[0].id, "SYS_HALT");
    assert_eq!(packet.retrieved_content.len(), 1);
}

#[test]
fn halt_stays_quiet_when_context_was_retrieved() {
    let mut state = carved_state();
    state.dissonance_total = 0.85;
    state.proper_time = 1.0;
    // Tier 1 resonates, so the halt rule has context to work with.
    let tensor = tensor_with_vector("hi", [0.01, 0.45, 0.88]);

    let packet = search(&tensor, &MemoryCorpus::builtin(), &mut state);

    assert_eq!(packet.tier_1, Tier1Status::DirectMatchFound);
    assert_eq!(packet.halt, HaltStatus::NotTriggered);
    assert_eq!(state.proper_time, 1.0, "no halt, no pacing jump");
}

#[test]
fn empty_corpus_exhausts_both_tiers() {
    let mut state = carved_state();
    state.dissonance_total = 0.5;
    let tensor = tensor_with_vector("hi", [0.01, 0.45, 0.88]);

    let packet = search(&tensor, &MemoryCorpus::with_entries(Vec::new()), &mut state);

    assert_eq!(packet.tier_1, Tier1Status::Exhausted);
    assert_eq!(packet.tier_2, Tier2Status::Failed);
    // Dissonance below the halt gate: exhaustion alone does not halt.
    assert_eq!(packet.halt, HaltStatus::NotTriggered);
    assert!(packet.records.is_empty());
}
