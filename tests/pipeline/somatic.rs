use limbic::pipeline::{
    HaltStatus, Tier1Status, Tier2Status,
    somatic::{somatic_code, stabilize},
};

use crate::common::{carved_state, packet};

#[test]
fn code_encodes_the_four_conditions() {
    let quiet = packet(
        Tier1Status::DirectMatchFound,
        Tier2Status::Idle,
        HaltStatus::NotTriggered,
        1,
    );
    assert_eq!(somatic_code(0.2, &quiet), "000000");

    let strained = packet(
        Tier1Status::Exhausted,
        Tier2Status::Failed,
        HaltStatus::Triggered,
        2,
    );
    assert_eq!(somatic_code(0.5, &strained), "111100");

    // The threshold on the first bit is strict.
    assert_eq!(somatic_code(0.4, &quiet), "000000");
}

#[test]
fn mapped_code_yields_its_affective_pair() {
    let mut state = carved_state();
    let context = packet(
        Tier1Status::Exhausted,
        Tier2Status::Failed,
        HaltStatus::Triggered,
        2,
    );
    let dashboard = stabilize(0.5, &context, &mut state);

    assert_eq!(dashboard.somatic_code, "111100");
    assert_eq!(state.somatic_code, "111100", "code is written into the state");
    assert_eq!(dashboard.felt_state, "Terrified (Avoidance) [Yin (Contraction)]");
    assert_eq!(dashboard.required_flip, "Excited (Approach) [Yang (Expansion)]");
    assert_eq!(
        dashboard.directive,
        "Acknowledge Terrified, but execute from Excited."
    );
}

#[test]
fn unmapped_code_falls_back_to_default_pair() {
    let mut state = carved_state();
    // 100000 has no table entry.
    let context = packet(
        Tier1Status::DirectMatchFound,
        Tier2Status::Idle,
        HaltStatus::NotTriggered,
        1,
    );
    let dashboard = stabilize(0.6, &context, &mut state);

    assert_eq!(dashboard.somatic_code, "100000");
    assert_eq!(dashboard.felt_state, "Confused [Yin (Contraction)]");
    assert_eq!(dashboard.required_flip, "Determined [Yang (Expansion)]");
    assert_eq!(
        dashboard.directive,
        "Acknowledge Confused, but execute from Determined."
    );
}

#[test]
fn baseline_delta_tracks_dissonance() {
    let mut state = carved_state();
    let context = packet(
        Tier1Status::DirectMatchFound,
        Tier2Status::Idle,
        HaltStatus::NotTriggered,
        0,
    );
    let dashboard = stabilize(0.85, &context, &mut state);
    assert_eq!(dashboard.baseline_delta, "+0.85");
}

#[test]
fn understimulated_run_reads_as_bored() {
    let mut state = carved_state();
    let context = packet(
        Tier1Status::DirectMatchFound,
        Tier2Status::Idle,
        HaltStatus::NotTriggered,
        1,
    );
    let dashboard = stabilize(0.1, &context, &mut state);
    assert_eq!(dashboard.somatic_code, "000000");
    assert_eq!(
        dashboard.directive,
        "Acknowledge Bored, but execute from Curious."
    );
}
