use limbic::modulators::{ToneCocktail, mix};

#[test]
fn unknown_mode_keeps_the_baseline() {
    let tone = mix("Habitual / Procedural Thought", 0.2);
    assert_eq!(tone, ToneCocktail::baseline());
}

#[test]
fn analytical_mode_sharpens_focus() {
    let tone = mix("Analytical Thought", 0.2);
    assert_eq!(tone.acetylcholine, 0.95);
    assert_eq!(tone.norepinephrine, 0.6);
    assert_eq!(tone.dopamine, 0.6);
    assert_eq!(tone.serotonin, 0.5, "untouched channels stay at baseline");
}

#[test]
fn creative_mode_relaxes_vigilance() {
    let tone = mix("Creative Thought", 0.2);
    assert_eq!(tone.dopamine, 0.9);
    assert_eq!(tone.norepinephrine, 0.2);
    assert_eq!(tone.neurotrophin, 0.8);
}

#[test]
fn threat_override_trumps_the_mode_mix() {
    let tone = mix("Critical Thought", 0.85);
    assert_eq!(tone.norepinephrine, 1.0, "override beats the mode's 0.95");
    assert_eq!(tone.corticotropin, 1.0);
    assert_eq!(tone.serotonin, 0.1);
    assert_eq!(tone.oxytocin, 0.0);
    assert_eq!(tone.acetylcholine, 0.8, "mode mix still applies elsewhere");
    assert_eq!(tone.histamine, 0.8, "no overload damping below 0.95");
}

#[test]
fn overload_damper_floods_on_extreme_dissonance() {
    let tone = mix("Critical Thought", 0.96);
    assert_eq!(tone.endocannabinoid, 1.0);
    assert_eq!(tone.histamine, 0.4);
    assert_eq!(tone.norepinephrine, 1.0, "threat override also active");
}
