use limbic::{
    memory::ShortTermMemory,
    pipeline::{CorpusRecord, Pipeline, PipelineResult, RecordKind},
    render,
    state::StateVector,
};

#[test]
fn wheel_projects_known_codes() {
    let doc = render::wheel_document("111100");
    assert_eq!(doc["current_locus"]["state"], "Terrified");
    assert_eq!(doc["current_locus"]["coordinates"]["valence"], -0.9);
    assert_eq!(doc["target_locus"]["state"], "Excited");
    assert_eq!(doc["polarity_flip_distance"], 1.8);
}

#[test]
fn wheel_falls_back_for_unknown_codes() {
    let doc = render::wheel_document("101011");
    assert_eq!(doc["current_locus"]["state"], "Confused");
    assert_eq!(doc["target_locus"]["state"], "Determined");
    assert_eq!(doc["polarity_flip_distance"], 1.0);
}

#[test]
fn topology_skips_uids_missing_from_the_atlas() {
    let active = vec![
        "brain-pfc-v2.1".to_string(),
        "brain-acc-v1.0".to_string(),
        "brain-unknown-v9.9".to_string(),
    ];
    let doc = render::topology_document(&active, 1.2, 0.8);

    let nodes = doc["active_manifold"]["nodes"]
        .as_array()
        .expect("nodes array");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["label"], "Prefrontal Cortex");
    assert_eq!(nodes[0]["activation_scale"], 1.0);
    assert_eq!(nodes[1]["activation_scale"], 1.4, "conflict node swells");
    assert_eq!(doc["global_velocity_S_dot"], 1.2);
}

#[test]
fn latent_view_previews_record_content() {
    let record = CorpusRecord {
        id: "doc_99".to_string(),
        kind: RecordKind::SystemRule,
        content: "z".repeat(80),
        vector: [0.1, 0.2, 0.3],
    };
    let doc = render::latent_document(&[0.5, 0.45, 0.88], &[0.4, 0.5, 0.02], &[record], 0.42);

    let memories = doc["entities"]["Active_Memories"]
        .as_array()
        .expect("memory nodes");
    let preview = memories[0]["content_preview"].as_str().expect("preview text");
    assert_eq!(preview.len(), 53);
    assert!(preview.ends_with("..."));
    assert_eq!(doc["global_dissonance_D"], 0.42);
}

#[test]
fn briefing_carries_the_operational_summary() {
    let pipeline = Pipeline::new();
    let mut state = StateVector::new();
    let mut memory = ShortTermMemory::default();
    pipeline.run("hello", &mut state, &mut memory);

    let result = pipeline.run(&"a".repeat(500), &mut state, &mut memory);
    let PipelineResult::Proceed(run) = result else {
        panic!("second neutral run should proceed");
    };

    let briefing = render::compose(&run, &memory);
    assert!(briefing.starts_with("[SYSTEM PHYSIOLOGY INJECTION"));
    assert!(briefing.contains("Somatic State: 010000"));
    assert!(briefing.contains("Cognitive Strategy: Analytical Thought"));
    assert!(briefing.contains("Affective_Circumplex"));
    assert!(briefing.contains("Hilbert_Latent_Space"));
    assert!(briefing.contains("ACTIVE_SOLVE"));
    assert!(briefing.contains("Recent Working Memory"));
    assert!(briefing.contains("User Prompt: aaaa"));
    assert!(briefing.ends_with("\n"));
}
