use crate::{
    memory::ShortTermMemory,
    pipeline::{
        dissonance, ingestion, integrity,
        retrieval::{self, MemoryCorpus},
        router, somatic,
        types::{PipelineResult, PipelineRun},
    },
    state::StateVector,
};

/// The staged cognitive pipeline. Strictly sequential within one run; the
/// state vector and the short-term memory are the only shared mutable
/// resources, both owned by the calling session.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    corpus: MemoryCorpus,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            corpus: MemoryCorpus::builtin(),
        }
    }

    pub fn with_corpus(corpus: MemoryCorpus) -> Self {
        Self { corpus }
    }

    /// Runs every stage in order against the session state. Returns
    /// `Halted` when the integrity solver collapses; mutations made up to
    /// and including the failing stage are kept.
    #[tracing::instrument(name = "pipeline_run", target = "pipeline", skip_all)]
    pub fn run(
        &self,
        raw_text: &str,
        state: &mut StateVector,
        memory: &mut ShortTermMemory,
    ) -> PipelineResult {
        let tensor = ingestion::ingest(raw_text, state);
        tracing::debug!(
            target: "pipeline",
            is_genesis_event = tensor.is_genesis_event,
            category = ?tensor.category,
            "ingested"
        );

        let dissonance = dissonance::measure(&tensor, state);
        tracing::debug!(
            target: "pipeline",
            dissonance = state.dissonance_total,
            neutrality = dissonance.neutrality,
            proper_time = state.proper_time,
            "measured"
        );

        let context = retrieval::search(&tensor, &self.corpus, state);
        tracing::debug!(
            target: "pipeline",
            tier_1 = ?context.tier_1,
            tier_2 = ?context.tier_2,
            halt = ?context.halt,
            "searched"
        );

        let memory_telemetry = memory.bind(&tensor, &context.records, state.dissonance_total);
        tracing::debug!(
            target: "pipeline",
            coherence = memory_telemetry.coherence,
            saturation = memory_telemetry.saturation,
            "bound"
        );

        let affective = somatic::stabilize(state.dissonance_total, &context, state);
        tracing::debug!(
            target: "pipeline",
            somatic_code = %affective.somatic_code,
            directive = %affective.directive,
            "stabilized"
        );

        let transmission = router::route(&affective, state);
        tracing::debug!(
            target: "pipeline",
            selected_mode = %transmission.selected_mode,
            "routed"
        );

        let machine = integrity::solve(&transmission, &context, state);
        tracing::debug!(
            target: "pipeline",
            s_dot = machine.s_dot,
            ego_force = machine.ego_force,
            status = ?machine.status,
            "solved"
        );

        if !machine.action_allowed {
            return PipelineResult::Halted {
                reason: machine.status.label().to_string(),
            };
        }

        PipelineResult::Proceed(Box::new(PipelineRun {
            tensor,
            dissonance,
            context,
            memory: memory_telemetry,
            affective,
            transmission,
            machine,
        }))
    }
}
