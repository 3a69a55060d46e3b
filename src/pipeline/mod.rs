pub mod dissonance;
pub mod ingestion;
pub mod integrity;
pub mod retrieval;
pub mod router;
pub mod runner;
pub mod somatic;
pub mod types;

pub use retrieval::MemoryCorpus;
pub use runner::Pipeline;
pub use types::{
    AffectiveDashboard, ChronosStamp, ContextPacket, CorpusRecord, DissonanceDashboard,
    HaltStatus, HardwareUnit, InputCategory, InputTensor, IntegrityStatus, MachineOutput,
    MemoryTelemetry, PipelineResult, PipelineRun, RecordKind, Tier1Status, Tier2Status,
    TransmissionPacket,
};
