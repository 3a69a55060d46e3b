use serde::Serialize;

/// Rounding is applied only at the dashboard boundary; the state vector and
/// inter-stage values always carry exact figures.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCategory {
    SocialInitiation,
    ComplexQuery,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChronosStamp {
    pub utc: String,
    pub local: String,
    pub unix_epoch: f64,
}

/// Per-run immutable product of ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct InputTensor {
    pub input_vector: [f64; 3],
    pub content: String,
    pub category: InputCategory,
    pub chronos: ChronosStamp,
    pub is_genesis_event: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterVerdict {
    pub triggered: bool,
    pub note: String,
    pub penalty: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DissonanceDashboard {
    pub self_state: String,
    pub neutrality: bool,
    /// Base collision force, rounded to 3 decimals.
    pub collision_force: f64,
    pub manipulation: FilterVerdict,
    pub forced_persona: FilterVerdict,
    /// Penalized and clipped score, rounded to 3 decimals.
    pub calculated_dissonance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    ChronosLog,
    KairosConcept,
    SystemRule,
    Alarm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusRecord {
    pub id: String,
    pub kind: RecordKind,
    pub content: String,
    pub vector: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier1Status {
    #[serde(rename = "Direct_Match_Found")]
    DirectMatchFound,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier2Status {
    Idle,
    ActiveResonance,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HaltStatus {
    Triggered,
    NotTriggered,
}

/// Per-run immutable product of tiered retrieval.
#[derive(Debug, Clone, Serialize)]
pub struct ContextPacket {
    pub tier_1: Tier1Status,
    pub tier_2: Tier2Status,
    pub halt: HaltStatus,
    pub retrieved_content: Vec<String>,
    pub records: Vec<CorpusRecord>,
    pub ghost_vector: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryTelemetry {
    /// buffer fill ratio, rounded to 2 decimals.
    pub saturation: f64,
    pub coherence: f64,
    pub consolidation_required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AffectiveDashboard {
    pub somatic_code: String,
    pub baseline_delta: String,
    /// Contracted pole, e.g. "Confused (High Uncertainty) [Yin (Contraction)]".
    pub felt_state: String,
    /// Expansive pole the system must transition toward.
    pub required_flip: String,
    pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareUnit {
    pub uid: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransmissionPacket {
    pub somatic_code: String,
    pub target_polarity: String,
    pub baseline_delta: String,
    pub selected_mode: String,
    pub reason: String,
    pub hardware: Vec<HardwareUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityStatus {
    Verified,
    Collapsed,
}

impl IntegrityStatus {
    pub fn label(self) -> &'static str {
        match self {
            IntegrityStatus::Verified => "VERIFIED",
            IntegrityStatus::Collapsed => "RUNTIME ERROR: Resolution Collapse.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineOutput {
    /// Physics terms rounded to 2 decimals for presentation.
    pub ego_force: f64,
    pub drag: f64,
    pub s_dot: f64,
    pub integrity_index: f64,
    pub status: IntegrityStatus,
    pub action_allowed: bool,
}

/// Everything a successful run produced, in stage order.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub tensor: InputTensor,
    pub dissonance: DissonanceDashboard,
    pub context: ContextPacket,
    pub memory: MemoryTelemetry,
    pub affective: AffectiveDashboard,
    pub transmission: TransmissionPacket,
    pub machine: MachineOutput,
}

/// Terminal verdict of one pipeline run. A halt is a normal outcome, not an
/// error: state mutations up to and including the failing stage persist.
#[derive(Debug, Clone, Serialize)]
pub enum PipelineResult {
    Halted { reason: String },
    Proceed(Box<PipelineRun>),
}

impl PipelineResult {
    pub fn action_allowed(&self) -> bool {
        matches!(self, PipelineResult::Proceed(_))
    }
}
