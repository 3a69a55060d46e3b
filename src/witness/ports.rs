use async_trait::async_trait;

use crate::witness::error::WitnessError;

/// The conscious actor sitting downstream of the pipeline. It receives the
/// composed felt-state briefing and returns spoken text; it must never
/// write back into the state vector.
#[async_trait]
pub trait WitnessPort: Send + Sync {
    async fn speak(&self, briefing: &str) -> Result<String, WitnessError>;
}
