use async_trait::async_trait;

use crate::witness::{error::WitnessError, ports::WitnessPort};

/// Offline stand-in for a language backend. Useful for sessions exercising
/// only the pipeline physics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWitness;

#[async_trait]
impl WitnessPort for NoopWitness {
    async fn speak(&self, _briefing: &str) -> Result<String, WitnessError> {
        Ok("I am online. State your parameters.".to_string())
    }
}
