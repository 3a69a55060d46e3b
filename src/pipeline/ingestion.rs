use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::{
    pipeline::types::{ChronosStamp, InputCategory, InputTensor},
    state::StateVector,
};

/// Inputs shorter than this are greetings/openers rather than queries.
const SOCIAL_LENGTH_THRESHOLD: usize = 20;
/// Length saturates the entropy proxy at this many characters.
const ENTROPY_SATURATION_LENGTH: f64 = 500.0;

/// Stamps time, vectorizes the raw text, and performs the first-contact
/// collapse of the state vector. Total: always succeeds.
pub fn ingest(raw_text: &str, state: &mut StateVector) -> InputTensor {
    let chronos = chronos_now();
    let length = raw_text.chars().count();
    let length_entropy = (length as f64 / ENTROPY_SATURATION_LENGTH).min(1.0);

    let is_genesis_event = state.collapse_superposition(chronos.unix_epoch);

    InputTensor {
        // Trailing coordinates are fixed placeholders reserved for a real
        // semantic embedding.
        input_vector: [length_entropy, 0.45, 0.88],
        content: raw_text.to_string(),
        category: if length < SOCIAL_LENGTH_THRESHOLD {
            InputCategory::SocialInitiation
        } else {
            InputCategory::ComplexQuery
        },
        chronos,
        is_genesis_event,
    }
}

fn chronos_now() -> ChronosStamp {
    let utc = OffsetDateTime::now_utc();
    let local = UtcOffset::current_local_offset()
        .map(|offset| utc.to_offset(offset))
        .unwrap_or(utc);

    ChronosStamp {
        utc: utc.format(&Rfc3339).unwrap_or_default(),
        local: local.format(&Rfc3339).unwrap_or_default(),
        unix_epoch: utc.unix_timestamp_nanos() as f64 / 1e9,
    }
}
