pub mod error;
pub mod http;
pub mod noop;
pub mod ports;

pub use error::{WitnessError, WitnessErrorKind};
pub use http::HttpWitness;
pub use noop::NoopWitness;
pub use ports::WitnessPort;
