pub mod briefing;
pub mod latent;
pub mod topology;
pub mod wheel;

pub use briefing::{REFUSAL_LINE, compose};
pub use latent::latent_document;
pub use topology::topology_document;
pub use wheel::wheel_document;
