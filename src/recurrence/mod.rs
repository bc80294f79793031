pub mod engine;
pub mod input;
pub mod types;
pub mod verifier;

pub use engine::{evaluate, max_supported_n, sequence};
pub use input::InputParser;
pub use verifier::KnownValues;
