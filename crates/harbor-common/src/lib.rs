pub mod errors;
pub mod types;

pub use errors::{ConfigError, HarborError};
pub use types::MatchPolicy;
