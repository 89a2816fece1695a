pub mod errors;
pub mod id;
pub mod types;

pub use errors::ConfigError;
pub use id::{new_correlation_id, UserId};
pub use types::WireFormat;
