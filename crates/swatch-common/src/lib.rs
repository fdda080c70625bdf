pub mod errors;
pub mod hex;
pub mod id;
pub mod types;

pub use errors::{ConfigError, SwatchError};
pub use id::new_id;
pub use types::Color;

pub type Result<T> = std::result::Result<T, SwatchError>;
