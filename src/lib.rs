pub mod config;
pub mod divided_name;
pub mod divider;
pub mod error;
pub mod feature;
pub mod rule;
pub mod scorer;
pub mod stats;

pub use config::{DataPaths, NameDividerConfig, NameDividerVersion, ScorerBackend};
pub use divided_name::DividedName;
pub use divider::NameDivider;
pub use error::{NameDividerError, NdResult};
// cmd and reports live in the binary crate.
