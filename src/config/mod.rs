mod types;
mod loader;
pub(crate) mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, ConfigOverrides};
