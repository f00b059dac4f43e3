pub use self::manager::{load_config, validate_environment_name};
pub use self::types::*;

mod manager;
mod types;
