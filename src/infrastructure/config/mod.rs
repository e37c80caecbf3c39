//! # Configuration
//!
//! Settings shared by the `plan` and `planner-server` binaries.

pub mod settings;

pub use settings::{
    DEFAULT_CONFIG_FILE, DataSettings, ENV_PREFIX, LogFormat, LoggingSettings, ServerSettings,
    Settings,
};
