mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, LoggingSettings, ModelSettings, ServerSettings, Settings, SettingsError,
};
