mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CalculatorConfig, Config, LoggingConfig, UiConfig};
