#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, ShapeArgs};
pub use toml_config::ScenarioConfig;
