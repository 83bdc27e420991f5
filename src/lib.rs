pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::ScenarioConfig;

pub use adapters::data_sources::{Api, Database, StaticSource};
pub use crate::core::{
    area::AreaCalculator,
    devices::{ModernPrinter, OldPrinter},
    files::{FileManager, ZipFileManager},
    frontend::FrontEnd,
    registry::CapabilityRegistry,
    shapes::{Circle, Rectangle, Square},
};
pub use domain::model::{AreaEntry, AreaReport, Document, ShapeSpec};
pub use domain::ports::{Archiver, DataSource, Fax, Printer, Scanner, Shape, TextStore};
pub use utils::error::{Result, SolidError};
