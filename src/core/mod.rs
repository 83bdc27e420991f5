pub mod area;
pub mod devices;
pub mod files;
pub mod frontend;
pub mod registry;
pub mod shapes;

pub use crate::domain::model::{AreaEntry, AreaReport, Document, ShapeSpec};
pub use crate::domain::ports::{Archiver, DataSource, Fax, Printer, Scanner, Shape, TextStore};
pub use crate::utils::error::Result;
