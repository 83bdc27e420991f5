//! Capability contracts. Each trait names one cohesive capability; a type
//! that offers several capabilities implements several traits.

use crate::domain::model::Document;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Anything with a computable area.
pub trait Shape: Send + Sync {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

pub trait Printer: Send + Sync {
    fn print(&self, document: &Document) -> String;
}

pub trait Fax: Send + Sync {
    fn fax(&self, document: &Document) -> String;
}

pub trait Scanner: Send + Sync {
    fn scan(&self, document: &Document) -> String;
}

/// Where a front end gets the data it displays.
pub trait DataSource: Send + Sync {
    fn fetch_data(&self) -> String;
}

/// Whole-file text access.
pub trait TextStore: Send + Sync {
    fn read(&self) -> Result<String>;
    fn write(&self, data: &str) -> Result<()>;
}

/// Packs a single file into a sibling `.zip` archive and back.
pub trait Archiver: Send + Sync {
    /// Returns the path of the archive written.
    fn compress(&self) -> Result<PathBuf>;
    /// Returns the paths extracted.
    fn decompress(&self) -> Result<Vec<PathBuf>>;
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch_data(&self) -> String {
        (**self).fetch_data()
    }
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn fetch_data(&self) -> String {
        (**self).fetch_data()
    }
}

impl<T: DataSource + ?Sized> DataSource for std::sync::Arc<T> {
    fn fetch_data(&self) -> String {
        (**self).fetch_data()
    }
}
