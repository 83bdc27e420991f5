use crate::adapters::data_sources::{Api, Database};
use crate::core::devices::{ModernPrinter, OldPrinter};
use crate::domain::ports::{DataSource, Fax, Printer, Scanner, Shape};
use crate::utils::error::{Result, SolidError};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

pub const PRINT: &str = "print";
pub const FAX: &str = "fax";
pub const SCAN: &str = "scan";
pub const FETCH: &str = "fetch";

/// Named implementers, grouped by the contract they were registered under.
///
/// A device that offers several capabilities is registered once per
/// contract, sharing the same `Arc`. Lookups only ever hand out the contract
/// that was asked for.
#[derive(Default)]
pub struct CapabilityRegistry {
    printers: HashMap<String, Arc<dyn Printer>>,
    faxes: HashMap<String, Arc<dyn Fax>>,
    scanners: HashMap<String, Arc<dyn Scanner>>,
    data_sources: HashMap<String, Arc<dyn DataSource>>,
    shapes: Vec<Box<dyn Shape>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `old` prints, `modern` prints, faxes and scans, `database` and `api`
    /// are data sources.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_printer("old", Arc::new(OldPrinter));
        registry.register_office_device("modern", Arc::new(ModernPrinter));
        registry.register_data_source("database", Arc::new(Database));
        registry.register_data_source("api", Arc::new(Api));
        registry
    }

    pub fn register_printer(&mut self, name: impl Into<String>, printer: Arc<dyn Printer>) {
        let name = name.into();
        tracing::debug!("Registering printer '{}'", name);
        self.printers.insert(name, printer);
    }

    pub fn register_fax(&mut self, name: impl Into<String>, fax: Arc<dyn Fax>) {
        let name = name.into();
        tracing::debug!("Registering fax '{}'", name);
        self.faxes.insert(name, fax);
    }

    pub fn register_scanner(&mut self, name: impl Into<String>, scanner: Arc<dyn Scanner>) {
        let name = name.into();
        tracing::debug!("Registering scanner '{}'", name);
        self.scanners.insert(name, scanner);
    }

    pub fn register_data_source(&mut self, name: impl Into<String>, source: Arc<dyn DataSource>) {
        let name = name.into();
        tracing::debug!("Registering data source '{}'", name);
        self.data_sources.insert(name, source);
    }

    /// Registers one device under all three office contracts.
    pub fn register_office_device<T>(&mut self, name: impl Into<String>, device: Arc<T>)
    where
        T: Printer + Fax + Scanner + 'static,
    {
        let name = name.into();
        self.register_printer(name.clone(), device.clone());
        self.register_fax(name.clone(), device.clone());
        self.register_scanner(name, device);
    }

    /// 依名稱取得印表機；未註冊時回傳 `CapabilityNotRegistered`
    pub fn printer(&self, name: &str) -> Result<Arc<dyn Printer>> {
        lookup(&self.printers, PRINT, name)
    }

    pub fn fax(&self, name: &str) -> Result<Arc<dyn Fax>> {
        lookup(&self.faxes, FAX, name)
    }

    pub fn scanner(&self, name: &str) -> Result<Arc<dyn Scanner>> {
        lookup(&self.scanners, SCAN, name)
    }

    pub fn data_source(&self, name: &str) -> Result<Arc<dyn DataSource>> {
        lookup(&self.data_sources, FETCH, name)
    }

    pub fn add_shape(&mut self, shape: Box<dyn Shape>) {
        tracing::debug!("Adding {} to registry", shape.name());
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    /// Contracts registered under `name`, in a fixed order.
    pub fn capabilities_of(&self, name: &str) -> Vec<&'static str> {
        let mut capabilities = Vec::new();
        if self.printers.contains_key(name) {
            capabilities.push(PRINT);
        }
        if self.faxes.contains_key(name) {
            capabilities.push(FAX);
        }
        if self.scanners.contains_key(name) {
            capabilities.push(SCAN);
        }
        if self.data_sources.contains_key(name) {
            capabilities.push(FETCH);
        }
        capabilities
    }

    /// 所有已註冊名稱（排序後）
    pub fn names(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .printers
            .keys()
            .chain(self.faxes.keys())
            .chain(self.scanners.keys())
            .chain(self.data_sources.keys())
            .collect();
        names.into_iter().cloned().collect()
    }
}

fn lookup<T: ?Sized>(
    entries: &HashMap<String, Arc<T>>,
    capability: &'static str,
    name: &str,
) -> Result<Arc<T>> {
    entries
        .get(name)
        .cloned()
        .ok_or_else(|| SolidError::CapabilityNotRegistered {
            capability,
            name: name.to_string(),
        })
}
