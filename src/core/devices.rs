use crate::domain::model::Document;
use crate::domain::ports::{Fax, Printer, Scanner};

/// Prints in black and white. It offers no fax or scan capability, so it
/// implements `Printer` and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldPrinter;

impl Printer for OldPrinter {
    fn print(&self, document: &Document) -> String {
        let message = format!("Printing {} in black and white...", document);
        tracing::info!("🖨️ {}", message);
        message
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModernPrinter;

impl Printer for ModernPrinter {
    fn print(&self, document: &Document) -> String {
        let message = format!("Printing {} in color...", document);
        tracing::info!("🖨️ {}", message);
        message
    }
}

impl Fax for ModernPrinter {
    fn fax(&self, document: &Document) -> String {
        let message = format!("Faxing {}...", document);
        tracing::info!("📠 {}", message);
        message
    }
}

impl Scanner for ModernPrinter {
    fn scan(&self, document: &Document) -> String {
        let message = format!("Scanning {}...", document);
        tracing::info!("🔍 {}", message);
        message
    }
}
