use crate::domain::model::ShapeSpec;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid")]
#[command(about = "Capability contracts and the implementers that satisfy them")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the area of one shape
    Area {
        #[command(subcommand)]
        shape: ShapeArgs,
    },
    /// Print a document on a registered printer
    Print {
        #[arg(long, default_value = "old")]
        device: String,
        document: String,
    },
    /// Fax a document from a registered fax
    Fax {
        #[arg(long, default_value = "modern")]
        device: String,
        document: String,
    },
    /// Scan a document on a registered scanner
    Scan {
        #[arg(long, default_value = "modern")]
        device: String,
        document: String,
    },
    /// Show data fetched from a data source
    Display {
        #[arg(long, value_enum, default_value_t = SourceKind::Database)]
        source: SourceKind,
    },
    /// Pack a file into a sibling .zip archive
    Compress { file: PathBuf },
    /// Extract the sibling .zip archive of a file
    Decompress { file: PathBuf },
    /// Run a TOML scenario file
    Run {
        scenario: PathBuf,
        #[arg(long, help = "Print the area report as JSON")]
        json: bool,
    },
    /// List registered devices and the contracts they satisfy
    Capabilities,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ShapeArgs {
    Circle {
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
    },
    Rectangle {
        #[arg(long, allow_negative_numbers = true)]
        width: f64,
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
    Square {
        #[arg(long, allow_negative_numbers = true)]
        side: f64,
    },
}

impl From<&ShapeArgs> for ShapeSpec {
    fn from(args: &ShapeArgs) -> Self {
        match *args {
            ShapeArgs::Circle { radius } => ShapeSpec::Circle { radius },
            ShapeArgs::Rectangle { width, height } => ShapeSpec::Rectangle { width, height },
            ShapeArgs::Square { side } => ShapeSpec::Square { side },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Database,
    Api,
}

impl SourceKind {
    /// Name the source is registered under.
    pub fn registry_name(self) -> &'static str {
        match self {
            SourceKind::Database => "database",
            SourceKind::Api => "api",
        }
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Compress { file } | Command::Decompress { file } => {
                validate_path("file", &file.to_string_lossy())
            }
            Command::Run { scenario, .. } => validate_path("scenario", &scenario.to_string_lossy()),
            _ => Ok(()),
        }
    }
}
