use anyhow::Context;
use clap::Parser;
use solid_capabilities::config::cli::Command;
use solid_capabilities::utils::error::{ErrorSeverity, Result};
use solid_capabilities::utils::{logger, validation::Validate};
use solid_capabilities::{
    AreaCalculator, Archiver, CapabilityRegistry, Cli, Document, FrontEnd, ScenarioConfig,
    Shape, ShapeSpec, ZipFileManager,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, logger::LogFormat::from_flag(cli.json_logs));

    tracing::debug!("CLI arguments: {:?}", cli);

    // 驗證參數
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&cli.command) {
        Ok(lines) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for line in lines {
                writeln!(out, "{}", line).context("failed to write to stdout")?;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run(command: &Command) -> Result<Vec<String>> {
    let registry = CapabilityRegistry::with_defaults();

    match command {
        Command::Area { shape } => {
            let shape = ShapeSpec::from(shape).build()?;
            Ok(vec![format!("{} area: {:.3}", shape.name(), shape.area())])
        }
        Command::Print { device, document } => {
            let printer = registry.printer(device)?;
            Ok(vec![printer.print(&Document::new(document.as_str()))])
        }
        Command::Fax { device, document } => {
            let fax = registry.fax(device)?;
            Ok(vec![fax.fax(&Document::new(document.as_str()))])
        }
        Command::Scan { device, document } => {
            let scanner = registry.scanner(device)?;
            Ok(vec![scanner.scan(&Document::new(document.as_str()))])
        }
        Command::Display { source } => {
            let front_end = FrontEnd::new(registry.data_source(source.registry_name())?);
            Ok(vec![front_end.display_data()])
        }
        Command::Compress { file } => {
            let archive = ZipFileManager::new(file).compress()?;
            Ok(vec![format!("📦 Archive written to {}", archive.display())])
        }
        Command::Decompress { file } => {
            let extracted = ZipFileManager::new(file).decompress()?;
            Ok(extracted
                .iter()
                .map(|path| format!("📂 Extracted {}", path.display()))
                .collect())
        }
        Command::Run { scenario, json } => run_scenario(scenario, *json),
        Command::Capabilities => Ok(registry
            .names()
            .into_iter()
            .map(|name| {
                let capabilities = registry.capabilities_of(&name).join(", ");
                format!("{}: {}", name, capabilities)
            })
            .collect()),
    }
}

fn run_scenario(path: &std::path::Path, json: bool) -> Result<Vec<String>> {
    tracing::info!("📁 Loading scenario from: {}", path.display());
    let config = ScenarioConfig::from_file(path)?;
    config.validate()?;
    tracing::info!("✅ Scenario '{}' loaded and validated", config.scenario.name);

    let registry = config.build_registry()?;
    let report = AreaCalculator::new().report(registry.shapes());

    let mut lines = Vec::new();
    if json {
        lines.push(serde_json::to_string_pretty(&report)?);
    } else {
        lines.push(format!("Scenario: {}", config.scenario.name));
        if let Some(description) = &config.scenario.description {
            lines.push(description.clone());
        }
        for entry in &report.entries {
            lines.push(format!("{} area: {:.3}", entry.name, entry.area));
        }
        lines.push(format!("total area: {:.3}", report.total));
    }

    for (_, source) in config.build_sources() {
        lines.push(FrontEnd::new(source).display_data());
    }

    Ok(lines)
}
