use solid_capabilities::utils::validation::Validate;
use solid_capabilities::{
    AreaCalculator, Archiver, CapabilityRegistry, Document, FileManager, FrontEnd,
    ScenarioConfig, SolidError, TextStore, ZipFileManager,
};
use std::fs;
use std::io::Read;
use tempfile::TempDir;

#[test]
fn test_scenario_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let scenario_path = temp_dir.path().join("scenario.toml");
    fs::write(
        &scenario_path,
        r#"
[scenario]
name = "office"

[[shapes]]
kind = "circle"
radius = 2.0

[[shapes]]
kind = "rectangle"
width = 3.0
height = 4.0

[[shapes]]
kind = "square"
side = 5.0

[sources]
api = true
custom = "Data from a fixture"
"#,
    )
    .unwrap();

    let config = ScenarioConfig::from_file(&scenario_path).unwrap();
    config.validate().unwrap();
    let registry = config.build_registry().unwrap();

    let report = AreaCalculator::new().report(registry.shapes());
    let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["circle", "rectangle", "square"]);
    assert!((report.total - (4.0 * std::f64::consts::PI + 37.0)).abs() < 1e-9);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["entries"][1]["area"], 12.0);

    let displayed: Vec<String> = config
        .build_sources()
        .into_iter()
        .map(|(_, source)| FrontEnd::new(source).display_data())
        .collect();
    assert_eq!(
        displayed,
        vec![
            "Display data: Data from the API",
            "Display data: Data from a fixture"
        ]
    );

    let custom = registry.data_source("custom").unwrap();
    assert_eq!(FrontEnd::new(custom).display_data(), "Display data: Data from a fixture");
}

#[test]
fn test_missing_scenario_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ScenarioConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(SolidError::Io(_))));
}

#[test]
fn test_old_printer_cannot_be_asked_to_fax() {
    let registry = CapabilityRegistry::with_defaults();
    let document = Document::new("contract.pdf");

    assert_eq!(
        registry.printer("old").unwrap().print(&document),
        "Printing contract.pdf in black and white..."
    );
    assert!(matches!(
        registry.fax("old"),
        Err(SolidError::CapabilityNotRegistered { capability: "fax", .. })
    ));
    assert!(matches!(
        registry.scanner("old"),
        Err(SolidError::CapabilityNotRegistered { capability: "scan", .. })
    ));
}

#[test]
fn test_file_and_archive_responsibilities_compose() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("journal.txt");

    let text = FileManager::new(&path);
    text.write("day one").unwrap();

    let archiver = ZipFileManager::new(&path);
    let archive_path = archiver.compress().unwrap();
    assert_eq!(archive_path, temp_dir.path().join("journal.zip"));

    let zip_data = fs::read(&archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 1);
    let mut content = String::new();
    archive
        .by_name("journal.txt")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "day one");

    text.write("overwritten").unwrap();
    archiver.decompress().unwrap();
    assert_eq!(text.read().unwrap(), "day one");
}
