use crate::core::shapes::{Circle, Rectangle, Square};
use crate::domain::ports::Shape;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The document a device prints, faxes or scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Serialized description of one shape. Every variant carries exactly the
/// parameters of its kind, so a circle can never be given a width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeSpec {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
}

impl ShapeSpec {
    pub fn build(&self) -> Result<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match *self {
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)?),
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)?),
            ShapeSpec::Square { side } => Box::new(Square::new(side)?),
        };
        Ok(shape)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaEntry {
    pub name: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub entries: Vec<AreaEntry>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_display() {
        let doc = Document::from("report.pdf");
        assert_eq!(doc.to_string(), "report.pdf");
        assert_eq!(doc.as_str(), "report.pdf");
    }

    #[test]
    fn test_shape_spec_builds_each_kind() {
        let specs = [
            ShapeSpec::Circle { radius: 1.0 },
            ShapeSpec::Rectangle { width: 2.0, height: 3.0 },
            ShapeSpec::Square { side: 4.0 },
        ];
        let names: Vec<&str> = specs.iter().map(|s| s.build().unwrap().name()).collect();
        assert_eq!(names, vec!["circle", "rectangle", "square"]);
    }

    #[test]
    fn test_shape_spec_propagates_construction_error() {
        let spec = ShapeSpec::Square { side: -5.0 };
        assert!(spec.build().is_err());
    }

    #[test]
    fn test_shape_spec_rejects_foreign_fields() {
        let json = r#"{"kind": "circle", "radius": 1.0, "width": 2.0}"#;
        assert!(serde_json::from_str::<ShapeSpec>(json).is_err());

        let json = r#"{"kind": "rectangle", "width": 2.0, "height": 3.0}"#;
        let spec: ShapeSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, ShapeSpec::Rectangle { width: 2.0, height: 3.0 });
    }
}
