use crate::domain::model::{AreaEntry, AreaReport};
use crate::domain::ports::Shape;

/// Works on any `Shape`. Adding a new kind of shape never touches this type.
#[derive(Debug, Default, Clone, Copy)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn total_area<S: Shape>(&self, shapes: &[S]) -> f64 {
        shapes.iter().map(Shape::area).sum()
    }

    pub fn report<S: Shape>(&self, shapes: &[S]) -> AreaReport {
        let entries: Vec<AreaEntry> = shapes
            .iter()
            .map(|shape| AreaEntry {
                name: shape.name().to_string(),
                area: shape.area(),
            })
            .collect();
        let total = entries.iter().map(|e| e.area).sum();

        tracing::debug!("Computed area report for {} shapes", entries.len());
        AreaReport { entries, total }
    }

    /// First shape with the largest area; `None` for an empty slice.
    pub fn largest<'a, S: Shape>(&self, shapes: &'a [S]) -> Option<&'a S> {
        shapes.iter().fold(None, |best: Option<&S>, shape| match best {
            Some(current) if current.area() >= shape.area() => Some(current),
            _ => Some(shape),
        })
    }
}
