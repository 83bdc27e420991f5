use crate::domain::ports::Shape;
use crate::utils::error::Result;
use crate::utils::validation::validate_dimension;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let radius = validate_dimension("circle", "radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

/// Width and height are independent; changing one never moves the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let width = validate_dimension("rectangle", "width", width)?;
        let height = validate_dimension("rectangle", "height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn with_width(&self, width: f64) -> Result<Self> {
        Self::new(width, self.height)
    }

    pub fn with_height(&self, height: f64) -> Result<Self> {
        Self::new(self.width, height)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A square is its own shape with a single side, not a rectangle whose
/// setters are coupled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        let side = validate_dimension("square", "side", side)?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn with_side(&self, side: f64) -> Result<Self> {
        Self::new(side)
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side.powi(2)
    }
}
