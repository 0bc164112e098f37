//! Rectangle value object.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
///
/// Dimensions are not validated: negative, infinite and NaN values are
/// stored as given and flow through `area` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert!((Rectangle::new(10.0, 20.0).area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_dimensions_pass_through() {
        let rect = Rectangle::new(-3.0, 4.0);
        assert!((rect.area() + 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_dimensions_pass_through() {
        assert!(Rectangle::new(f64::NAN, 2.0).area().is_nan());
    }
}
