//! Value objects and JSON helpers for Sable.
//!
//! - **Rectangle** - a width/height pair with an area
//! - **JSON** - serialize any serde value, and rebuild typed values from text

/// JSON serialization helpers.
pub mod json;
/// The rectangle value object.
pub mod rectangle;

pub use json::{JsonError, deserialize, serialize, serialize_pretty};
pub use rectangle::Rectangle;
