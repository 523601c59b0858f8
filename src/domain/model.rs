use serde::{Deserialize, Serialize};

/// A 2D coordinate in the axis order of its CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One CRS matched by a free-text search.
///
/// Codes stay strings: backends return them both as JSON numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub code: String,
    pub name: String,
}
