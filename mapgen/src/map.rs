//! Road-network data model: points, segments, generated maps, and bounds.
//!
//! A generation call produces one [`MapData`] atomically; the viewer replaces
//! it wholesale on regeneration. Segment order defines draw order and nothing
//! else. The viewport engine depends on this module only through
//! [`MapData::bounds`].

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use serde::{Deserialize, Serialize};

/// A point in generator space (unbounded real-valued units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single straight road piece.
///
/// Immutable once generated. Zero-length segments (`start == end`) are legal
/// and render as a dot under round line caps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Stroke width in world units. Always positive.
    pub width: f64,
    /// Marks a higher-class road drawn in the highway style.
    pub highway: bool,
}

/// The complete road network produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub segments: Vec<Segment>,
}

impl MapData {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Number of segments in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the map contains no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned bounding box over all segment endpoints (both ends of
    /// every segment). `None` when the map has no segments.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.segments.first()?;
        let mut bounds = Bounds { min: first.start, max: first.start };
        for segment in &self.segments {
            bounds.expand(segment.start);
            bounds.expand(segment.end);
        }
        Some(bounds)
    }
}

/// Axis-aligned bounding box in generator space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn expand(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// True when the box has zero width or zero height — a single point, or
    /// all endpoints collinear along one axis. Fitting such a box would
    /// require infinite zoom.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
