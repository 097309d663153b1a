//! Canvas-space geometry primitives.
//!
//! # Responsibility
//! - Provide points, canvas bounds and the tile footprint.
//! - Own the one clamping rule every tile position must satisfy.
//!
//! # Invariants
//! - `BoardGeometry::clamp` always returns a point with
//!   `0 <= x <= canvas.width - footprint.width` and
//!   `0 <= y <= canvas.height - footprint.height`.
//! - An axis where the canvas is smaller than the footprint collapses to `[0, 0]`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Default rendered tile width in canvas pixels.
pub const DEFAULT_TILE_WIDTH: f64 = 240.0;
/// Default rendered tile height in canvas pixels.
pub const DEFAULT_TILE_HEIGHT: f64 = 120.0;

/// 2D coordinate in canvas space (or tile-local space, depending on caller).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Visible canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// Rendered tile size used for centering, clamping and cluster centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileFootprint {
    pub width: f64,
    pub height: f64,
}

impl TileFootprint {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset from a tile's top-left corner to its visual center.
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `point` lies within a tile whose top-left corner is `origin`.
    pub fn contains(self, origin: Point, point: Point) -> bool {
        point.x >= origin.x
            && point.x <= origin.x + self.width
            && point.y >= origin.y
            && point.y <= origin.y + self.height
    }
}

impl Default for TileFootprint {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
    }
}

/// Axis-aligned rectangle, used for overlay annotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds a rectangle of the given size centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}

/// Canvas bounds paired with the tile footprint placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardGeometry {
    pub canvas: CanvasBounds,
    pub footprint: TileFootprint,
}

impl BoardGeometry {
    pub const fn new(canvas: CanvasBounds, footprint: TileFootprint) -> Self {
        Self { canvas, footprint }
    }

    /// Largest valid top-left coordinate on each axis.
    pub fn max_position(&self) -> Point {
        Point::new(
            (self.canvas.width - self.footprint.width).max(0.0),
            (self.canvas.height - self.footprint.height).max(0.0),
        )
    }

    /// Clamps a candidate top-left position into the canvas, axis by axis.
    pub fn clamp(&self, candidate: Point) -> Point {
        let max = self.max_position();
        Point::new(clamp_axis(candidate.x, max.x), clamp_axis(candidate.y, max.y))
    }

    /// Whether `position` already satisfies the canvas bounds.
    pub fn contains_position(&self, position: Point) -> bool {
        let max = self.max_position();
        (0.0..=max.x).contains(&position.x) && (0.0..=max.y).contains(&position.y)
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::{BoardGeometry, CanvasBounds, Point, Rect, TileFootprint};

    #[test]
    fn clamp_limits_each_axis_independently() {
        let geometry = BoardGeometry::new(CanvasBounds::new(1000.0, 600.0), TileFootprint::default());

        assert_eq!(geometry.clamp(Point::new(-50.0, 100.0)), Point::new(0.0, 100.0));
        assert_eq!(geometry.clamp(Point::new(900.0, 700.0)), Point::new(760.0, 480.0));
    }

    #[test]
    fn clamp_collapses_axis_when_canvas_is_smaller_than_tile() {
        let geometry = BoardGeometry::new(CanvasBounds::new(200.0, 100.0), TileFootprint::default());

        assert_eq!(geometry.clamp(Point::new(40.0, 40.0)), Point::ORIGIN);
        assert!(geometry.contains_position(Point::ORIGIN));
    }

    #[test]
    fn clamp_maps_nan_to_zero() {
        let geometry = BoardGeometry::default();
        let clamped = geometry.clamp(Point::new(f64::NAN, 10.0));
        assert_eq!(clamped, Point::new(0.0, 10.0));
    }

    #[test]
    fn footprint_contains_edges() {
        let footprint = TileFootprint::default();
        let origin = Point::new(10.0, 10.0);

        assert!(footprint.contains(origin, Point::new(10.0, 10.0)));
        assert!(footprint.contains(origin, Point::new(250.0, 130.0)));
        assert!(!footprint.contains(origin, Point::new(251.0, 50.0)));
    }

    #[test]
    fn rect_centered_offsets_by_half_size() {
        let rect = Rect::centered(Point::new(220.0, 160.0), 300.0, 300.0);
        assert_eq!(rect.x, 70.0);
        assert_eq!(rect.y, 10.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
