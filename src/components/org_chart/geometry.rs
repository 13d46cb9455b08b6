use super::error::StructureError;
use super::types::{Bounds, Point};

pub const GRID_WIDTH: i32 = 160;
pub const GRID_HEIGHT: i32 = 80;

/// Offset from a node's top-left corner to the visual center of its box.
pub const NODE_CENTER_OFFSET: (i32, i32) = (75, 30);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPosition {
	pub x: i32,
	pub y: i32,
}

// Halves go toward +inf, matching the browser's Math.round.
fn round_half_up(v: f64) -> i32 {
	(v + 0.5).floor() as i32
}

pub fn snap_to_grid(point: Point, bounds: Bounds) -> GridPosition {
	let (dx, dy) = (point.x - bounds.left, point.y - bounds.top);
	GridPosition {
		x: round_half_up(dx / GRID_WIDTH as f64) * GRID_WIDTH,
		y: round_half_up(dy / GRID_HEIGHT as f64) * GRID_HEIGHT,
	}
}

/// Resolve a drop into a grid cell. The surface must have been measured.
pub fn accept(point: Point, bounds: Option<Bounds>) -> Result<GridPosition, StructureError> {
	let bounds = bounds.ok_or(StructureError::BoundsUnavailable)?;
	Ok(snap_to_grid(point, bounds))
}

pub fn node_center(x: i32, y: i32) -> Point {
	Point {
		x: (x + NODE_CENTER_OFFSET.0) as f64,
		y: (y + NODE_CENTER_OFFSET.1) as f64,
	}
}
