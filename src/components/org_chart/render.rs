use super::geometry::node_center;
use super::types::{Connection, PlacedNode, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorSegment {
	pub start: Point,
	pub end: Point,
}

/// Line segments for every connection whose two endpoints are on the canvas.
pub fn connector_segments(nodes: &[PlacedNode], connections: &[Connection]) -> Vec<ConnectorSegment> {
	let find = |id: &str| nodes.iter().find(|n| n.id == id);
	connections
		.iter()
		.filter_map(|conn| {
			let (start, end) = (find(&conn.start)?, find(&conn.end)?);
			Some(ConnectorSegment {
				start: node_center(start.x, start.y),
				end: node_center(end.x, end.y),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::types::NodeKind;

	fn node(id: &str, x: i32, y: i32) -> PlacedNode {
		PlacedNode {
			id: id.into(),
			kind: NodeKind::Position,
			label: id.into(),
			x,
			y,
		}
	}

	fn conn(start: &str, end: &str) -> Connection {
		Connection {
			start: start.into(),
			end: end.into(),
		}
	}

	#[test]
	fn segments_join_box_centers() {
		let nodes = [node("a", 0, 0), node("b", 160, 80)];
		let segments = connector_segments(&nodes, &[conn("a", "b")]);
		assert_eq!(
			segments,
			vec![ConnectorSegment {
				start: Point { x: 75.0, y: 30.0 },
				end: Point { x: 235.0, y: 110.0 },
			}]
		);
	}

	#[test]
	fn unresolved_connections_are_skipped() {
		let nodes = [node("a", 0, 0), node("b", 160, 0)];
		let connections = [conn("a", "gone"), conn("gone", "b"), conn("b", "a")];
		let segments = connector_segments(&nodes, &connections);
		assert_eq!(segments.len(), 1);
		assert_eq!(segments[0].start, Point { x: 235.0, y: 30.0 });
	}
}
