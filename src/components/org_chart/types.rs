use std::fmt;

/// Which kind of organizational unit a box stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Position,
	Department,
	Division,
}

impl NodeKind {
	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Position => "position",
			NodeKind::Department => "department",
			NodeKind::Division => "division",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"position" => Some(NodeKind::Position),
			"department" => Some(NodeKind::Department),
			"division" => Some(NodeKind::Division),
			_ => None,
		}
	}

	pub fn background(self) -> &'static str {
		match self {
			NodeKind::Position => "#fff1b8",
			NodeKind::Department => "#e6f7ff",
			NodeKind::Division => "#d4edda",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
	pub id: String,
	pub kind: NodeKind,
	pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedNode {
	pub id: String,
	pub kind: NodeKind,
	pub label: String,
	pub x: i32,
	pub y: i32,
}

/// Directed edge between two placed node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	pub start: String,
	pub end: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
}

/// Pointer position in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Top-left corner of the measured drop surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub left: f64,
	pub top: f64,
}

/// What a drag source hands to the drop surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
	pub id: String,
	pub kind: NodeKind,
}

impl DragPayload {
	/// Data transfer format the payload travels under.
	pub const FORMAT: &'static str = "text/plain";

	pub fn encode(&self) -> String {
		format!("{}:{}", self.kind, self.id)
	}

	/// Returns `None` for anything this widget did not put on the transfer.
	pub fn decode(raw: &str) -> Option<Self> {
		let (kind, id) = raw.split_once(':')?;
		let kind = NodeKind::parse(kind)?;
		if id.is_empty() {
			return None;
		}
		Some(Self {
			id: id.to_string(),
			kind,
		})
	}
}
