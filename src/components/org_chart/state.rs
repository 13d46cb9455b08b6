use log::{debug, error, info};

use super::catalog::PaletteCatalog;
use super::error::{StructureError, UNEXPECTED_ERROR_MESSAGE};
use super::geometry::{self, GRID_WIDTH};
use super::ids::{IdAllocator, SequentialIds};
use super::types::{Bounds, Connection, Direction, DragPayload, Point, PlacedNode, Template};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectMode {
	#[default]
	Idle,
	AwaitingSecond(String),
}

/// Which halves of a rename found something to relabel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenameOutcome {
	pub node: bool,
	pub product: bool,
}

/// A user gesture, as seen by the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	Drop {
		payload: DragPayload,
		point: Point,
		bounds: Option<Bounds>,
	},
	Move {
		id: String,
		direction: Direction,
	},
	Delete {
		id: String,
	},
	Connect {
		id: String,
	},
	Rename {
		id: String,
		label: String,
	},
	AddProduct,
	Reset,
}

impl Action {
	pub fn failure_message(&self) -> &'static str {
		match self {
			Action::Drop { .. } => "Failed to add item. Please try again.",
			Action::Move { .. } => "Failed to move item. Please try again.",
			Action::Delete { .. } => "Failed to delete item. Please try again.",
			Action::Connect { .. } => "Failed to connect items. Please try again.",
			Action::Rename { .. } => "Failed to rename item. Please try again.",
			Action::AddProduct | Action::Reset => UNEXPECTED_ERROR_MESSAGE,
		}
	}
}

/// Owns everything the chart editor shows and every way of changing it.
#[derive(Clone, Debug)]
pub struct OrgStructure<A = SequentialIds> {
	nodes: Vec<PlacedNode>,
	connections: Vec<Connection>,
	connect_mode: ConnectMode,
	catalog: PaletteCatalog,
	error: Option<String>,
	ids: A,
}

impl Default for OrgStructure<SequentialIds> {
	fn default() -> Self {
		Self::with_ids(SequentialIds::default())
	}
}

impl<A: IdAllocator> OrgStructure<A> {
	pub fn with_ids(ids: A) -> Self {
		Self {
			nodes: Vec::new(),
			connections: Vec::new(),
			connect_mode: ConnectMode::Idle,
			catalog: PaletteCatalog::default(),
			error: None,
			ids,
		}
	}

	pub fn nodes(&self) -> &[PlacedNode] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn connect_mode(&self) -> &ConnectMode {
		&self.connect_mode
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn palette(&self) -> Vec<Template> {
		self.catalog.templates()
	}

	pub fn node(&self, id: &str) -> Option<&PlacedNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	fn node_mut(&mut self, id: &str) -> Result<&mut PlacedNode, StructureError> {
		self.nodes
			.iter_mut()
			.find(|n| n.id == id)
			.ok_or_else(|| StructureError::NodeNotFound(id.to_string()))
	}

	fn require_node(&self, id: &str) -> Result<(), StructureError> {
		match self.node(id) {
			Some(_) => Ok(()),
			None => Err(StructureError::NodeNotFound(id.to_string())),
		}
	}

	/// Run a gesture. Success clears the error message, failure replaces it
	/// and leaves the chart untouched.
	pub fn dispatch(&mut self, action: Action) -> Result<(), StructureError> {
		let message = action.failure_message();
		let result = match action {
			Action::Drop {
				payload,
				point,
				bounds,
			} => self.place_from_drop(&payload, point, bounds).map(|_| ()),
			Action::Move { id, direction } => self.move_node(&id, direction),
			Action::Delete { id } => self.delete_node(&id),
			Action::Connect { id } => self.connect(&id),
			Action::Rename { id, label } => self.rename(&id, &label).map(|_| ()),
			Action::AddProduct => {
				self.add_product();
				Ok(())
			}
			Action::Reset => {
				self.reset();
				Ok(())
			}
		};
		match &result {
			Ok(()) => self.error = None,
			Err(err) => {
				error!("{}: {}", message, err);
				self.error = Some(message.to_string());
			}
		}
		result
	}

	/// Surface a failure that no operation caught.
	pub fn report_unhandled(&mut self, detail: &str) {
		error!("Unhandled error: {}", detail);
		self.error = Some(UNEXPECTED_ERROR_MESSAGE.to_string());
	}

	/// Place a new node for `payload` at the grid cell under `point`.
	/// Returns the id of the new node.
	pub fn place_from_drop(
		&mut self,
		payload: &DragPayload,
		point: Point,
		bounds: Option<Bounds>,
	) -> Result<String, StructureError> {
		let cell = geometry::accept(point, bounds)?;
		let label = self.resolve_label(&payload.id);
		let id = self.allocate_id(&payload.id);
		info!("Placing {} '{}' at ({}, {})", payload.kind, id, cell.x, cell.y);
		self.nodes.push(PlacedNode {
			id: id.clone(),
			kind: payload.kind,
			label,
			x: cell.x,
			y: cell.y,
		});
		Ok(id)
	}

	fn resolve_label(&self, source_id: &str) -> String {
		if let Some(template) = self.catalog.find(source_id) {
			return template.label;
		}
		if let Some(node) = self.node(source_id) {
			return node.label.clone();
		}
		source_id
			.split('-')
			.next()
			.unwrap_or(source_id)
			.to_string()
	}

	fn allocate_id(&mut self, prefix: &str) -> String {
		loop {
			let id = self.ids.allocate(prefix);
			if self.node(&id).is_none() {
				return id;
			}
			debug!("Skipping live id {}", id);
		}
	}

	pub fn move_node(&mut self, id: &str, direction: Direction) -> Result<(), StructureError> {
		let node = self.node_mut(id)?;
		node.x += match direction {
			Direction::Left => -GRID_WIDTH,
			Direction::Right => GRID_WIDTH,
		};
		Ok(())
	}

	/// Remove a node and every connection touching it.
	pub fn delete_node(&mut self, id: &str) -> Result<(), StructureError> {
		self.require_node(id)?;
		self.nodes.retain(|n| n.id != id);
		self.connections.retain(|c| c.start != id && c.end != id);
		if self.connect_mode == ConnectMode::AwaitingSecond(id.to_string()) {
			self.connect_mode = ConnectMode::Idle;
		}
		info!("Deleted node {}", id);
		Ok(())
	}

	/// First call selects the start node, the second completes the edge.
	/// Picking the same node twice makes a self loop.
	pub fn connect(&mut self, id: &str) -> Result<(), StructureError> {
		self.require_node(id)?;
		match std::mem::take(&mut self.connect_mode) {
			ConnectMode::Idle => {
				debug!("Awaiting second endpoint for {}", id);
				self.connect_mode = ConnectMode::AwaitingSecond(id.to_string());
			}
			ConnectMode::AwaitingSecond(start) => {
				info!("Connecting {} -> {}", start, id);
				self.connections.push(Connection {
					start,
					end: id.to_string(),
				});
			}
		}
		Ok(())
	}

	/// Relabel whatever `id` names: a placed node, a product template, both
	/// or neither. Blank labels are ignored.
	pub fn rename(&mut self, id: &str, label: &str) -> Result<RenameOutcome, StructureError> {
		let label = label.trim();
		if label.is_empty() {
			debug!("Ignoring blank rename of {}", id);
			return Ok(RenameOutcome::default());
		}
		Ok(RenameOutcome {
			node: self.rename_node(id, label),
			product: self.rename_product(id, label),
		})
	}

	pub fn rename_node(&mut self, id: &str, label: &str) -> bool {
		match self.node_mut(id) {
			Ok(node) => {
				node.label = label.to_string();
				true
			}
			Err(_) => false,
		}
	}

	pub fn rename_product(&mut self, id: &str, label: &str) -> bool {
		self.catalog.rename_product(id, label)
	}

	pub fn add_product(&mut self) {
		let product = self.catalog.add_product();
		info!("Added product template {}", product.id);
	}

	/// Empty the chart. The palette and id sequence carry on.
	pub fn reset(&mut self) {
		self.nodes.clear();
		self.connections.clear();
		self.connect_mode = ConnectMode::Idle;
		self.error = None;
		info!("Structure reset");
	}
}
