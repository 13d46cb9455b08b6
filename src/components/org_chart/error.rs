//! Failures of chart operations.
//!
//! None of these are fatal. The controller turns them into the single
//! user-visible error message and leaves the chart as it was.

use thiserror::Error;

/// Message shown for failures that escaped every operation.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
	"An unexpected error occurred. Please check the console for details.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
	/// The drop surface has not been measured yet.
	#[error("Drop zone coordinates not available")]
	BoundsUnavailable,

	/// No placed node carries this id.
	#[error("Node {0} not found")]
	NodeNotFound(String),
}
