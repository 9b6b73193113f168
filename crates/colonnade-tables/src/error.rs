//! Error types for table configuration and cell dispatch

/// Fatal configuration errors
///
/// Every variant indicates a mistake in how a schema or render call was set
/// up. A render that hits one of these aborts before any markup is emitted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
	/// The base widths of the visible columns do not fit the requested width
	#[error("requested column widths exceed available width ({required} > {available})")]
	WidthOverflow {
		/// Sum of the visible columns' base widths
		required: u64,
		/// Requested table width
		available: u32,
	},

	/// A column name that is not part of the schema
	#[error("unrecognised column `{0}`")]
	UnknownColumn(String),

	/// A column references a helper that was never defined
	#[error("column `{column}` references undefined helper `{helper}`")]
	UnknownHelper {
		/// Column holding the reference
		column: String,
		/// Name of the missing helper
		helper: String,
	},

	/// A helper is referenced in a position it cannot serve
	#[error("helper `{helper}` cannot be used as {expected}")]
	HelperShape {
		/// Name of the helper
		helper: String,
		/// What the reference expected ("data" or "header")
		expected: &'static str,
	},

	/// Settings could not be parsed
	#[error("invalid table settings: {0}")]
	Settings(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;

/// Failure raised by a single data or header callable
///
/// Cell failures never abort a render. The renderer emits an empty cell and
/// records a [`Diagnostic`](crate::render::Diagnostic) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CellError {
	message: String,
}

impl CellError {
	/// Creates a new cell error with the given message
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Returns the error message
	pub fn message(&self) -> &str {
		&self.message
	}
}
