//! Sort state resolution
//!
//! The active sort column and direction are derived from request parameters
//! and the schema's defaults for every render. The result is a
//! [`SortState`] owned by the caller; columns are never modified.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::schema::Schema;
use crate::settings::TableSettings;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[serde(rename = "asc", alias = "ascending")]
	Ascending,
	/// Descending order
	#[serde(rename = "desc", alias = "descending")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the value used in query parameters and class names
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Parses a sort direction from an ordering parameter
	///
	/// Returns `Ascending` for plain field names and `Descending` for names
	/// prefixed with `-` (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}
}

impl std::fmt::Display for SortDirection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a sort direction cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort direction `{0}`")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
	type Err = ParseSortDirectionError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			_ => Err(ParseSortDirectionError(s.to_string())),
		}
	}
}

/// A lookup for request parameters
pub trait ParamSource {
	/// Returns the value of the named parameter
	fn param(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, String, S> {
	fn param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl ParamSource for BTreeMap<String, String> {
	fn param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl ParamSource for [(String, String)] {
	fn param(&self, key: &str) -> Option<&str> {
		self.iter()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.as_str())
	}
}

impl ParamSource for Vec<(String, String)> {
	fn param(&self, key: &str) -> Option<&str> {
		self.as_slice().param(key)
	}
}

/// Sort parameters taken from a request
///
/// Values are kept as received; validation happens when the request is
/// resolved against a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRequest {
	/// Requested sort column name
	pub column: Option<String>,
	/// Requested sort direction
	pub direction: Option<String>,
}

impl SortRequest {
	/// Creates an empty request
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the requested column
	pub fn column(mut self, column: impl Into<String>) -> Self {
		self.column = Some(column.into());
		self
	}

	/// Sets the requested direction
	pub fn direction(mut self, direction: impl Into<String>) -> Self {
		self.direction = Some(direction.into());
		self
	}

	/// Reads sort parameters using the key names from `settings`
	///
	/// When an ordering parameter is configured and present, its
	/// `field` / `-field` form takes precedence over the separate column and
	/// direction parameters.
	pub fn from_params<P>(params: &P, settings: &TableSettings) -> Self
	where
		P: ParamSource + ?Sized,
	{
		if let Some(key) = settings.ordering_param.as_deref()
			&& let Some(ordering) = non_empty(params, key)
		{
			let (direction, field) = SortDirection::parse_from_query(ordering);
			return Self {
				column: Some(field.to_string()),
				direction: Some(direction.as_str().to_string()),
			};
		}

		Self {
			column: non_empty(params, &settings.sort_column_param).map(str::to_string),
			direction: non_empty(params, &settings.sort_direction_param).map(str::to_string),
		}
	}

	/// Parses a raw query string such as `sort_column=title&sort_direction=asc`
	///
	/// A malformed query string yields an empty request.
	pub fn from_query(query: &str, settings: &TableSettings) -> Self {
		match serde_urlencoded::from_str::<Vec<(String, String)>>(query.trim_start_matches('?')) {
			Ok(pairs) => Self::from_params(&pairs, settings),
			Err(e) => {
				tracing::debug!(error = %e, "ignoring malformed query string");
				Self::default()
			}
		}
	}
}

fn non_empty<'p, P>(params: &'p P, key: &str) -> Option<&'p str>
where
	P: ParamSource + ?Sized,
{
	params
		.param(key)
		.map(str::trim)
		.filter(|value| !value.is_empty())
}

/// Resolved sort state for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
	column: Option<String>,
	sort_key: Option<String>,
	direction: SortDirection,
}

impl SortState {
	/// Resolves the active sort column and direction
	///
	/// The requested column wins when it exists and is sortable; otherwise
	/// the schema's default sort column applies. An explicit, valid direction
	/// wins; otherwise an accepted requested column uses its own default
	/// direction and everything else falls back to the schema's default
	/// direction. Invalid parameters are ignored, never reported as errors.
	pub fn resolve<T>(schema: &Schema<T>, request: &SortRequest) -> Self {
		let requested = request.column.as_deref().and_then(|name| {
			let column = schema.column(name).filter(|column| column.is_sortable());
			if column.is_none() {
				tracing::debug!(
					schema = schema.name(),
					column = name,
					"ignoring sort request for unknown or unsortable column"
				);
			}
			column
		});
		let active = requested.or_else(|| schema.default_sort_column());

		let explicit = match request.direction.as_deref().map(str::parse::<SortDirection>) {
			Some(Ok(direction)) => Some(direction),
			Some(Err(e)) => {
				tracing::debug!(schema = schema.name(), error = %e, "ignoring sort direction");
				None
			}
			None => None,
		};
		let direction = explicit.unwrap_or_else(|| match requested {
			Some(column) => column.default_sort_direction(),
			None => schema.default_direction(),
		});

		Self {
			column: active.map(|column| column.name().to_string()),
			sort_key: active.map(|column| column.sort_key().to_string()),
			direction,
		}
	}

	/// Returns the name of the active sort column
	pub fn column(&self) -> Option<&str> {
		self.column.as_deref()
	}

	/// Returns the sort key of the active sort column
	pub fn sort_key(&self) -> Option<&str> {
		self.sort_key.as_deref()
	}

	/// Returns the active direction
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Returns whether `name` is the active sort column
	pub fn is_active(&self, name: &str) -> bool {
		self.column.as_deref() == Some(name)
	}

	/// Returns the direction a header link for `column` should request
	///
	/// The active column offers the opposite of the active direction, other
	/// sortable columns offer their default direction, and unsortable
	/// columns offer nothing.
	pub fn offered_direction<T>(&self, column: &Column<T>) -> Option<SortDirection> {
		if !column.is_sortable() {
			return None;
		}
		if self.is_active(column.name()) {
			Some(self.direction.toggle())
		} else {
			Some(column.default_sort_direction())
		}
	}
}
