//! Rendering settings
//!
//! Settings cover everything a host may want to name differently: request
//! parameter keys, localization key prefix, class names and the width unit.
//! All fields have defaults, so a settings file only needs the overrides.
//!
//! ```
//! use colonnade_tables::TableSettings;
//!
//! let settings = TableSettings::from_toml_str(r#"
//!     sort_column_param = "order"
//!     striped = false
//! "#).unwrap();
//!
//! assert_eq!(settings.sort_column_param, "order");
//! assert_eq!(settings.sort_direction_param, "sort_direction");
//! assert!(!settings.striped);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::sorting::SortDirection;

static DEFAULT_SETTINGS: Lazy<TableSettings> = Lazy::new(TableSettings::default);

/// Settings shared by every render that uses them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Request parameter naming the sort column
	pub sort_column_param: String,
	/// Request parameter naming the sort direction
	pub sort_direction_param: String,
	/// Optional single parameter in `field` / `-field` form
	pub ordering_param: Option<String>,
	/// Prefix of localization keys for headers and hints
	pub i18n_prefix: String,
	/// Class of the table node
	pub table_class: String,
	/// Class of every row
	pub row_class: String,
	/// Class added to header cells of sortable columns
	pub sortable_class: String,
	/// Class marking the link of the active sort column
	pub sorted_class: String,
	/// Whether body rows alternate odd/even classes
	pub striped: bool,
	/// Class of odd body rows (the first row is odd)
	pub odd_class: String,
	/// Class of even body rows
	pub even_class: String,
	/// Unit appended to width annotations
	pub width_unit: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			sort_column_param: "sort_column".to_string(),
			sort_direction_param: "sort_direction".to_string(),
			ordering_param: None,
			i18n_prefix: "tables".to_string(),
			table_class: "table".to_string(),
			row_class: "tr".to_string(),
			sortable_class: "sortable".to_string(),
			sorted_class: "sorted".to_string(),
			striped: true,
			odd_class: "odd".to_string(),
			even_class: "even".to_string(),
			width_unit: "px".to_string(),
		}
	}
}

impl TableSettings {
	/// Returns a shared instance holding the defaults
	pub fn shared_default() -> &'static Self {
		&DEFAULT_SETTINGS
	}

	/// Parses settings from JSON
	pub fn from_json_str(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| TableError::Settings(e.to_string()))
	}

	/// Parses settings from TOML
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| TableError::Settings(e.to_string()))
	}

	/// Localization key of a column header
	pub fn header_key(&self, schema: &str, column: &str) -> String {
		format!("{}.headers.{}.{}", self.i18n_prefix, schema, column)
	}

	/// Localization key of a column hint
	pub fn hint_key(&self, schema: &str, column: &str) -> String {
		format!("{}.hints.{}.{}", self.i18n_prefix, schema, column)
	}

	/// Query parameters requesting a sort by `column` in `direction`
	pub fn sort_params(&self, column: &str, direction: SortDirection) -> Vec<(String, String)> {
		match &self.ordering_param {
			Some(key) => {
				let value = match direction {
					SortDirection::Ascending => column.to_string(),
					SortDirection::Descending => format!("-{column}"),
				};
				vec![(key.clone(), value)]
			}
			None => vec![
				(self.sort_column_param.clone(), column.to_string()),
				(
					self.sort_direction_param.clone(),
					direction.as_str().to_string(),
				),
			],
		}
	}

	/// Width annotation for a cell or table of `width` units
	pub fn width_style(&self, width: u32) -> String {
		format!("width:{}{};", width, self.width_unit)
	}
}
