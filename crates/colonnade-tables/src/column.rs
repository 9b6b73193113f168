//! Column definitions
//!
//! A [`Column`] describes one table column: how wide it is, whether it
//! absorbs spare width, whether it can be sorted, and how its header and
//! cell contents are obtained. Columns only hold definitions; widths and sort
//! state computed for a render live in the render context.

mod config;
mod source;

use std::fmt::{self, Debug};

pub use config::ColumnConfig;
pub use source::{DataFn, DataSource, HeaderFn, HeaderSource, Label};

use crate::content::Attributes;
use crate::sorting::SortDirection;
use crate::text::humanize;

/// A single table column
pub struct Column<T> {
	name: String,
	label: Label,
	header: HeaderSource<T>,
	data: DataSource<T>,
	width: u32,
	flexible: bool,
	visible: bool,
	sortable: bool,
	default_sort_direction: SortDirection,
	sort_key: Option<String>,
	header_attrs: Attributes,
	cell_attrs: Attributes,
}

impl<T> Column<T> {
	/// Creates a column with default settings
	///
	/// The column is visible, fixed at width 0, not sortable, and reads its
	/// value from the item field named like the column.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: Label::Default,
			header: HeaderSource::Default,
			data: DataSource::Default,
			width: 0,
			flexible: false,
			visible: true,
			sortable: false,
			default_sort_direction: SortDirection::Descending,
			sort_key: None,
			header_attrs: Attributes::new(),
			cell_attrs: Attributes::new(),
		}
	}

	/// Creates a column and applies `config` to it
	pub fn with_config(name: impl Into<String>, config: ColumnConfig<T>) -> Self {
		let mut column = Self::new(name);
		column.apply(config);
		column
	}

	/// Merges a partial configuration into this column
	///
	/// Attributes set in `config` replace the current values; unset
	/// attributes are left untouched. Attribute maps are merged key by key.
	pub fn apply(&mut self, config: ColumnConfig<T>) {
		if let Some(label) = config.label {
			self.label = label;
		}
		if let Some(header) = config.header {
			self.header = header;
		}
		if let Some(data) = config.data {
			self.data = data;
		}
		if let Some(width) = config.width {
			self.width = width;
		}
		if let Some(flexible) = config.flexible {
			self.flexible = flexible;
		}
		if let Some(visible) = config.visible {
			self.visible = visible;
		}
		if let Some(sortable) = config.sortable {
			self.sortable = sortable;
		}
		if let Some(direction) = config.default_sort_direction {
			self.default_sort_direction = direction;
		}
		if let Some(sort_key) = config.sort_key {
			self.sort_key = Some(sort_key);
		}
		self.header_attrs.extend(config.header_attrs);
		self.cell_attrs.extend(config.cell_attrs);
	}

	/// Returns the column name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the configured label
	pub fn label(&self) -> &Label {
		&self.label
	}

	/// Returns the label text, humanizing the name when no label was set
	///
	/// Returns `None` when the label is hidden.
	pub fn label_text(&self) -> Option<String> {
		match &self.label {
			Label::Default => Some(humanize(&self.name)),
			Label::Hidden => None,
			Label::Text(text) => Some(text.clone()),
		}
	}

	/// Returns the header source
	pub fn header(&self) -> &HeaderSource<T> {
		&self.header
	}

	/// Returns the data source
	pub fn data(&self) -> &DataSource<T> {
		&self.data
	}

	/// Returns the base width
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns whether the column absorbs unused width
	pub fn is_flexible(&self) -> bool {
		self.flexible
	}

	/// Returns whether the column is rendered
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Returns whether the column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the direction used when this column becomes the sort column
	pub fn default_sort_direction(&self) -> SortDirection {
		self.default_sort_direction
	}

	/// Returns the key used to order rows by this column
	///
	/// Falls back to the column name.
	pub fn sort_key(&self) -> &str {
		self.sort_key.as_deref().unwrap_or(&self.name)
	}

	/// Returns the extra attributes for the header cell
	pub fn header_attrs(&self) -> &Attributes {
		&self.header_attrs
	}

	/// Returns the extra attributes for body cells
	pub fn cell_attrs(&self) -> &Attributes {
		&self.cell_attrs
	}

	pub(crate) fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	pub(crate) fn set_sortable(&mut self, sortable: bool) {
		self.sortable = sortable;
	}
}

impl<T> Clone for Column<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			label: self.label.clone(),
			header: self.header.clone(),
			data: self.data.clone(),
			width: self.width,
			flexible: self.flexible,
			visible: self.visible,
			sortable: self.sortable,
			default_sort_direction: self.default_sort_direction,
			sort_key: self.sort_key.clone(),
			header_attrs: self.header_attrs.clone(),
			cell_attrs: self.cell_attrs.clone(),
		}
	}
}

impl<T> Debug for Column<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("header", &self.header)
			.field("data", &self.data)
			.field("width", &self.width)
			.field("flexible", &self.flexible)
			.field("visible", &self.visible)
			.field("sortable", &self.sortable)
			.field("default_sort_direction", &self.default_sort_direction)
			.field("sort_key", &self.sort_key)
			.finish_non_exhaustive()
	}
}
