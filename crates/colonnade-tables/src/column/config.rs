//! Partial column configuration

use super::source::{DataFn, DataSource, HeaderFn, HeaderSource, Label};
use crate::content::{Attributes, Content};
use crate::sorting::SortDirection;

/// A partial set of column attributes
///
/// Every attribute is optional. Applying a configuration to an existing
/// column overwrites only the attributes that were set, so a column can be
/// refined step by step without losing earlier settings.
///
/// # Example
///
/// ```
/// use colonnade_tables::{ColumnConfig, SortDirection};
///
/// struct Book;
///
/// let config: ColumnConfig<Book> = ColumnConfig::flexible()
///     .width(100)
///     .sortable(true)
///     .default_sort_direction(SortDirection::Ascending)
///     .label("Book title");
/// ```
pub struct ColumnConfig<T> {
	pub(crate) label: Option<Label>,
	pub(crate) header: Option<HeaderSource<T>>,
	pub(crate) data: Option<DataSource<T>>,
	pub(crate) width: Option<u32>,
	pub(crate) flexible: Option<bool>,
	pub(crate) visible: Option<bool>,
	pub(crate) sortable: Option<bool>,
	pub(crate) default_sort_direction: Option<SortDirection>,
	pub(crate) sort_key: Option<String>,
	pub(crate) header_attrs: Attributes,
	pub(crate) cell_attrs: Attributes,
}

impl<T> Default for ColumnConfig<T> {
	fn default() -> Self {
		Self {
			label: None,
			header: None,
			data: None,
			width: None,
			flexible: None,
			visible: None,
			sortable: None,
			default_sort_direction: None,
			sort_key: None,
			header_attrs: Attributes::new(),
			cell_attrs: Attributes::new(),
		}
	}
}

impl<T> ColumnConfig<T> {
	/// Creates an empty configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a configuration for a fixed-width column
	pub fn fixed() -> Self {
		Self::new().with_flexible(false)
	}

	/// Creates a configuration for a flexible column
	pub fn flexible() -> Self {
		Self::new().with_flexible(true)
	}

	/// Sets the base width
	pub fn width(mut self, width: u32) -> Self {
		self.width = Some(width);
		self
	}

	/// Sets whether the column absorbs unused width
	pub fn with_flexible(mut self, flexible: bool) -> Self {
		self.flexible = Some(flexible);
		self
	}

	/// Sets whether the column is rendered
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = Some(visible);
		self
	}

	/// Sets whether the column can be sorted
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = Some(sortable);
		self
	}

	/// Sets the direction used when the column becomes the active sort column
	pub fn default_sort_direction(mut self, direction: SortDirection) -> Self {
		self.default_sort_direction = Some(direction);
		self
	}

	/// Sets the key handed to the host when sorting by this column
	pub fn sort_key(mut self, key: impl Into<String>) -> Self {
		self.sort_key = Some(key.into());
		self
	}

	/// Sets a literal header label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(Label::Text(label.into()));
		self
	}

	/// Suppresses the header label
	pub fn no_label(mut self) -> Self {
		self.label = Some(Label::Hidden);
		self
	}

	/// Restores the humanized or translated label
	pub fn default_label(mut self) -> Self {
		self.label = Some(Label::Default);
		self
	}

	/// Sets literal header content, taking precedence over the label
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(HeaderSource::Text(header.into()));
		self
	}

	/// Suppresses the header content entirely
	pub fn no_header(mut self) -> Self {
		self.header = Some(HeaderSource::Hidden);
		self
	}

	/// Uses a header helper registered on the schema
	pub fn header_helper(mut self, helper: impl Into<String>) -> Self {
		self.header = Some(HeaderSource::Helper(helper.into()));
		self
	}

	/// Uses a header callable
	pub fn header_fn(mut self, header: HeaderFn<T>) -> Self {
		self.header = Some(HeaderSource::Render(header));
		self
	}

	/// Uses a data callable
	pub fn data(mut self, data: DataFn<T>) -> Self {
		self.data = Some(DataSource::Fn(data));
		self
	}

	/// Uses a data helper registered on the schema
	pub fn data_helper(mut self, helper: impl Into<String>) -> Self {
		self.data = Some(DataSource::Helper(helper.into()));
		self
	}

	/// Restores field lookup by column name
	pub fn default_data(mut self) -> Self {
		self.data = Some(DataSource::Default);
		self
	}

	/// Adds an attribute to the header cell
	pub fn header_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.header_attrs.insert(name.into(), value.into());
		self
	}

	/// Adds an attribute to every body cell
	pub fn cell_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.cell_attrs.insert(name.into(), value.into());
		self
	}
}

impl<T: 'static> ColumnConfig<T> {
	/// Uses an infallible item-only data callable
	pub fn data_with<F, C>(self, f: F) -> Self
	where
		F: Fn(&T) -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		self.data(DataFn::item(f))
	}
}

impl<T> Clone for ColumnConfig<T> {
	fn clone(&self) -> Self {
		Self {
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

impl<T> std::fmt::Debug for ColumnConfig<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ColumnConfig")
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
