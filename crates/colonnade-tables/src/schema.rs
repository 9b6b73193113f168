//! Table schemas: ordered column registries
//!
//! A [`Schema`] is defined once per kind of row and reused by many renders.
//! Render-time results (effective widths, active sort column) never touch
//! the schema, so a schema can be shared behind an `Arc` by concurrent
//! renders. Variants of a schema are created with [`Schema::derive`], which
//! copies the definition instead of mutating the base schema.

use std::fmt::{self, Debug};

use indexmap::IndexMap;

use crate::column::{Column, ColumnConfig, DataFn, DataSource, HeaderFn, HeaderSource};
use crate::error::{Result, TableError};
use crate::sorting::SortDirection;

/// A named callable that columns can reference from their data or header source
pub enum Helper<T> {
	/// Produces cell content
	Data(DataFn<T>),
	/// Produces header content
	Header(HeaderFn<T>),
}

impl<T> From<DataFn<T>> for Helper<T> {
	fn from(value: DataFn<T>) -> Self {
		Self::Data(value)
	}
}

impl<T> From<HeaderFn<T>> for Helper<T> {
	fn from(value: HeaderFn<T>) -> Self {
		Self::Header(value)
	}
}

impl<T> Clone for Helper<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Data(f) => Self::Data(f.clone()),
			Self::Header(f) => Self::Header(f.clone()),
		}
	}
}

impl<T> Debug for Helper<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Data(data) => f.debug_tuple("Data").field(data).finish(),
			Self::Header(header) => f.debug_tuple("Header").field(header).finish(),
		}
	}
}

/// An ordered set of uniquely named columns
///
/// # Example
///
/// ```
/// use colonnade_tables::{ColumnConfig, Schema, SortDirection};
///
/// struct Book;
///
/// let mut schema: Schema<Book> = Schema::new("books");
/// schema.define_column("id", ColumnConfig::fixed().width(40));
/// schema.define_column("title", ColumnConfig::flexible().width(100).sortable(true));
///
/// // Redefining a column updates it in place
/// schema.define_column("title", ColumnConfig::new().label("Book title"));
///
/// assert_eq!(schema.len(), 2);
/// assert!(schema.column("title").unwrap().is_flexible());
/// ```
pub struct Schema<T> {
	name: String,
	columns: IndexMap<String, Column<T>>,
	helpers: IndexMap<String, Helper<T>>,
	default_sort: Option<String>,
	default_direction: SortDirection,
}

impl<T> Schema<T> {
	/// Creates an empty schema
	///
	/// The name scopes localization keys for headers and hints.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			columns: IndexMap::new(),
			helpers: IndexMap::new(),
			default_sort: None,
			default_direction: SortDirection::Ascending,
		}
	}

	/// Starts building a schema
	pub fn builder(name: impl Into<String>) -> SchemaBuilder<T> {
		SchemaBuilder::from_schema(Self::new(name))
	}

	/// Starts building a variant of this schema under a new name
	///
	/// The variant starts as a copy; nothing done through the builder is
	/// visible in `self`.
	pub fn derive(&self, name: impl Into<String>) -> SchemaBuilder<T> {
		let mut schema = self.clone();
		schema.name = name.into();
		SchemaBuilder::from_schema(schema)
	}

	/// Returns the schema name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Defines a column, or updates the existing column with that name
	///
	/// Updating keeps the column's position and every attribute `config`
	/// leaves unset.
	pub fn define_column(&mut self, name: impl Into<String>, config: ColumnConfig<T>) -> &mut Column<T> {
		let name = name.into();
		let column = self
			.columns
			.entry(name.clone())
			.or_insert_with(|| Column::new(name));
		column.apply(config);
		column
	}

	/// Removes a column; does nothing when it does not exist
	pub fn remove_column(&mut self, name: &str) -> Option<Column<T>> {
		self.columns.shift_remove(name)
	}

	/// Returns all columns in definition order, including invisible ones
	pub fn columns(&self) -> impl Iterator<Item = &Column<T>> {
		self.columns.values()
	}

	/// Returns the visible columns in definition order
	pub fn visible_columns(&self) -> impl Iterator<Item = &Column<T>> {
		self.columns.values().filter(|column| column.is_visible())
	}

	/// Returns the named column
	pub fn column(&self, name: &str) -> Option<&Column<T>> {
		self.columns.get(name)
	}

	/// Returns whether a column with that name exists
	pub fn contains(&self, name: &str) -> bool {
		self.columns.contains_key(name)
	}

	/// Returns the number of columns, including invisible ones
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns whether the schema has no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Makes a column visible; does nothing when it does not exist
	pub fn show(&mut self, name: &str) {
		if let Some(column) = self.columns.get_mut(name) {
			column.set_visible(true);
		}
	}

	/// Hides a column; does nothing when it does not exist
	pub fn hide(&mut self, name: &str) {
		if let Some(column) = self.columns.get_mut(name) {
			column.set_visible(false);
		}
	}

	/// Marks the named columns as sortable
	///
	/// Fails without changing anything when a name is not defined.
	pub fn sortable_on<I, S>(&mut self, names: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names: Vec<S> = names.into_iter().collect();
		self.check_columns(names.iter().map(|name| name.as_ref()))?;

		for name in &names {
			if let Some(column) = self.columns.get_mut(name.as_ref()) {
				column.set_sortable(true);
			}
		}
		Ok(())
	}

	/// Sets the column and direction used when a request names no valid sort column
	pub fn set_default_sort(&mut self, name: &str, direction: SortDirection) -> Result<()> {
		self.check_columns([name])?;
		self.default_sort = Some(name.to_string());
		self.default_direction = direction;
		Ok(())
	}

	/// Sets the fallback direction without changing the default column
	pub fn set_default_direction(&mut self, direction: SortDirection) {
		self.default_direction = direction;
	}

	/// Returns the default sort column
	pub fn default_sort_column(&self) -> Option<&Column<T>> {
		self.default_sort
			.as_deref()
			.and_then(|name| self.columns.get(name))
	}

	/// Returns the fallback sort direction
	pub fn default_direction(&self) -> SortDirection {
		self.default_direction
	}

	/// Registers a named helper, replacing any helper with the same name
	pub fn define_helper(&mut self, name: impl Into<String>, helper: impl Into<Helper<T>>) {
		self.helpers.insert(name.into(), helper.into());
	}

	/// Returns the named helper
	pub fn helper(&self, name: &str) -> Option<&Helper<T>> {
		self.helpers.get(name)
	}

	/// Checks that every reference inside the schema resolves
	///
	/// Helper references must point at helpers of the matching kind and the
	/// default sort column must still exist.
	pub fn validate(&self) -> Result<()> {
		for column in self.columns.values() {
			if let DataSource::Helper(helper) = column.data() {
				match self.helpers.get(helper) {
					Some(Helper::Data(_)) => {}
					Some(Helper::Header(_)) => {
						return Err(TableError::HelperShape {
							helper: helper.clone(),
							expected: "data",
						});
					}
					None => {
						return Err(TableError::UnknownHelper {
							column: column.name().to_string(),
							helper: helper.clone(),
						});
					}
				}
			}
			if let HeaderSource::Helper(helper) = column.header() {
				match self.helpers.get(helper) {
					Some(Helper::Header(_)) => {}
					Some(Helper::Data(_)) => {
						return Err(TableError::HelperShape {
							helper: helper.clone(),
							expected: "header",
						});
					}
					None => {
						return Err(TableError::UnknownHelper {
							column: column.name().to_string(),
							helper: helper.clone(),
						});
					}
				}
			}
		}

		if let Some(name) = &self.default_sort
			&& !self.columns.contains_key(name)
		{
			return Err(TableError::UnknownColumn(name.clone()));
		}
		Ok(())
	}

	/// Fails with [`TableError::UnknownColumn`] for the first undefined name
	pub fn check_columns<'n, I>(&self, names: I) -> Result<()>
	where
		I: IntoIterator<Item = &'n str>,
	{
		match names.into_iter().find(|name| !self.columns.contains_key(*name)) {
			Some(name) => Err(TableError::UnknownColumn(name.to_string())),
			None => Ok(()),
		}
	}
}

impl<T> Clone for Schema<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			columns: self.columns.clone(),
			helpers: self.helpers.clone(),
			default_sort: self.default_sort.clone(),
			default_direction: self.default_direction,
		}
	}
}

impl<T> Debug for Schema<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Schema")
			.field("name", &self.name)
			.field("columns", &self.columns.values().collect::<Vec<_>>())
			.field("helpers", &self.helpers.keys().collect::<Vec<_>>())
			.field("default_sort", &self.default_sort)
			.field("default_direction", &self.default_direction)
			.finish()
	}
}

/// Builds a [`Schema`] through chained calls
///
/// Configuration errors are remembered and reported by [`build`](Self::build),
/// which also validates helper references.
///
/// # Example
///
/// ```
/// use colonnade_tables::{ColumnConfig, Schema, SortDirection};
///
/// struct Book;
///
/// let books = Schema::<Book>::builder("books")
///     .fixed("id", ColumnConfig::new().width(40))
///     .flexible("title", ColumnConfig::new().width(100))
///     .sortable_on(["title"])
///     .default_sort("title", SortDirection::Ascending)
///     .build()
///     .unwrap();
///
/// let compact = books
///     .derive("compact_books")
///     .hide("id")
///     .build()
///     .unwrap();
///
/// assert!(books.column("id").unwrap().is_visible());
/// assert!(!compact.column("id").unwrap().is_visible());
/// ```
pub struct SchemaBuilder<T> {
	schema: Schema<T>,
	error: Option<TableError>,
}

impl<T> SchemaBuilder<T> {
	fn from_schema(schema: Schema<T>) -> Self {
		Self {
			schema,
			error: None,
		}
	}

	fn record(&mut self, result: Result<()>) {
		if let Err(e) = result
			&& self.error.is_none()
		{
			self.error = Some(e);
		}
	}

	/// Defines or updates a column
	pub fn column(mut self, name: impl Into<String>, config: ColumnConfig<T>) -> Self {
		self.schema.define_column(name, config);
		self
	}

	/// Defines or updates a column and forces it to a fixed width
	pub fn fixed(self, name: impl Into<String>, config: ColumnConfig<T>) -> Self {
		self.column(name, config.with_flexible(false))
	}

	/// Defines or updates a column and makes it flexible
	pub fn flexible(self, name: impl Into<String>, config: ColumnConfig<T>) -> Self {
		self.column(name, config.with_flexible(true))
	}

	/// Removes a column
	pub fn remove(mut self, name: &str) -> Self {
		self.schema.remove_column(name);
		self
	}

	/// Makes a column visible
	pub fn show(mut self, name: &str) -> Self {
		self.schema.show(name);
		self
	}

	/// Hides a column
	pub fn hide(mut self, name: &str) -> Self {
		self.schema.hide(name);
		self
	}

	/// Marks columns as sortable
	pub fn sortable_on<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let result = self.schema.sortable_on(names);
		self.record(result);
		self
	}

	/// Sets the default sort column and direction
	pub fn default_sort(mut self, name: &str, direction: SortDirection) -> Self {
		let result = self.schema.set_default_sort(name, direction);
		self.record(result);
		self
	}

	/// Sets the fallback sort direction
	pub fn default_direction(mut self, direction: SortDirection) -> Self {
		self.schema.set_default_direction(direction);
		self
	}

	/// Registers a named helper
	pub fn helper(mut self, name: impl Into<String>, helper: impl Into<Helper<T>>) -> Self {
		self.schema.define_helper(name, helper);
		self
	}

	/// Finishes the schema
	pub fn build(self) -> Result<Schema<T>> {
		if let Some(e) = self.error {
			return Err(e);
		}
		self.schema.validate()?;
		Ok(self.schema)
	}
}

impl<T> Debug for SchemaBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SchemaBuilder")
			.field("schema", &self.schema)
			.field("error", &self.error)
			.finish()
	}
}
