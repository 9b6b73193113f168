//! Label, header and data sources of a column

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use super::Column;
use crate::content::Content;
use crate::error::CellError;

type ItemFn<T> = dyn Fn(&T) -> Result<Content, CellError> + Send + Sync;
type ColumnItemFn<T> = dyn Fn(&Column<T>, &T) -> Result<Content, CellError> + Send + Sync;
type ColumnFn<T> = dyn Fn(&Column<T>) -> Result<Content, CellError> + Send + Sync;

/// Header label of a column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Label {
	/// Humanized column name, or its translation when the host localizes
	#[default]
	Default,
	/// No label at all
	Hidden,
	/// A literal label
	Text(String),
}

/// A callable that extracts a cell value from a row item
///
/// The two shapes are chosen explicitly at construction time: one receives
/// only the item, the other also receives the column being rendered.
///
/// # Example
///
/// ```
/// use colonnade_tables::DataFn;
///
/// struct Book {
///     price_cents: u64,
/// }
///
/// let price = DataFn::item(|book: &Book| format!("${}.{:02}", book.price_cents / 100, book.price_cents % 100));
/// let tagged = DataFn::column_item(|column, book: &Book| format!("{}:{}", column.name(), book.price_cents));
/// ```
pub enum DataFn<T> {
	/// Receives the row item
	Item(Arc<ItemFn<T>>),
	/// Receives the column and the row item
	ColumnItem(Arc<ColumnItemFn<T>>),
}

impl<T: 'static> DataFn<T> {
	/// Wraps an infallible item-only callable
	pub fn item<F, C>(f: F) -> Self
	where
		F: Fn(&T) -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		Self::Item(Arc::new(move |item| Ok(f(item).into())))
	}

	/// Wraps a fallible item-only callable
	pub fn try_item<F, C, E>(f: F) -> Self
	where
		F: Fn(&T) -> Result<C, E> + Send + Sync + 'static,
		C: Into<Content>,
		E: Display,
	{
		Self::Item(Arc::new(move |item| {
			f(item)
				.map(Into::into)
				.map_err(|e| CellError::new(e.to_string()))
		}))
	}

	/// Wraps an infallible column-and-item callable
	pub fn column_item<F, C>(f: F) -> Self
	where
		F: Fn(&Column<T>, &T) -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		Self::ColumnItem(Arc::new(move |column, item| Ok(f(column, item).into())))
	}

	/// Wraps a fallible column-and-item callable
	pub fn try_column_item<F, C, E>(f: F) -> Self
	where
		F: Fn(&Column<T>, &T) -> Result<C, E> + Send + Sync + 'static,
		C: Into<Content>,
		E: Display,
	{
		Self::ColumnItem(Arc::new(move |column, item| {
			f(column, item)
				.map(Into::into)
				.map_err(|e| CellError::new(e.to_string()))
		}))
	}
}

impl<T> DataFn<T> {
	/// Invokes the callable with the arguments its shape asks for
	pub fn call(&self, column: &Column<T>, item: &T) -> Result<Content, CellError> {
		match self {
			Self::Item(f) => f(item),
			Self::ColumnItem(f) => f(column, item),
		}
	}
}

impl<T> Clone for DataFn<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Item(f) => Self::Item(Arc::clone(f)),
			Self::ColumnItem(f) => Self::ColumnItem(Arc::clone(f)),
		}
	}
}

impl<T> Debug for DataFn<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Item(_) => f.write_str("DataFn::Item(..)"),
			Self::ColumnItem(_) => f.write_str("DataFn::ColumnItem(..)"),
		}
	}
}

/// A callable producing header content for a column
pub struct HeaderFn<T>(Arc<ColumnFn<T>>);

impl<T: 'static> HeaderFn<T> {
	/// Wraps an infallible header callable
	pub fn new<F, C>(f: F) -> Self
	where
		F: Fn(&Column<T>) -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		Self(Arc::new(move |column| Ok(f(column).into())))
	}

	/// Wraps a fallible header callable
	pub fn try_new<F, C, E>(f: F) -> Self
	where
		F: Fn(&Column<T>) -> Result<C, E> + Send + Sync + 'static,
		C: Into<Content>,
		E: Display,
	{
		Self(Arc::new(move |column| {
			f(column)
				.map(Into::into)
				.map_err(|e| CellError::new(e.to_string()))
		}))
	}
}

impl<T> HeaderFn<T> {
	/// Invokes the callable
	pub fn call(&self, column: &Column<T>) -> Result<Content, CellError> {
		(self.0)(column)
	}
}

impl<T> Clone for HeaderFn<T> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<T> Debug for HeaderFn<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("HeaderFn(..)")
	}
}

/// Where a column's cell values come from
pub enum DataSource<T> {
	/// The item's field named like the column, then the host fallback
	Default,
	/// A data helper registered on the schema under this name
	Helper(String),
	/// A callable owned by the column
	Fn(DataFn<T>),
}

impl<T> Default for DataSource<T> {
	fn default() -> Self {
		Self::Default
	}
}

impl<T> Clone for DataSource<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Default => Self::Default,
			Self::Helper(name) => Self::Helper(name.clone()),
			Self::Fn(f) => Self::Fn(f.clone()),
		}
	}
}

impl<T> Debug for DataSource<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("Default"),
			Self::Helper(name) => f.debug_tuple("Helper").field(name).finish(),
			Self::Fn(data) => f.debug_tuple("Fn").field(data).finish(),
		}
	}
}

/// Where a column's header content comes from
pub enum HeaderSource<T> {
	/// Resolve through the column label
	Default,
	/// Suppress the header content
	Hidden,
	/// Literal header text
	Text(String),
	/// A header helper registered on the schema under this name
	Helper(String),
	/// A callable owned by the column
	Render(HeaderFn<T>),
}

impl<T> Default for HeaderSource<T> {
	fn default() -> Self {
		Self::Default
	}
}

impl<T> Clone for HeaderSource<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Default => Self::Default,
			Self::Hidden => Self::Hidden,
			Self::Text(text) => Self::Text(text.clone()),
			Self::Helper(name) => Self::Helper(name.clone()),
			Self::Render(f) => Self::Render(f.clone()),
		}
	}
}

impl<T> Debug for HeaderSource<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("Default"),
			Self::Hidden => f.write_str("Hidden"),
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Helper(name) => f.debug_tuple("Helper").field(name).finish(),
			Self::Render(render) => f.debug_tuple("Render").field(render).finish(),
		}
	}
}
