//! Width allocation
//!
//! Every visible column gets its base width. When the requested table width
//! leaves slack, each flexible column receives an equal share of it. Shares
//! are computed with integer division and the remainder is not assigned to
//! any column, so the effective widths may add up to slightly less than the
//! requested width.

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::schema::Schema;

/// Effective width of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidth {
	name: String,
	width: u32,
}

impl ColumnWidth {
	/// Returns the column name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the effective width
	pub fn width(&self) -> u32 {
		self.width
	}
}

/// Effective widths of the columns taking part in one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	requested: u32,
	widths: Vec<ColumnWidth>,
}

impl Layout {
	/// Allocates `width` among the given columns
	///
	/// Invisible columns are skipped. Fails when the base widths of the
	/// remaining columns do not fit.
	pub fn compute<'c, T, I>(columns: I, width: u32) -> Result<Self>
	where
		T: 'c,
		I: IntoIterator<Item = &'c Column<T>>,
	{
		let visible: Vec<&Column<T>> = columns
			.into_iter()
			.filter(|column| column.is_visible())
			.collect();

		let required: u64 = visible.iter().map(|column| u64::from(column.width())).sum();
		if required > u64::from(width) {
			return Err(TableError::WidthOverflow {
				required,
				available: width,
			});
		}

		let flexible = visible.iter().filter(|column| column.is_flexible()).count() as u64;
		let slack = u64::from(width) - required;
		// The remainder of the division is left unassigned.
		let share = if flexible == 0 { 0 } else { slack / flexible };

		tracing::debug!(required, available = width, slack, flexible, share, "allocating column widths");

		let widths = visible
			.into_iter()
			.map(|column| {
				let extra = if column.is_flexible() { share } else { 0 };
				ColumnWidth {
					name: column.name().to_string(),
					// Fits: base + share never exceeds the requested width.
					width: column.width() + extra as u32,
				}
			})
			.collect();

		Ok(Self {
			requested: width,
			widths,
		})
	}

	/// Returns the width the layout was computed for
	pub fn requested(&self) -> u32 {
		self.requested
	}

	/// Returns the effective width of the named column
	pub fn width_of(&self, name: &str) -> Option<u32> {
		self.widths
			.iter()
			.find(|entry| entry.name == name)
			.map(ColumnWidth::width)
	}

	/// Returns the sum of all effective widths
	pub fn total(&self) -> u64 {
		self.widths.iter().map(|entry| u64::from(entry.width)).sum()
	}

	/// Iterates the effective widths in column order
	pub fn iter(&self) -> impl Iterator<Item = &ColumnWidth> {
		self.widths.iter()
	}

	/// Returns the number of columns in the layout
	pub fn len(&self) -> usize {
		self.widths.len()
	}

	/// Returns whether the layout has no columns
	pub fn is_empty(&self) -> bool {
		self.widths.is_empty()
	}
}

/// Allocates `width` among the visible columns of `schema`
///
/// # Example
///
/// ```
/// use colonnade_tables::{ColumnConfig, Schema, layout::allocate};
///
/// struct Product;
///
/// let schema = Schema::<Product>::builder("products")
///     .fixed("id", ColumnConfig::new().width(40))
///     .flexible("title", ColumnConfig::new().width(100))
///     .flexible("price", ColumnConfig::new().width(60))
///     .build()
///     .unwrap();
///
/// let layout = allocate(&schema, 300).unwrap();
/// assert_eq!(layout.width_of("id"), Some(40));
/// assert_eq!(layout.width_of("title"), Some(150));
/// assert_eq!(layout.width_of("price"), Some(110));
///
/// assert!(allocate(&schema, 150).is_err());
/// ```
pub fn allocate<T>(schema: &Schema<T>, width: u32) -> Result<Layout> {
	Layout::compute(schema.columns(), width)
}
