//! Rendering
//!
//! A [`RenderContext`] holds everything computed for one render: the
//! requested width, the resolved sort state, the memoized layout and the
//! optional column filter. The schema is only read, so any number of
//! contexts can render the same schema at once.
//!
//! The emitted tree has the shape
//! `Table(Head(Row(HeaderCell*)), Body(Row(DataCell*)*))`.

use std::borrow::Borrow;
use std::fmt;

use crate::column::Column;
use crate::content::{Attributes, Content, Fragment};
use crate::dispatch::{resolve_data, resolve_header, resolve_hint};
use crate::error::Result;
use crate::host::{Host, MarkupSink, TagKind};
use crate::layout::Layout;
use crate::record::Record;
use crate::schema::Schema;
use crate::settings::TableSettings;
use crate::sorting::{SortDirection, SortRequest, SortState};

/// A recovered failure of a single cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Zero-based body row, or `None` for the header row
	pub row: Option<usize>,
	/// Column whose content failed
	pub column: String,
	/// Error message of the failing callable
	pub message: String,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.row {
			Some(row) => write!(f, "row {row}, column `{}`: {}", self.column, self.message),
			None => write!(f, "header of column `{}`: {}", self.column, self.message),
		}
	}
}

/// Output of a render
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<N> {
	/// Root table node
	pub node: N,
	/// Cells that failed and were rendered empty
	pub diagnostics: Vec<Diagnostic>,
}

impl<N> Rendered<N> {
	/// Returns `true` when every cell rendered successfully
	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}

	/// Discards the diagnostics and returns the table node
	pub fn into_node(self) -> N {
		self.node
	}
}

#[derive(Debug, Clone, Default)]
enum ColumnFilter {
	#[default]
	All,
	Only(Vec<String>),
	Except(Vec<String>),
}

impl ColumnFilter {
	fn allows(&self, name: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(names) => names.iter().any(|n| n == name),
			Self::Except(names) => !names.iter().any(|n| n == name),
		}
	}
}

/// Render-scoped state for one schema
///
/// # Example
///
/// ```
/// use colonnade_tables::{ColumnConfig, Schema, SortDirection, SortRequest};
///
/// struct Book;
///
/// let schema = Schema::<Book>::builder("books")
///     .fixed("id", ColumnConfig::new().width(40))
///     .flexible("title", ColumnConfig::new().width(100))
///     .sortable_on(["title"])
///     .build()
///     .unwrap();
///
/// let request = SortRequest::new().column("title").direction("asc");
/// let mut context = schema.context(300, &request);
///
/// assert_eq!(context.sort_state().column(), Some("title"));
/// assert_eq!(context.layout().unwrap().width_of("title"), Some(260));
/// ```
pub struct RenderContext<'s, T> {
	schema: &'s Schema<T>,
	width: u32,
	sort: SortState,
	filter: ColumnFilter,
	layout: Option<Layout>,
}

impl<'s, T> RenderContext<'s, T> {
	/// Creates a context rendering `schema` at `width` for `request`
	pub fn new(schema: &'s Schema<T>, width: u32, request: &SortRequest) -> Self {
		let sort = SortState::resolve(schema, request);
		tracing::debug!(
			schema = schema.name(),
			column = sort.column(),
			direction = %sort.direction(),
			"resolved sort state"
		);
		Self {
			schema,
			width,
			sort,
			filter: ColumnFilter::All,
			layout: None,
		}
	}

	/// Restricts the header and body to the named columns
	///
	/// Fails when a name is not part of the schema.
	pub fn only<I, S>(mut self, names: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names = self.checked_names(names)?;
		self.filter = ColumnFilter::Only(names);
		Ok(self)
	}

	/// Leaves the named columns out of the render
	///
	/// Fails when a name is not part of the schema.
	pub fn except<I, S>(mut self, names: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names = self.checked_names(names)?;
		self.filter = ColumnFilter::Except(names);
		Ok(self)
	}

	fn checked_names<I, S>(&self, names: I) -> Result<Vec<String>>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		self.schema.check_columns(names.iter().map(String::as_str))?;
		Ok(names)
	}

	/// Returns the schema being rendered
	pub fn schema(&self) -> &'s Schema<T> {
		self.schema
	}

	/// Returns the requested width
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Changes the requested width
	///
	/// A different width discards the memoized layout.
	pub fn set_width(&mut self, width: u32) {
		if width != self.width {
			self.width = width;
			self.layout = None;
		}
	}

	/// Returns the resolved sort state
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Returns the columns this context renders, in order
	pub fn columns(&self) -> impl Iterator<Item = &'s Column<T>> + '_ {
		let filter = &self.filter;
		self.schema
			.visible_columns()
			.filter(move |column| filter.allows(column.name()))
	}

	/// Returns the layout for the current width, computing it on first use
	///
	/// Widths are allocated over every visible column of the schema; the
	/// `only`/`except` filter does not change them.
	pub fn layout(&mut self) -> Result<&Layout> {
		let layout = match self.layout.take() {
			Some(layout) => layout,
			None => Layout::compute(self.schema.visible_columns(), self.width)?,
		};
		Ok(self.layout.insert(layout))
	}

	/// Renders `items` through the capabilities of `host`
	///
	/// Configuration errors are reported before the sink is called for the
	/// first time. Failures of individual cells are recovered: the cell is
	/// rendered empty and a [`Diagnostic`] is returned alongside the node.
	pub fn render<I, S>(&mut self, items: I, host: &Host<'_, T, S>) -> Result<Rendered<S::Node>>
	where
		I: IntoIterator,
		I::Item: Borrow<T>,
		S: MarkupSink,
		T: Record,
	{
		self.schema.validate()?;
		let layout = self.layout()?.clone();

		let mut pass = Pass {
			schema: self.schema,
			sort: &self.sort,
			layout: &layout,
			host,
			settings: host.settings(),
			diagnostics: Vec::new(),
		};
		let columns: Vec<&Column<T>> = self.columns().collect();

		let head = pass.head(&columns);
		let mut rows = Vec::new();
		for (index, item) in items.into_iter().enumerate() {
			rows.push(pass.row(&columns, index, item.borrow()));
		}
		let row_count = rows.len();
		let body = host.sink().element(&TagKind::Body, Attributes::new(), rows);

		let mut attrs = Attributes::new();
		push_class(&mut attrs, &pass.settings.table_class);
		if layout.requested() > 0 {
			push_style(&mut attrs, &pass.settings.width_style(layout.requested()));
		}
		let node = host.sink().element(&TagKind::Table, attrs, vec![head, body]);

		tracing::trace!(
			schema = self.schema.name(),
			columns = columns.len(),
			rows = row_count,
			failures = pass.diagnostics.len(),
			"rendered table"
		);

		Ok(Rendered {
			node,
			diagnostics: pass.diagnostics,
		})
	}
}

impl<T> Clone for RenderContext<'_, T> {
	fn clone(&self) -> Self {
		Self {
			schema: self.schema,
			width: self.width,
			sort: self.sort.clone(),
			filter: self.filter.clone(),
			layout: self.layout.clone(),
		}
	}
}

impl<T> fmt::Debug for RenderContext<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderContext")
			.field("schema", &self.schema.name())
			.field("width", &self.width)
			.field("sort", &self.sort)
			.field("filter", &self.filter)
			.field("layout", &self.layout)
			.finish()
	}
}

impl<T> Schema<T> {
	/// Creates a render context for this schema
	pub fn context(&self, width: u32, request: &SortRequest) -> RenderContext<'_, T> {
		RenderContext::new(self, width, request)
	}

	/// Renders `items` in one call
	///
	/// Shorthand for [`Schema::context`] followed by [`RenderContext::render`].
	pub fn render<I, S>(
		&self,
		items: I,
		width: u32,
		request: &SortRequest,
		host: &Host<'_, T, S>,
	) -> Result<Rendered<S::Node>>
	where
		I: IntoIterator,
		I::Item: Borrow<T>,
		S: MarkupSink,
		T: Record,
	{
		self.context(width, request).render(items, host)
	}
}

/// State of a single pass over the items
struct Pass<'r, 'h, T, S> {
	schema: &'r Schema<T>,
	sort: &'r SortState,
	layout: &'r Layout,
	host: &'r Host<'h, T, S>,
	settings: &'h TableSettings,
	diagnostics: Vec<Diagnostic>,
}

impl<T: Record, S: MarkupSink> Pass<'_, '_, T, S> {
	fn sink(&self) -> &S {
		self.host.sink()
	}

	fn head(&mut self, columns: &[&Column<T>]) -> S::Node {
		let cells = columns.iter().map(|column| self.header_cell(column)).collect();
		let row = self.sink().element(&TagKind::Row, Attributes::new(), cells);
		self.sink().element(&TagKind::Head, Attributes::new(), vec![row])
	}

	fn header_cell(&mut self, column: &Column<T>) -> S::Node {
		let mut attrs = column.header_attrs().clone();
		let custom_class = attrs.remove("class");
		push_class(&mut attrs, column.name());
		if let Some(class) = &custom_class {
			push_class(&mut attrs, class);
		}
		if column.is_sortable() {
			push_class(&mut attrs, &self.settings.sortable_class);
		}
		self.annotate_width(&mut attrs, column);

		let translator = self.host.translator();
		if !attrs.contains_key("title")
			&& let Some(hint) = resolve_hint(self.schema, column, translator, self.settings)
		{
			attrs.insert("title".to_string(), hint);
		}

		let header = match resolve_header(self.schema, column, translator, self.settings) {
			Ok(header) => header,
			Err(e) => {
				self.record(None, column, e.message());
				None
			}
		};

		let children = match header {
			None => Vec::new(),
			Some(content) => {
				let inner = self.lower(content);
				match self.sort.offered_direction(column) {
					Some(direction) => {
						let mut link = Attributes::new();
						let href = match self.host.links() {
							Some(links) => links.sort_url(column.name(), direction),
							None => default_sort_url(self.settings, column.name(), direction),
						};
						link.insert("href".to_string(), href);
						if self.sort.is_active(column.name()) {
							push_class(&mut link, &self.settings.sorted_class);
							push_class(&mut link, self.sort.direction().as_str());
						}
						vec![self.sink().element(&TagKind::Link, link, inner)]
					}
					None => vec![self.sink().element(&TagKind::Span, Attributes::new(), inner)],
				}
			}
		};

		self.sink().element(&TagKind::HeaderCell, attrs, children)
	}

	fn row(&mut self, columns: &[&Column<T>], index: usize, item: &T) -> S::Node {
		let mut attrs = Attributes::new();
		push_class(&mut attrs, &self.settings.row_class);
		if let Some(kind) = item.kind() {
			push_class(&mut attrs, kind);
		}
		if self.settings.striped {
			let stripe = if index % 2 == 0 {
				&self.settings.odd_class
			} else {
				&self.settings.even_class
			};
			push_class(&mut attrs, stripe);
		}

		let cells = columns
			.iter()
			.map(|column| self.data_cell(column, index, item))
			.collect();
		self.sink().element(&TagKind::Row, attrs, cells)
	}

	fn data_cell(&mut self, column: &Column<T>, index: usize, item: &T) -> S::Node {
		let mut attrs = column.cell_attrs().clone();
		let custom_class = attrs.remove("class");
		push_class(&mut attrs, column.name());
		if let Some(class) = &custom_class {
			push_class(&mut attrs, class);
		}
		self.annotate_width(&mut attrs, column);

		let content = match resolve_data(self.schema, column, item, self.host.fallback()) {
			Ok(content) => content,
			Err(e) => {
				self.record(Some(index), column, e.message());
				Content::Empty
			}
		};
		let children = self.lower(content);
		self.sink().element(&TagKind::DataCell, attrs, children)
	}

	fn annotate_width(&self, attrs: &mut Attributes, column: &Column<T>) {
		if let Some(width) = self.layout.width_of(column.name())
			&& width > 0
		{
			let style = self.settings.width_style(width);
			match attrs.remove("style") {
				Some(custom) => attrs.insert("style".to_string(), format!("{style}{custom}")),
				None => attrs.insert("style".to_string(), style),
			};
		}
	}

	fn lower(&self, content: Content) -> Vec<S::Node> {
		match content {
			Content::Empty => Vec::new(),
			Content::Text(text) if text.is_empty() => Vec::new(),
			Content::Text(text) => vec![self.sink().text(&text)],
			Content::Fragment(fragment) => vec![self.lower_fragment(fragment)],
		}
	}

	fn lower_fragment(&self, fragment: Fragment) -> S::Node {
		match fragment {
			Fragment::Text(text) => self.sink().text(&text),
			Fragment::Element {
				tag,
				attrs,
				children,
			} => {
				let children = children
					.into_iter()
					.map(|child| self.lower_fragment(child))
					.collect();
				self.sink().element(&TagKind::Custom(tag), attrs, children)
			}
		}
	}

	fn record(&mut self, row: Option<usize>, column: &Column<T>, message: &str) {
		tracing::warn!(
			schema = self.schema.name(),
			column = column.name(),
			row,
			error = message,
			"cell content failed, rendering empty cell"
		);
		self.diagnostics.push(Diagnostic {
			row,
			column: column.name().to_string(),
			message: message.to_string(),
		});
	}
}

fn push_class(attrs: &mut Attributes, class: &str) {
	let class = class.trim();
	if class.is_empty() {
		return;
	}
	attrs
		.entry("class".to_string())
		.and_modify(|existing| {
			existing.push(' ');
			existing.push_str(class);
		})
		.or_insert_with(|| class.to_string());
}

fn push_style(attrs: &mut Attributes, style: &str) {
	attrs
		.entry("style".to_string())
		.and_modify(|existing| existing.push_str(style))
		.or_insert_with(|| style.to_string());
}

fn default_sort_url(
	settings: &TableSettings,
	column: &str,
	direction: SortDirection,
) -> String {
	let params = settings.sort_params(column, direction);
	match serde_urlencoded::to_string(&params) {
		Ok(query) => format!("?{query}"),
		Err(e) => {
			tracing::debug!(error = %e, "failed to encode sort parameters");
			String::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_class_skips_blank() {
		let mut attrs = Attributes::new();
		push_class(&mut attrs, "price");
		push_class(&mut attrs, " ");
		push_class(&mut attrs, "numeric");
		assert_eq!(attrs.get("class").map(String::as_str), Some("price numeric"));
	}

	#[test]
	fn test_column_filter() {
		let only = ColumnFilter::Only(vec!["id".to_string()]);
		let except = ColumnFilter::Except(vec!["id".to_string()]);
		assert!(only.allows("id"));
		assert!(!only.allows("title"));
		assert!(!except.allows("id"));
		assert!(ColumnFilter::All.allows("anything"));
	}

	#[test]
	fn test_diagnostic_display() {
		let diagnostic = Diagnostic {
			row: Some(2),
			column: "price".to_string(),
			message: "boom".to_string(),
		};
		assert_eq!(diagnostic.to_string(), "row 2, column `price`: boom");
	}
}
