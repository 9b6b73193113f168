//! # Colonnade
//!
//! Column-based table layout and rendering.
//!
//! Colonnade renders collections as tables described by a column schema.
//! It allocates column widths for a requested table width, lets flexible
//! columns absorb the spare width, resolves the active sort column from
//! request parameters and emits the table through a host-supplied markup
//! sink.
//!
//! ## Crates
//!
//! - [`tables`] - schemas, layout, sorting and the renderer
//! - [`web`] - HTML sink, message catalog and sort link builder (`web` feature)
//!
//! ## Feature Flags
//!
//! - `web` (default) - HTML output and request adapters via `colonnade-web`
//!
//! ## Quick Example
//!
//! ```rust
//! use colonnade::prelude::*;
//! use serde_json::{Value, json};
//!
//! let schema = Schema::<Value>::builder("products")
//!     .fixed("id", ColumnConfig::new().width(40))
//!     .flexible("title", ColumnConfig::new().width(100))
//!     .flexible("price", ColumnConfig::new().width(60))
//!     .sortable_on(["title", "price"])
//!     .default_sort("title", SortDirection::Ascending)
//!     .build()
//!     .unwrap();
//!
//! let settings = TableSettings::default();
//! let request = SortRequest::from_query("sort_column=price&sort_direction=desc", &settings);
//! let sink = HtmlSink::new();
//! let links = QueryUrlBuilder::new("/products");
//! let host = Host::new(&sink).with_links(&links);
//!
//! let products = vec![json!({ "id": 1, "title": "Desk lamp", "price": "19.90" })];
//! let rendered = schema.render(&products, 300, &request, &host).unwrap();
//!
//! let html = rendered.node.to_html();
//! assert!(html.contains(r#"<td class="title" style="width:150px;">Desk lamp</td>"#));
//! assert!(html.contains(r#"class="sorted desc""#));
//! ```

// Member crates
pub use colonnade_tables as tables;
#[cfg(feature = "web")]
pub use colonnade_web as web;

// Re-export core types
pub use colonnade_tables::{
	CellError, Column, ColumnConfig, Content, DataFn, Diagnostic, Fragment, HeaderFn, Host,
	Layout, MarkupSink, Record, RenderContext, Rendered, Result, Schema, SchemaBuilder,
	SortDirection, SortRequest, SortState, TableError, TableSettings, TagKind, Translate,
};

// Re-export web adapters
#[cfg(feature = "web")]
pub use colonnade_web::{HtmlNode, HtmlSink, MessageCatalog, QueryUrlBuilder, WebError};

/// Commonly used types
pub mod prelude {
	// Core types - always available
	pub use crate::{
		Column, ColumnConfig, Content, DataFn, Fragment, HeaderFn, Host, MarkupSink, Record,
		Schema, SortDirection, SortRequest, TableError, TableSettings, TagKind, Translate,
	};

	// Web feature - HTML output and request adapters
	#[cfg(feature = "web")]
	pub use crate::{HtmlNode, HtmlSink, MessageCatalog, QueryUrlBuilder};
}
