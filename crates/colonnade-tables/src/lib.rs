//! Column-based table layout and rendering for Colonnade
//!
//! This crate turns a declarative column schema plus a collection of row
//! items into an abstract table tree. It computes column widths for a
//! requested table width, resolves the active sort column from request
//! parameters, and extracts each cell's value through a fixed precedence of
//! helpers, callables, item fields and a host fallback.
//!
//! Output, localization and URL building are host capabilities: the
//! renderer calls a [`MarkupSink`], an optional [`Translate`] and optional
//! [`SortLinks`], so the core never commits to an output format.
//!
//! # Features
//!
//! - **Schemas**: ordered column registries with partial column updates and
//!   copy-on-derive variants
//! - **Layout**: fixed and flexible columns sharing the spare width
//! - **Sorting**: request parameters with configurable key names
//! - **Recovery**: a failing cell renders empty and is reported as a
//!   [`Diagnostic`] instead of aborting the table
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Schema] --> B[Columns]
//!     A --> C[Helpers]
//!     D[RenderContext] --> A
//!     D --> E[Layout]
//!     D --> F[SortState]
//!     D --> G[Host]
//!     G --> H[MarkupSink]
//!     G --> I[Translate]
//!     G --> J[SortLinks]
//!     G --> K[FallbackData]
//! ```
//!
//! # Example
//!
//! ```rust
//! use colonnade_tables::{ColumnConfig, Host, Schema, SortRequest};
//! # use colonnade_tables::{Attributes, MarkupSink, TagKind};
//! # struct Plain;
//! # impl MarkupSink for Plain {
//! #     type Node = String;
//! #     fn element(&self, _: &TagKind, _: Attributes, children: Vec<String>) -> String {
//! #         children.join("|")
//! #     }
//! #     fn text(&self, text: &str) -> String {
//! #         text.to_string()
//! #     }
//! # }
//! use serde_json::{Value, json};
//!
//! let schema = Schema::<Value>::builder("products")
//!     .fixed("id", ColumnConfig::new().width(40))
//!     .flexible("title", ColumnConfig::new().width(100))
//!     .flexible("price", ColumnConfig::new().width(60))
//!     .build()
//!     .unwrap();
//!
//! let items = vec![json!({ "id": 1, "title": "Lamp", "price": "19.90" })];
//! let rendered = schema
//!     .render(&items, 300, &SortRequest::new(), &Host::new(&Plain))
//!     .unwrap();
//!
//! assert!(rendered.is_clean());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod layout;
pub mod record;
pub mod render;
pub mod schema;
pub mod settings;
pub mod sorting;
pub mod text;

// Re-exports for convenience
pub use column::{Column, ColumnConfig, DataFn, DataSource, HeaderFn, HeaderSource, Label};
pub use content::{Attributes, Content, Fragment};
pub use error::{CellError, Result, TableError};
pub use host::{FallbackData, Host, MarkupSink, SortLinks, TagKind, Translate};
pub use layout::{ColumnWidth, Layout, allocate};
pub use record::Record;
pub use render::{Diagnostic, RenderContext, Rendered};
pub use schema::{Helper, Schema, SchemaBuilder};
pub use settings::TableSettings;
pub use sorting::{ParamSource, SortDirection, SortRequest, SortState};
pub use text::humanize;
