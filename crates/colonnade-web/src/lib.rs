//! Web adapters for Colonnade tables
//!
//! Concrete host capabilities for `colonnade-tables`:
//!
//! - [`HtmlSink`]: builds [`HtmlNode`] trees, either as a regular HTML table
//!   or as nested `div`s
//! - [`MessageCatalog`]: translates header labels and hints
//! - [`QueryUrlBuilder`]: builds sort links that keep the current query
//!
//! # Example
//!
//! ```rust
//! use colonnade_tables::{ColumnConfig, Host, Schema, SortRequest};
//! use colonnade_web::{HtmlSink, MessageCatalog, QueryUrlBuilder};
//! use serde_json::{Value, json};
//!
//! let schema = Schema::<Value>::builder("books")
//!     .flexible("title", ColumnConfig::new().width(100))
//!     .sortable_on(["title"])
//!     .build()
//!     .unwrap();
//!
//! let sink = HtmlSink::new();
//! let catalog = MessageCatalog::from_json_str("de", r#"{"tables.headers.books.title": "Titel"}"#).unwrap();
//! let links = QueryUrlBuilder::new("/books");
//! let host = Host::new(&sink).with_translator(&catalog).with_links(&links);
//!
//! let items = vec![json!({ "title": "Emma" })];
//! let html = schema
//!     .render(&items, 400, &SortRequest::new(), &host)
//!     .unwrap()
//!     .into_node()
//!     .to_html();
//!
//! assert!(html.contains(r#"<a href="/books?sort_column=title&amp;sort_direction=desc">Titel</a>"#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod error;
pub mod html;
pub mod urls;

// Re-exports for convenience
pub use catalog::MessageCatalog;
pub use error::{Result, WebError};
pub use html::{HtmlNode, HtmlSink, TagNames, escape};
pub use urls::QueryUrlBuilder;
