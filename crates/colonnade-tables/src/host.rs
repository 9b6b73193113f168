//! Host capabilities
//!
//! The renderer never produces markup, translations or URLs on its own. It
//! calls into the narrow traits defined here, which the embedding
//! application implements (or takes from `colonnade-web`). All of them are
//! bundled into a [`Host`] for a render call.

use std::fmt;

use crate::column::Column;
use crate::content::{Attributes, Content};
use crate::settings::TableSettings;
use crate::sorting::SortDirection;

/// Structural role of an emitted node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
	/// The whole table
	Table,
	/// The header section
	Head,
	/// The body section
	Body,
	/// A header or body row
	Row,
	/// A header cell
	HeaderCell,
	/// A body cell
	DataCell,
	/// A sort link inside a header cell
	Link,
	/// Wrapper around the label of an unsortable header
	Span,
	/// An element produced by a [`Fragment`](crate::Fragment)
	Custom(String),
}

/// Builds output nodes
pub trait MarkupSink {
	/// Node type produced by the sink
	type Node;

	/// Emits an element
	fn element(&self, tag: &TagKind, attrs: Attributes, children: Vec<Self::Node>) -> Self::Node;

	/// Emits a text node
	fn text(&self, text: &str) -> Self::Node;
}

/// Localization lookup
pub trait Translate {
	/// Returns the message for `key`, or `default` when there is none
	fn translate(&self, key: &str, default: &str) -> String;
}

impl<F> Translate for F
where
	F: Fn(&str, &str) -> String,
{
	fn translate(&self, key: &str, default: &str) -> String {
		self(key, default)
	}
}

/// Builds the targets of header sort links
pub trait SortLinks {
	/// Returns the URL requesting a sort by `column` in `direction`
	fn sort_url(&self, column: &str, direction: SortDirection) -> String;
}

impl<F> SortLinks for F
where
	F: Fn(&str, SortDirection) -> String,
{
	fn sort_url(&self, column: &str, direction: SortDirection) -> String {
		self(column, direction)
	}
}

/// Supplies cell values for items that have no matching field
///
/// A typical provider reads stored fields of a search index hit.
pub trait FallbackData<T> {
	/// Returns the value for `column`, or `None` to render an empty cell
	fn lookup(&self, column: &Column<T>, item: &T) -> Option<Content>;
}

impl<T, F> FallbackData<T> for F
where
	F: Fn(&Column<T>, &T) -> Option<Content>,
{
	fn lookup(&self, column: &Column<T>, item: &T) -> Option<Content> {
		self(column, item)
	}
}

/// Capabilities available to one render
///
/// Only the markup sink is required.
///
/// # Example
///
/// ```
/// use colonnade_tables::{Attributes, Host, MarkupSink, SortDirection, TagKind};
///
/// struct Plain;
///
/// impl MarkupSink for Plain {
///     type Node = String;
///
///     fn element(&self, _tag: &TagKind, _attrs: Attributes, children: Vec<String>) -> String {
///         children.concat()
///     }
///
///     fn text(&self, text: &str) -> String {
///         text.to_string()
///     }
/// }
///
/// struct Book;
///
/// let links = |column: &str, direction: SortDirection| format!("/books?order={column}&dir={direction}");
/// let host: Host<'_, Book, Plain> = Host::new(&Plain).with_links(&links);
/// assert!(host.translator().is_none());
/// ```
pub struct Host<'a, T, S> {
	sink: &'a S,
	translator: Option<&'a dyn Translate>,
	links: Option<&'a dyn SortLinks>,
	fallback: Option<&'a dyn FallbackData<T>>,
	settings: &'a TableSettings,
}

impl<'a, T, S: MarkupSink> Host<'a, T, S> {
	/// Creates a host with only a markup sink and default settings
	pub fn new(sink: &'a S) -> Self {
		Self {
			sink,
			translator: None,
			links: None,
			fallback: None,
			settings: TableSettings::shared_default(),
		}
	}

	/// Localizes headers and hints through `translator`
	pub fn with_translator(mut self, translator: &'a dyn Translate) -> Self {
		self.translator = Some(translator);
		self
	}

	/// Builds sort link targets through `links`
	pub fn with_links(mut self, links: &'a dyn SortLinks) -> Self {
		self.links = Some(links);
		self
	}

	/// Asks `fallback` for values of items without a matching field
	pub fn with_fallback(mut self, fallback: &'a dyn FallbackData<T>) -> Self {
		self.fallback = Some(fallback);
		self
	}

	/// Replaces the default settings
	pub fn with_settings(mut self, settings: &'a TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Returns the markup sink
	pub fn sink(&self) -> &'a S {
		self.sink
	}

	/// Returns the translator, if any
	pub fn translator(&self) -> Option<&'a dyn Translate> {
		self.translator
	}

	/// Returns the link builder, if any
	pub fn links(&self) -> Option<&'a dyn SortLinks> {
		self.links
	}

	/// Returns the fallback data provider, if any
	pub fn fallback(&self) -> Option<&'a dyn FallbackData<T>> {
		self.fallback
	}

	/// Returns the settings in effect
	pub fn settings(&self) -> &'a TableSettings {
		self.settings
	}
}

impl<T, S> fmt::Debug for Host<'_, T, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Host")
			.field("translator", &self.translator.is_some())
			.field("links", &self.links.is_some())
			.field("fallback", &self.fallback.is_some())
			.field("settings", self.settings)
			.finish_non_exhaustive()
	}
}
