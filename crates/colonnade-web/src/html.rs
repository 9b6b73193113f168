//! HTML output
//!
//! [`HtmlSink`] maps the structural roles of a rendered table onto HTML tag
//! names and builds an [`HtmlNode`] tree, which serializes to an escaped
//! HTML string.

use std::fmt;

use colonnade_tables::{Attributes, MarkupSink, TagKind};
use serde::{Deserialize, Serialize};

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use colonnade_web::html::escape;
///
/// assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
/// assert_eq!(escape("<b>\"bold\"</b>"), "&lt;b&gt;&quot;bold&quot;&lt;/b&gt;");
/// assert_eq!(escape("it's"), "it&#x27;s");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Tag and attribute names are restricted to ASCII letters, digits, `-`,
/// `_` and `:`.
fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

/// A node of an HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
	/// An element
	Element {
		/// Tag name
		tag: String,
		/// Attributes, serialized in key order
		attrs: Attributes,
		/// Child nodes
		children: Vec<HtmlNode>,
	},
	/// A text node, escaped on output
	Text(String),
}

impl HtmlNode {
	/// Creates an element without attributes
	pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
		Self::Element {
			tag: tag.into(),
			attrs: Attributes::new(),
			children,
		}
	}

	/// Creates a text node
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Returns the value of an attribute
	pub fn attr(&self, name: &str) -> Option<&str> {
		match self {
			Self::Element { attrs, .. } => attrs.get(name).map(String::as_str),
			Self::Text(_) => None,
		}
	}

	/// Returns the child nodes
	pub fn children(&self) -> &[HtmlNode] {
		match self {
			Self::Element { children, .. } => children,
			Self::Text(_) => &[],
		}
	}

	/// Renders the node to an HTML string
	///
	/// Elements with an invalid tag name are replaced by their children and
	/// attributes with an invalid name are dropped.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		match self {
			Self::Element {
				tag,
				attrs,
				children,
			} => {
				if !is_valid_name(tag) {
					tracing::debug!(tag = %tag, "skipping element with invalid tag name");
					for child in children {
						child.write_html(output);
					}
					return;
				}

				output.push('<');
				output.push_str(tag);
				for (name, value) in attrs {
					if !is_valid_name(name) {
						tracing::debug!(attribute = %name, "skipping invalid attribute name");
						continue;
					}
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&escape(value));
					output.push('"');
				}
				output.push('>');
				for child in children {
					child.write_html(output);
				}
				output.push_str("</");
				output.push_str(tag);
				output.push('>');
			}
			Self::Text(text) => output.push_str(&escape(text)),
		}
	}
}

impl fmt::Display for HtmlNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}

/// HTML tag names used for each structural role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagNames {
	/// Tag of the table
	pub table: String,
	/// Tag of the header section
	pub head: String,
	/// Tag of the body section
	pub body: String,
	/// Tag of rows
	pub row: String,
	/// Tag of header cells
	pub header_cell: String,
	/// Tag of body cells
	pub data_cell: String,
	/// Tag of sort links
	pub link: String,
	/// Tag wrapping unsortable header labels
	pub span: String,
}

impl Default for TagNames {
	fn default() -> Self {
		Self {
			table: "table".to_string(),
			head: "thead".to_string(),
			body: "tbody".to_string(),
			row: "tr".to_string(),
			header_cell: "th".to_string(),
			data_cell: "td".to_string(),
			link: "a".to_string(),
			span: "span".to_string(),
		}
	}
}

/// Markup sink producing [`HtmlNode`]s
///
/// # Example
///
/// ```
/// use colonnade_tables::{Attributes, MarkupSink, TagKind};
/// use colonnade_web::HtmlSink;
///
/// let sink = HtmlSink::new();
/// let cell = sink.element(&TagKind::DataCell, Attributes::new(), vec![sink.text("5 < 6")]);
/// assert_eq!(cell.to_html(), "<td>5 &lt; 6</td>");
///
/// let divs = HtmlSink::divs();
/// let cell = divs.element(&TagKind::DataCell, Attributes::new(), vec![]);
/// assert_eq!(cell.to_html(), r#"<div class="td"></div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlSink {
	names: TagNames,
	role_classes: bool,
}

impl HtmlSink {
	/// Creates a sink emitting a regular HTML table
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a sink with custom tag names
	pub fn with_names(names: TagNames) -> Self {
		Self {
			names,
			role_classes: false,
		}
	}

	/// Creates a sink emitting nested `div`s
	///
	/// Sections and cells get a class naming their role (`thead`, `tbody`,
	/// `th`, `td`), so the table can be styled as a CSS grid.
	pub fn divs() -> Self {
		let div = || "div".to_string();
		Self {
			names: TagNames {
				table: div(),
				head: div(),
				body: div(),
				row: div(),
				header_cell: div(),
				data_cell: div(),
				..TagNames::default()
			},
			role_classes: true,
		}
	}

	/// Returns the tag names in use
	pub fn names(&self) -> &TagNames {
		&self.names
	}

	fn role_class(tag: &TagKind) -> Option<&'static str> {
		match tag {
			TagKind::Head => Some("thead"),
			TagKind::Body => Some("tbody"),
			TagKind::HeaderCell => Some("th"),
			TagKind::DataCell => Some("td"),
			_ => None,
		}
	}
}

impl MarkupSink for HtmlSink {
	type Node = HtmlNode;

	fn element(&self, tag: &TagKind, mut attrs: Attributes, children: Vec<HtmlNode>) -> HtmlNode {
		let name = match tag {
			TagKind::Table => &self.names.table,
			TagKind::Head => &self.names.head,
			TagKind::Body => &self.names.body,
			TagKind::Row => &self.names.row,
			TagKind::HeaderCell => &self.names.header_cell,
			TagKind::DataCell => &self.names.data_cell,
			TagKind::Link => &self.names.link,
			TagKind::Span => &self.names.span,
			TagKind::Custom(name) => name,
		};

		if self.role_classes
			&& let Some(role) = Self::role_class(tag)
		{
			let class = match attrs.remove("class") {
				Some(class) => format!("{role} {class}"),
				None => role.to_string(),
			};
			attrs.insert("class".to_string(), class);
		}

		HtmlNode::Element {
			tag: name.clone(),
			attrs,
			children,
		}
	}

	fn text(&self, text: &str) -> HtmlNode {
		HtmlNode::Text(text.to_string())
	}
}
