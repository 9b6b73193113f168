//! Common test fixtures for colonnade-tables tests

#![allow(dead_code)]

use std::cell::Cell;

use colonnade_tables::{
	Attributes, ColumnConfig, Content, MarkupSink, Record, Schema, SortDirection, TagKind,
};
use rstest::*;

/// Product row used across the integration tests
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
	pub id: u32,
	pub title: String,
	pub price: Option<f64>,
	pub kind: &'static str,
}

impl Record for Product {
	fn field(&self, name: &str) -> Option<Content> {
		match name {
			"id" => Some(self.id.into()),
			"title" => Some(self.title.as_str().into()),
			"price" => self.price.map(|price| format!("{price:.2}").into()),
			_ => None,
		}
	}

	fn kind(&self) -> Option<&str> {
		Some(self.kind)
	}
}

/// Node produced by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element {
		tag: TagKind,
		attrs: Attributes,
		children: Vec<Node>,
	},
	Text(String),
}

impl Node {
	pub fn tag(&self) -> Option<&TagKind> {
		match self {
			Self::Element { tag, .. } => Some(tag),
			Self::Text(_) => None,
		}
	}

	pub fn attr(&self, name: &str) -> Option<&str> {
		match self {
			Self::Element { attrs, .. } => attrs.get(name).map(String::as_str),
			Self::Text(_) => None,
		}
	}

	pub fn children(&self) -> &[Node] {
		match self {
			Self::Element { children, .. } => children,
			Self::Text(_) => &[],
		}
	}

	/// Concatenated text of all descendants
	pub fn text(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Element { children, .. } => children.iter().map(Node::text).collect(),
		}
	}

	/// All descendants (including self) with the given tag, depth first
	pub fn find_all(&self, tag: &TagKind) -> Vec<&Node> {
		let mut found = Vec::new();
		self.collect(tag, &mut found);
		found
	}

	fn collect<'n>(&'n self, tag: &TagKind, found: &mut Vec<&'n Node>) {
		if self.tag() == Some(tag) {
			found.push(self);
		}
		for child in self.children() {
			child.collect(tag, found);
		}
	}

	pub fn header_cells(&self) -> Vec<&Node> {
		self.find_all(&TagKind::Head)
			.into_iter()
			.flat_map(|head| head.find_all(&TagKind::HeaderCell))
			.collect()
	}

	pub fn body_rows(&self) -> Vec<&Node> {
		self.find_all(&TagKind::Body)
			.into_iter()
			.flat_map(|body| body.find_all(&TagKind::Row))
			.collect()
	}
}

/// Markup sink building an inspectable tree and counting its calls
#[derive(Debug, Default)]
pub struct RecordingSink {
	calls: Cell<usize>,
}

impl RecordingSink {
	pub fn calls(&self) -> usize {
		self.calls.get()
	}
}

impl MarkupSink for RecordingSink {
	type Node = Node;

	fn element(&self, tag: &TagKind, attrs: Attributes, children: Vec<Node>) -> Node {
		self.calls.set(self.calls.get() + 1);
		Node::Element {
			tag: tag.clone(),
			attrs,
			children,
		}
	}

	fn text(&self, text: &str) -> Node {
		self.calls.set(self.calls.get() + 1);
		Node::Text(text.to_string())
	}
}

/// Markup sink that can be shared between threads
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSink;

impl MarkupSink for TreeSink {
	type Node = Node;

	fn element(&self, tag: &TagKind, attrs: Attributes, children: Vec<Node>) -> Node {
		Node::Element {
			tag: tag.clone(),
			attrs,
			children,
		}
	}

	fn text(&self, text: &str) -> Node {
		Node::Text(text.to_string())
	}
}

/// Fixture providing three products, one of them without a price
#[fixture]
pub fn products() -> Vec<Product> {
	vec![
		Product {
			id: 1,
			title: "Desk lamp".to_string(),
			price: Some(19.9),
			kind: "lamp",
		},
		Product {
			id: 2,
			title: "Bookshelf".to_string(),
			price: None,
			kind: "furniture",
		},
		Product {
			id: 3,
			title: "Armchair".to_string(),
			price: Some(249.0),
			kind: "furniture",
		},
	]
}

/// Fixture providing the id/title/price schema
///
/// `id` is fixed at 40, `title` and `price` are flexible at 100 and 60.
/// Title and price are sortable, title ascending is the default sort.
#[fixture]
pub fn product_schema() -> Schema<Product> {
	Schema::builder("products")
		.fixed("id", ColumnConfig::new().width(40).label("#"))
		.flexible("title", ColumnConfig::new().width(100))
		.flexible(
			"price",
			ColumnConfig::new()
				.width(60)
				.default_sort_direction(SortDirection::Ascending)
				.cell_attr("class", "numeric"),
		)
		.sortable_on(["title", "price"])
		.default_sort("title", SortDirection::Ascending)
		.build()
		.unwrap()
}
