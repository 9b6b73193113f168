//! Cell content and format-agnostic markup fragments
//!
//! Data and header callables return [`Content`]. Plain values become text
//! nodes, while [`Fragment`]s describe small pieces of markup that the
//! renderer lowers through the host's markup sink, so the core never commits
//! to a concrete output format.

use std::collections::BTreeMap;

/// Attributes attached to an emitted node
///
/// Keys are kept ordered so that rendering the same table twice produces
/// identical output.
pub type Attributes = BTreeMap<String, String>;

/// Displayed value of a single cell or header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
	/// Nothing to display; renders as an empty cell
	#[default]
	Empty,
	/// Plain text
	Text(String),
	/// A markup fragment
	Fragment(Fragment),
}

impl Content {
	/// Creates text content
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Returns `true` when the content renders nothing
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(text) => text.is_empty(),
			Self::Fragment(_) => false,
		}
	}

	/// Returns the text when this is plain text content
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}
}

impl From<&str> for Content {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for Content {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<Fragment> for Content {
	fn from(value: Fragment) -> Self {
		Self::Fragment(value)
	}
}

impl<C: Into<Content>> From<Option<C>> for Content {
	fn from(value: Option<C>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}

macro_rules! impl_display_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_display_content!(bool, char, i32, i64, u32, u64, usize, f32, f64);

impl From<&serde_json::Value> for Content {
	fn from(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Empty,
			serde_json::Value::String(text) => Self::Text(text.clone()),
			other => Self::Text(other.to_string()),
		}
	}
}

impl From<serde_json::Value> for Content {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::String(text) => Self::Text(text),
			other => Self::from(&other),
		}
	}
}

/// A small markup tree returned by data and header callables
///
/// # Example
///
/// ```
/// use colonnade_tables::Fragment;
///
/// let badge = Fragment::element("strong")
///     .attr("class", "badge")
///     .child(Fragment::text("new"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
	/// An element with attributes and children
	Element {
		/// Tag name as understood by the markup sink
		tag: String,
		/// Element attributes
		attrs: Attributes,
		/// Child fragments
		children: Vec<Fragment>,
	},
	/// A text node
	Text(String),
}

impl Fragment {
	/// Creates an element fragment with no attributes or children
	pub fn element(tag: impl Into<String>) -> Self {
		Self::Element {
			tag: tag.into(),
			attrs: Attributes::new(),
			children: Vec::new(),
		}
	}

	/// Creates a text fragment
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Sets an attribute; ignored on text fragments
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		if let Self::Element { attrs, .. } = &mut self {
			attrs.insert(name.into(), value.into());
		}
		self
	}

	/// Appends a child; ignored on text fragments
	pub fn child(mut self, child: Fragment) -> Self {
		if let Self::Element { children, .. } = &mut self {
			children.push(child);
		}
		self
	}
}
