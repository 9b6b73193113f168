//! Field access on row items

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::content::Content;

/// Field lookup used when a column has no data callable
///
/// Both methods have defaults, so item types whose columns all use
/// callables can implement the trait with an empty block.
pub trait Record {
	/// Returns the value of the field called `name`
	///
	/// `None` means the item has no such field; the renderer then asks the
	/// host fallback provider and finally renders an empty cell.
	fn field(&self, name: &str) -> Option<Content> {
		let _ = name;
		None
	}

	/// Returns a kind name added to the class of the item's row
	fn kind(&self) -> Option<&str> {
		None
	}
}

impl Record for serde_json::Map<String, serde_json::Value> {
	fn field(&self, name: &str) -> Option<Content> {
		self.get(name).map(Content::from)
	}

	fn kind(&self) -> Option<&str> {
		self.get("type").and_then(serde_json::Value::as_str)
	}
}

impl Record for serde_json::Value {
	fn field(&self, name: &str) -> Option<Content> {
		self.as_object().and_then(|object| object.field(name))
	}

	fn kind(&self) -> Option<&str> {
		self.as_object().and_then(|object| object.kind())
	}
}

impl<V, S> Record for HashMap<String, V, S>
where
	V: Into<Content> + Clone,
	S: BuildHasher,
{
	fn field(&self, name: &str) -> Option<Content> {
		self.get(name).cloned().map(Into::into)
	}
}

impl<V> Record for BTreeMap<String, V>
where
	V: Into<Content> + Clone,
{
	fn field(&self, name: &str) -> Option<Content> {
		self.get(name).cloned().map(Into::into)
	}
}

impl<R: Record + ?Sized> Record for &R {
	fn field(&self, name: &str) -> Option<Content> {
		(**self).field(name)
	}

	fn kind(&self) -> Option<&str> {
		(**self).kind()
	}
}
