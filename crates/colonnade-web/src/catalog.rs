//! Message catalog for header labels and hints

use std::collections::HashMap;

use colonnade_tables::Translate;
use serde_json::Value;

use crate::error::{Result, WebError};

/// Translations for a single locale
///
/// Keys are dotted paths such as `tables.headers.books.title`. Catalogs
/// loaded from JSON may nest objects; nested keys are joined with dots.
///
/// # Example
/// ```
/// use colonnade_tables::Translate;
/// use colonnade_web::MessageCatalog;
///
/// let catalog = MessageCatalog::from_json_str("de", r#"{
///     "tables": {
///         "headers": { "books": { "title": "Titel" } },
///         "hints": { "books": { "price": "Inklusive MwSt." } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(catalog.locale(), "de");
/// assert_eq!(catalog.translate("tables.headers.books.title", "Title"), "Titel");
/// assert_eq!(catalog.translate("tables.headers.books.isbn", "Isbn"), "Isbn");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Load a catalog from a JSON object
	pub fn from_json_str(locale: &str, json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		let mut catalog = Self::new(locale);
		catalog.merge_value("", &value)?;
		tracing::debug!(locale, messages = catalog.len(), "loaded message catalog");
		Ok(catalog)
	}

	fn merge_value(&mut self, prefix: &str, value: &Value) -> Result<()> {
		match value {
			Value::Object(entries) => {
				for (key, value) in entries {
					let path = if prefix.is_empty() {
						key.clone()
					} else {
						format!("{prefix}.{key}")
					};
					self.merge_value(&path, value)?;
				}
				Ok(())
			}
			Value::String(message) if !prefix.is_empty() => {
				self.add(prefix, message.as_str());
				Ok(())
			}
			_ => Err(WebError::CatalogEntry(prefix.to_string())),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation
	pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
		self.messages.insert(key.into(), message.into());
	}

	/// Get the translation for a key
	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Number of translations
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog holds no translations
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl Translate for MessageCatalog {
	fn translate(&self, key: &str, default: &str) -> String {
		self.get(key).unwrap_or(default).to_string()
	}
}
