//! Error types for the web adapters

/// Errors raised while loading adapter data
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum WebError {
	/// A message catalog could not be parsed
	#[error("invalid message catalog: {0}")]
	Catalog(#[from] serde_json::Error),

	/// A catalog entry is neither a string nor a nested object
	#[error("catalog entry `{0}` must be a string or an object")]
	CatalogEntry(String),

	/// A query string could not be parsed
	#[error("invalid query string: {0}")]
	Query(#[from] serde_urlencoded::de::Error),
}

/// Result alias for the web adapters
pub type Result<T> = std::result::Result<T, WebError>;
