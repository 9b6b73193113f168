//! Sort link targets built from the current request

use colonnade_tables::{SortDirection, SortLinks, TableSettings};

use crate::error::Result;

/// Builds sort URLs that keep the other parameters of the current request
///
/// # Example
///
/// ```
/// use colonnade_tables::{SortDirection, SortLinks};
/// use colonnade_web::QueryUrlBuilder;
///
/// let links = QueryUrlBuilder::from_query("/books", "q=dune&sort_column=title&page=2").unwrap();
///
/// assert_eq!(
///     links.sort_url("price", SortDirection::Ascending),
///     "/books?q=dune&page=2&sort_column=price&sort_direction=asc"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlBuilder {
	path: String,
	params: Vec<(String, String)>,
	settings: TableSettings,
}

impl QueryUrlBuilder {
	/// Creates a builder for `path` with no extra parameters
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			params: Vec::new(),
			settings: TableSettings::default(),
		}
	}

	/// Creates a builder keeping the parameters of `query`
	pub fn from_query(path: impl Into<String>, query: &str) -> Result<Self> {
		let params = serde_urlencoded::from_str(query.trim_start_matches('?'))?;
		Ok(Self {
			params,
			..Self::new(path)
		})
	}

	/// Uses the parameter names of `settings`
	pub fn with_settings(mut self, settings: TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Adds a parameter kept in every link
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.push((key.into(), value.into()));
		self
	}

	/// Returns the path links point to
	pub fn path(&self) -> &str {
		&self.path
	}

	fn is_sort_param(&self, key: &str) -> bool {
		key == self.settings.sort_column_param
			|| key == self.settings.sort_direction_param
			|| self.settings.ordering_param.as_deref() == Some(key)
	}
}

impl SortLinks for QueryUrlBuilder {
	fn sort_url(&self, column: &str, direction: SortDirection) -> String {
		let mut params: Vec<(String, String)> = self
			.params
			.iter()
			.filter(|(key, _)| !self.is_sort_param(key))
			.cloned()
			.collect();
		params.extend(self.settings.sort_params(column, direction));

		match serde_urlencoded::to_string(&params) {
			Ok(query) => format!("{}?{}", self.path, query),
			Err(e) => {
				tracing::debug!(error = %e, "failed to encode sort link");
				self.path.clone()
			}
		}
	}
}
