//! Resolution of cell values, headers and hints
//!
//! Data precedence: a named helper, then the column's own callable, then the
//! item field named like the column, then the host fallback provider. When
//! none of them yields a value the cell is empty; missing data is never an
//! error.

use crate::column::{Column, DataSource, HeaderSource, Label};
use crate::content::Content;
use crate::error::CellError;
use crate::host::{FallbackData, Translate};
use crate::record::Record;
use crate::schema::{Helper, Schema};
use crate::settings::TableSettings;

/// Resolves the value of `column` for `item`
pub fn resolve_data<T: Record>(
	schema: &Schema<T>,
	column: &Column<T>,
	item: &T,
	fallback: Option<&dyn FallbackData<T>>,
) -> Result<Content, CellError> {
	match column.data() {
		DataSource::Helper(name) => match schema.helper(name) {
			Some(Helper::Data(f)) => f.call(column, item),
			Some(Helper::Header(_)) => Err(CellError::new(format!(
				"helper `{name}` produces headers, not cell data"
			))),
			None => Err(CellError::new(format!("undefined helper `{name}`"))),
		},
		DataSource::Fn(f) => f.call(column, item),
		DataSource::Default => Ok(item
			.field(column.name())
			.or_else(|| fallback.and_then(|provider| provider.lookup(column, item)))
			.unwrap_or_default()),
	}
}

/// Resolves the header content of `column`
///
/// Returns `None` when the header is suppressed, either through a hidden
/// header or a hidden label. The header cell itself is still rendered.
pub fn resolve_header<T>(
	schema: &Schema<T>,
	column: &Column<T>,
	translator: Option<&dyn Translate>,
	settings: &TableSettings,
) -> Result<Option<Content>, CellError> {
	match column.header() {
		HeaderSource::Text(text) => Ok(Some(Content::text(text))),
		HeaderSource::Hidden => Ok(None),
		HeaderSource::Helper(name) => match schema.helper(name) {
			Some(Helper::Header(f)) => f.call(column).map(Some),
			Some(Helper::Data(_)) => Err(CellError::new(format!(
				"helper `{name}` produces cell data, not headers"
			))),
			None => Err(CellError::new(format!("undefined helper `{name}`"))),
		},
		HeaderSource::Render(f) => f.call(column).map(Some),
		HeaderSource::Default => {
			let Some(label) = column.label_text() else {
				return Ok(None);
			};
			let label = match (column.label(), translator) {
				(Label::Default, Some(translator)) => {
					translator.translate(&settings.header_key(schema.name(), column.name()), &label)
				}
				_ => label,
			};
			Ok(Some(Content::Text(label)))
		}
	}
}

/// Looks up the hint shown as the header cell title
///
/// Hints only exist when the host localizes; blank translations count as
/// no hint.
pub fn resolve_hint<T>(
	schema: &Schema<T>,
	column: &Column<T>,
	translator: Option<&dyn Translate>,
	settings: &TableSettings,
) -> Option<String> {
	let translator = translator?;
	let hint = translator.translate(&settings.hint_key(schema.name(), column.name()), "");
	let hint = hint.trim();
	(!hint.is_empty()).then(|| hint.to_string())
}
