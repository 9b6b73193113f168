//! Text helpers for header labels

/// Turns a column name into a human readable label
///
/// A trailing `_id` is dropped, underscores become spaces, the first
/// character is capitalised and the rest is lowercased.
///
/// # Examples
///
/// ```
/// use colonnade_tables::text::humanize;
///
/// assert_eq!(humanize("published_at"), "Published at");
/// assert_eq!(humanize("author_id"), "Author");
/// assert_eq!(humanize("ISBN"), "Isbn");
/// ```
pub fn humanize(name: &str) -> String {
	let stem = match name.strip_suffix("_id") {
		Some(stem) if !stem.is_empty() => stem,
		_ => name,
	};
	let spaced = stem.replace('_', " ");
	let mut chars = spaced.trim().chars();

	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}
