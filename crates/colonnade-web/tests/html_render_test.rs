//! End-to-end HTML rendering tests

use colonnade_tables::{
	Column, ColumnConfig, Content, DataFn, Fragment, Host, Schema, SortDirection, SortRequest,
	TableSettings,
};
use colonnade_web::{HtmlSink, MessageCatalog, QueryUrlBuilder};
use rstest::*;
use serde_json::{Value, json};

#[fixture]
fn books_schema() -> Schema<Value> {
	Schema::builder("books")
		.fixed("isbn", ColumnConfig::new().width(120).label("ISBN"))
		.flexible("title", ColumnConfig::new().width(200))
		.flexible(
			"price",
			ColumnConfig::new()
				.width(80)
				.default_sort_direction(SortDirection::Ascending)
				.data(DataFn::item(|book: &Value| {
					book["price"].as_f64().map(|price| format!("${price:.2}"))
				})),
		)
		.sortable_on(["title", "price"])
		.default_sort("title", SortDirection::Ascending)
		.build()
		.unwrap()
}

#[fixture]
fn books() -> Vec<Value> {
	vec![
		json!({ "type": "novel", "isbn": "978-0141439518", "title": "Pride & Prejudice", "price": 7.5 }),
		json!({ "type": "novel", "isbn": "978-0141439587", "title": "Emma" }),
	]
}

#[rstest]
fn test_full_table(books_schema: Schema<Value>, books: Vec<Value>) {
	let sink = HtmlSink::new();
	let links = QueryUrlBuilder::from_query("/books", "q=austen&sort_column=title").unwrap();
	let host = Host::new(&sink).with_links(&links);

	let html = books_schema
		.render(&books, 500, &SortRequest::new(), &host)
		.unwrap()
		.into_node()
		.to_html();

	let expected = concat!(
		r#"<table class="table" style="width:500px;">"#,
		"<thead><tr>",
		r#"<th class="isbn" style="width:120px;"><span>ISBN</span></th>"#,
		r#"<th class="title sortable" style="width:250px;">"#,
		r#"<a class="sorted asc" href="/books?q=austen&amp;sort_column=title&amp;sort_direction=desc">Title</a></th>"#,
		r#"<th class="price sortable" style="width:130px;">"#,
		r#"<a href="/books?q=austen&amp;sort_column=price&amp;sort_direction=asc">Price</a></th>"#,
		"</tr></thead>",
		"<tbody>",
		r#"<tr class="tr novel odd">"#,
		r#"<td class="isbn" style="width:120px;">978-0141439518</td>"#,
		r#"<td class="title" style="width:250px;">Pride &amp; Prejudice</td>"#,
		r#"<td class="price" style="width:130px;">$7.50</td>"#,
		"</tr>",
		r#"<tr class="tr novel even">"#,
		r#"<td class="isbn" style="width:120px;">978-0141439587</td>"#,
		r#"<td class="title" style="width:250px;">Emma</td>"#,
		r#"<td class="price" style="width:130px;"></td>"#,
		"</tr>",
		"</tbody></table>",
	);
	assert_eq!(html, expected);
}

#[rstest]
fn test_div_layout(books_schema: Schema<Value>, books: Vec<Value>) {
	let sink = HtmlSink::divs();
	let host = Host::new(&sink);

	let html = books_schema
		.context(400, &SortRequest::new())
		.only(["title"])
		.unwrap()
		.render(&books[..1], &host)
		.unwrap()
		.into_node()
		.to_html();

	assert_eq!(
		html,
		concat!(
			r#"<div class="table" style="width:400px;">"#,
			r#"<div class="thead"><div>"#,
			r#"<div class="th title sortable" style="width:200px;">"#,
			r#"<a class="sorted asc" href="?sort_column=title&amp;sort_direction=desc">Title</a></div>"#,
			"</div></div>",
			r#"<div class="tbody"><div class="tr novel odd">"#,
			r#"<div class="td title" style="width:200px;">Pride &amp; Prejudice</div>"#,
			"</div></div></div>",
		)
	);
}

#[rstest]
fn test_localized_headers_and_hints(books_schema: Schema<Value>, books: Vec<Value>) {
	let catalog = MessageCatalog::from_json_str(
		"de",
		r#"{
			"tables": {
				"headers": { "books": { "title": "Titel", "price": "Preis" } },
				"hints": { "books": { "price": "Inklusive \"MwSt.\"" } }
			}
		}"#,
	)
	.unwrap();
	let sink = HtmlSink::new();
	let host = Host::new(&sink).with_translator(&catalog);

	let html = books_schema
		.render(&books, 500, &SortRequest::new(), &host)
		.unwrap()
		.into_node()
		.to_html();

	assert!(html.contains("<span>ISBN</span>"));
	assert!(html.contains(">Titel</a>"));
	assert!(html.contains(r#"<th class="price sortable" style="width:130px;" title="Inklusive &quot;MwSt.&quot;">"#));
}

#[rstest]
fn test_custom_settings_flow_into_markup(books_schema: Schema<Value>, books: Vec<Value>) {
	let settings = TableSettings::from_json_str(
		r#"{
			"table_class": "grid",
			"row_class": "",
			"odd_class": "stripe",
			"even_class": "",
			"sorted_class": "active",
			"width_unit": "em",
			"ordering_param": "ordering"
		}"#,
	)
	.unwrap();
	let sink = HtmlSink::new();
	let links = QueryUrlBuilder::new("/books").with_settings(settings.clone());
	let host = Host::new(&sink).with_links(&links).with_settings(&settings);
	let request = SortRequest::from_query("ordering=-price", &settings);

	let html = books_schema
		.render(&books, 500, &request, &host)
		.unwrap()
		.into_node()
		.to_html();

	assert!(html.starts_with(r#"<table class="grid" style="width:500em;">"#));
	assert!(html.contains(r#"<a class="active desc" href="/books?ordering=price">Price</a>"#));
	assert!(html.contains(r#"<tr class="novel stripe">"#));
	assert!(html.contains(r#"<tr class="novel">"#));
}

#[rstest]
fn test_fragments_are_escaped() {
	let schema = Schema::<Value>::builder("links")
		.column(
			"url",
			ColumnConfig::new().data(DataFn::column_item(|column: &Column<Value>, item: &Value| {
				match item[column.name()].as_str() {
					Some(url) => Content::from(
						Fragment::element("a")
							.attr("href", url)
							.child(Fragment::text("<visit>")),
					),
					None => Content::Empty,
				}
			})),
		)
		.build()
		.unwrap();
	let items = vec![json!({ "url": "/search?q=a&b=\"c\"" })];
	let sink = HtmlSink::new();

	let html = schema
		.render(&items, 0, &SortRequest::new(), &Host::new(&sink))
		.unwrap()
		.into_node()
		.to_html();

	assert!(html.contains(
		r#"<td class="url"><a href="/search?q=a&amp;b=&quot;c&quot;">&lt;visit&gt;</a></td>"#
	));
}
