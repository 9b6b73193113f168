//! Sort resolution and sort link tests

mod fixtures;

use std::collections::HashMap;

use colonnade_tables::{
	ColumnConfig, Host, Schema, SortDirection, SortRequest, SortState, TableSettings, TagKind,
};
use fixtures::{Node, Product, RecordingSink, product_schema, products};
use rstest::*;

fn link_href<'n>(node: &'n Node, column: &str) -> Option<&'n str> {
	node.header_cells()
		.into_iter()
		.find(|cell| {
			cell.attr("class")
				.is_some_and(|class| class.split(' ').next() == Some(column))
		})
		.and_then(|cell| cell.find_all(&TagKind::Link).into_iter().next())
		.and_then(|link| link.attr("href"))
}

#[rstest]
fn test_default_sort_applies_without_request(product_schema: Schema<Product>) {
	let state = SortState::resolve(&product_schema, &SortRequest::new());

	assert_eq!(state.column(), Some("title"));
	assert_eq!(state.direction(), SortDirection::Ascending);
	assert_eq!(state.sort_key(), Some("title"));
}

#[rstest]
#[case(SortRequest::new().column("price"), Some("price"), SortDirection::Ascending)]
#[case(SortRequest::new().column("price").direction("desc"), Some("price"), SortDirection::Descending)]
#[case(SortRequest::new().column("price").direction("sideways"), Some("price"), SortDirection::Ascending)]
#[case(SortRequest::new().column("id"), Some("title"), SortDirection::Ascending)]
#[case(SortRequest::new().column("missing").direction("desc"), Some("title"), SortDirection::Descending)]
fn test_resolve(
	product_schema: Schema<Product>,
	#[case] request: SortRequest,
	#[case] column: Option<&str>,
	#[case] direction: SortDirection,
) {
	let state = SortState::resolve(&product_schema, &request);

	assert_eq!(state.column(), column);
	assert_eq!(state.direction(), direction);
}

#[rstest]
fn test_requested_column_uses_its_own_default_direction() {
	let schema = Schema::<Product>::builder("products")
		.column("title", ColumnConfig::new().sortable(true))
		.column(
			"price",
			ColumnConfig::new()
				.sortable(true)
				.default_sort_direction(SortDirection::Ascending),
		)
		.build()
		.unwrap();

	let title = SortState::resolve(&schema, &SortRequest::new().column("title"));
	assert_eq!(title.direction(), SortDirection::Descending);

	let price = SortState::resolve(&schema, &SortRequest::new().column("price"));
	assert_eq!(price.direction(), SortDirection::Ascending);
}

#[rstest]
fn test_no_sort_without_default() {
	let schema = Schema::<Product>::builder("products")
		.column("title", ColumnConfig::new())
		.build()
		.unwrap();

	let state = SortState::resolve(&schema, &SortRequest::new().column("title"));
	assert_eq!(state.column(), None);
	assert_eq!(state.sort_key(), None);
	assert!(!state.is_active("title"));
}

#[rstest]
fn test_offered_directions(product_schema: Schema<Product>) {
	let state = SortState::resolve(&product_schema, &SortRequest::new());

	let title = product_schema.column("title").unwrap();
	let price = product_schema.column("price").unwrap();
	let id = product_schema.column("id").unwrap();

	assert_eq!(state.offered_direction(title), Some(SortDirection::Descending));
	assert_eq!(state.offered_direction(price), Some(SortDirection::Ascending));
	assert_eq!(state.offered_direction(id), None);
}

#[rstest]
fn test_sort_key_is_reported_for_active_column() {
	let schema = Schema::<Product>::builder("products")
		.column("author", ColumnConfig::new().sort_key("authors.last_name"))
		.sortable_on(["author"])
		.build()
		.unwrap();

	let state = SortState::resolve(&schema, &SortRequest::new().column("author"));
	assert_eq!(state.column(), Some("author"));
	assert_eq!(state.sort_key(), Some("authors.last_name"));
}

#[rstest]
fn test_clicking_active_header_twice_restores_direction(
	product_schema: Schema<Product>,
	products: Vec<Product>,
) {
	let settings = TableSettings::default();
	let sink = RecordingSink::default();
	let host = Host::new(&sink);
	let mut request = SortRequest::new().column("title").direction("asc");
	let mut seen = Vec::new();

	for _ in 0..2 {
		let rendered = product_schema
			.render(&products, 300, &request, &host)
			.unwrap();
		let href = link_href(&rendered.node, "title").unwrap().to_string();
		request = SortRequest::from_query(&href, &settings);
		seen.push(request.direction.clone());
	}

	assert_eq!(
		seen,
		vec![Some("desc".to_string()), Some("asc".to_string())]
	);
}

#[rstest]
fn test_active_link_is_marked(product_schema: Schema<Product>, products: Vec<Product>) {
	let sink = RecordingSink::default();
	let rendered = product_schema
		.render(
			&products,
			300,
			&SortRequest::new().column("price").direction("desc"),
			&Host::new(&sink),
		)
		.unwrap();

	let links = rendered.node.find_all(&TagKind::Link);
	assert_eq!(links.len(), 2);
	assert_eq!(links[0].attr("class"), None);
	assert_eq!(links[1].attr("class"), Some("sorted desc"));
	assert_eq!(
		links[1].attr("href"),
		Some("?sort_column=price&sort_direction=asc")
	);
}

#[rstest]
fn test_custom_link_builder(product_schema: Schema<Product>, products: Vec<Product>) {
	let sink = RecordingSink::default();
	let links = |column: &str, direction: SortDirection| format!("/products/by/{column}/{direction}");
	let host = Host::new(&sink).with_links(&links);

	let rendered = product_schema
		.render(&products, 300, &SortRequest::new(), &host)
		.unwrap();

	assert_eq!(link_href(&rendered.node, "title"), Some("/products/by/title/desc"));
	assert_eq!(link_href(&rendered.node, "price"), Some("/products/by/price/asc"));
}

#[rstest]
fn test_ordering_parameter_round_trip(product_schema: Schema<Product>, products: Vec<Product>) {
	let settings = TableSettings {
		ordering_param: Some("ordering".to_string()),
		..TableSettings::default()
	};
	let sink = RecordingSink::default();
	let host = Host::new(&sink).with_settings(&settings);

	let rendered = product_schema
		.render(&products, 300, &SortRequest::new(), &host)
		.unwrap();
	let href = link_href(&rendered.node, "title").unwrap();
	assert_eq!(href, "?ordering=-title");

	let request = SortRequest::from_query(href, &settings);
	let state = SortState::resolve(&product_schema, &request);
	assert_eq!(state.column(), Some("title"));
	assert_eq!(state.direction(), SortDirection::Descending);
}

#[rstest]
fn test_request_from_map() {
	let settings = TableSettings::default();
	let params: HashMap<String, String> = [
		("sort_column".to_string(), "price".to_string()),
		("sort_direction".to_string(), "DESC".to_string()),
		("page".to_string(), "2".to_string()),
	]
	.into_iter()
	.collect();

	let request = SortRequest::from_params(&params, &settings);
	assert_eq!(request.column.as_deref(), Some("price"));
	assert_eq!(request.direction.as_deref(), Some("DESC"));
}
