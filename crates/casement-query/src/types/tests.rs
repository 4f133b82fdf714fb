//! Integration tests for types module.

use super::*;
use rstest::rstest;

#[rstest]
fn test_boundary_with_sort_keys() {
	// Offset boundaries carry the same expression type as the sort keys
	let order = OrderByNode::new("day").order(OrderType::Descending);
	let start = WindowBoundary::preceding(FrameUnit::Range, "interval '7 days'");

	assert_eq!(order.to_string(), "day DESC");
	assert_eq!(start.expr(), Some(&"interval '7 days'"));
	assert_eq!(start.kind(), BoundaryKind::ExprPrecedingRange);
}

#[rstest]
fn test_default_frame_only_for_exact_pair() {
	let pairs: Vec<(WindowBoundary<&str>, WindowBoundary<&str>)> = BoundaryKind::ALL
		.into_iter()
		.filter(|kind| *kind != BoundaryKind::Invalid)
		.flat_map(|start| {
			BoundaryKind::ALL
				.into_iter()
				.filter(|kind| *kind != BoundaryKind::Invalid)
				.map(move |end| {
					let expr = |kind: BoundaryKind| kind.requires_expr().then_some("1");
					(
						WindowBoundary::from_kind(start, expr(start)).unwrap(),
						WindowBoundary::from_kind(end, expr(end)).unwrap(),
					)
				})
		})
		.collect();
	assert_eq!(pairs.len(), 64);

	let defaults: Vec<_> = pairs
		.iter()
		.filter(|(start, end)| is_default_frame(start, end))
		.map(|(start, end)| (start.kind(), end.kind()))
		.collect();
	assert_eq!(
		defaults,
		vec![(BoundaryKind::UnboundedPreceding, BoundaryKind::CurrentRowRange)]
	);
}

#[rstest]
fn test_function_types_partition() {
	let catalog = FunctionCatalog::new();
	for name in ["lead", "lag"] {
		let function_type = catalog.classify(name).unwrap();
		assert!(function_type.accepts_offset());
		assert!(!function_type.is_ranking());
		assert!(!function_type.is_aggregate());
	}
	assert_eq!(BinOper::Concat.as_str(), "||");
}
