use super::*;
use crate::error::QueryError;
use crate::types::{NullOrder, OrderType};
use crate::value::Value;
use rstest::rstest;

fn col(name: &str) -> ParsedExpression {
	ParsedExpression::column(name)
}

#[rstest]
fn test_new_uses_default_frame() {
	let window = WindowExpression::new("sum", vec![col("x")]);
	assert_eq!(window.start_kind(), BoundaryKind::UnboundedPreceding);
	assert_eq!(window.end_kind(), BoundaryKind::CurrentRowRange);
	assert_eq!(window.to_string(), "sum(x) OVER ()");
}

#[rstest]
fn test_builder_matches_new() {
	let built = WindowExpression::builder("sum")
		.arg(col("x"))
		.default_frame()
		.build()
		.unwrap();
	assert_eq!(built, WindowExpression::new("sum", vec![col("x")]));
}

#[rstest]
fn test_builder_unset_boundary_is_internal_error() {
	let err = WindowExpression::builder("sum")
		.arg(col("x"))
		.start(BoundaryKind::UnboundedPreceding)
		.build()
		.unwrap_err();
	assert!(matches!(err, QueryError::Internal(_)));
}

#[rstest]
fn test_builder_missing_offset_expr() {
	let err = WindowExpression::builder("sum")
		.arg(col("x"))
		.start(BoundaryKind::ExprPrecedingRows)
		.end(BoundaryKind::CurrentRowRows)
		.build()
		.unwrap_err();
	assert!(matches!(err, QueryError::InvalidWindow(_)));
}

#[rstest]
fn test_builder_offset_frame() {
	let window = WindowExpression::builder("avg")
		.arg(col("price"))
		.start(BoundaryKind::ExprPrecedingRange)
		.start_expr(ParsedExpression::value(7))
		.end(BoundaryKind::ExprFollowingRange)
		.end_expr(ParsedExpression::value(7))
		.order_by(OrderByNode::new(col("day")))
		.build()
		.unwrap();
	assert_eq!(
		window.start,
		WindowBoundary::preceding(FrameUnit::Range, ParsedExpression::value(7))
	);
	assert_eq!(
		window.to_string(),
		"avg(price) OVER (ORDER BY day RANGE BETWEEN 7 PRECEDING AND 7 FOLLOWING)"
	);
}

#[rstest]
fn test_full_clause_rendering() {
	let window = WindowExpression::builder("string_agg")
		.schema("main")
		.arg(col("name"))
		.arg(ParsedExpression::value(", "))
		.distinct(true)
		.arg_order_by(OrderByNode::new(col("name")).order(OrderType::Descending))
		.ignore_nulls(true)
		.filter(ParsedExpression::binary(
			col("age"),
			crate::types::BinOper::GreaterThan,
			ParsedExpression::value(18),
		))
		.partition_by(col("dept"))
		.order_by(
			OrderByNode::new(col("hired"))
				.order(OrderType::Ascending)
				.nulls(NullOrder::NullsFirst),
		)
		.start(BoundaryKind::CurrentRowRows)
		.end(BoundaryKind::UnboundedFollowing)
		.exclude(ExcludeMode::CurrentRow)
		.build()
		.unwrap();

	assert_eq!(
		window.to_string(),
		"main.string_agg(DISTINCT name, ', ' ORDER BY name DESC IGNORE NULLS) \
		 FILTER (WHERE (age > 18)) OVER (PARTITION BY dept ORDER BY hired ASC NULLS FIRST \
		 ROWS BETWEEN CURRENT ROW AND UNBOUNDED FOLLOWING EXCLUDE CURRENT ROW)"
	);
}

#[rstest]
fn test_offset_without_default() {
	let window = WindowExpression::builder("lag")
		.arg(col("x"))
		.offset(ParsedExpression::value(1))
		.default_frame()
		.build()
		.unwrap();
	assert_eq!(window.to_string(), "lag(x, 1) OVER ()");
}

#[rstest]
fn test_default_without_offset() {
	let mut window = WindowExpression::new("lag", vec![col("x")]);
	window.default_expr = Some(ParsedExpression::Constant(Value::BigInt(None)));
	assert_eq!(window.to_string(), "lag(x, NULL) OVER ()");
}

#[rstest]
#[case::empty_name(WindowExpression::new("", vec![col("x")]))]
#[case::distinct_without_args({
	let mut w = WindowExpression::new("count", vec![]);
	w.distinct = true;
	w
})]
#[case::unbounded_following_start({
	let mut w = WindowExpression::new("sum", vec![col("x")]);
	w.start = WindowBoundary::unbounded_following();
	w.end = WindowBoundary::unbounded_following();
	w
})]
fn test_validate_rejects(#[case] window: WindowExpression) {
	assert!(matches!(
		window.validate(),
		Err(QueryError::InvalidWindow(_))
	));
}

#[rstest]
fn test_nested_window_in_expression() {
	let inner = WindowExpression::new("row_number", vec![]);
	let expr = ParsedExpression::binary(
		ParsedExpression::window(inner),
		crate::types::BinOper::Sub,
		ParsedExpression::value(1),
	);
	assert_eq!(expr.to_string(), "(row_number() OVER () - 1)");
}

#[rstest]
fn test_clone_is_independent() {
	let original = WindowExpression::builder("sum")
		.arg(col("x"))
		.partition_by(col("p"))
		.start(BoundaryKind::ExprPrecedingRows)
		.start_expr(ParsedExpression::value(3))
		.end(BoundaryKind::CurrentRowRows)
		.build()
		.unwrap();

	let mut copy = original.clone();
	assert_eq!(copy, original);

	copy.partitions[0] = col("q");
	if let Some(expr) = copy.start.expr_mut() {
		*expr = ParsedExpression::value(4);
	}
	assert_ne!(copy, original);
	assert_eq!(
		original.to_string(),
		"sum(x) OVER (PARTITION BY p ROWS BETWEEN 3 PRECEDING AND CURRENT ROW)"
	);
}

#[rstest]
fn test_equality_is_order_sensitive() {
	let a = WindowExpression::new("f", vec![col("a"), col("b")]);
	let b = WindowExpression::new("f", vec![col("b"), col("a")]);
	assert_ne!(a, b);
}

fn unbounded_following_start() -> WindowExpression {
	let mut w = WindowExpression::new("sum", vec![col("x")]);
	w.start = WindowBoundary::unbounded_following();
	w.end = WindowBoundary::unbounded_following();
	w
}

#[rstest]
#[case::argument({
	WindowExpression::new("max", vec![ParsedExpression::window(unbounded_following_start())])
})]
#[case::inside_function({
	let nested = ParsedExpression::function("abs", vec![ParsedExpression::window(unbounded_following_start())]);
	WindowExpression::new("max", vec![nested])
})]
#[case::partition({
	let mut w = WindowExpression::new("rank", vec![]);
	w.partitions.push(ParsedExpression::binary(
		col("p"),
		crate::types::BinOper::Add,
		ParsedExpression::window(unbounded_following_start()),
	));
	w
})]
#[case::sort_key({
	let mut w = WindowExpression::new("rank", vec![]);
	w.orders.push(OrderByNode::new(ParsedExpression::window(unbounded_following_start())));
	w
})]
#[case::filter({
	let mut w = WindowExpression::new("count", vec![col("x")]);
	w.filter_expr = Some(ParsedExpression::window(WindowExpression::new("", vec![])));
	w
})]
#[case::frame_offset({
	let mut w = WindowExpression::new("sum", vec![col("x")]);
	w.start = WindowBoundary::preceding(
		FrameUnit::Rows,
		ParsedExpression::window(unbounded_following_start()),
	);
	w
})]
#[case::lead_default({
	let mut w = WindowExpression::new("lead", vec![col("x")]);
	w.default_expr = Some(ParsedExpression::window(unbounded_following_start()));
	w
})]
fn test_validate_rejects_nested(#[case] window: WindowExpression) {
	assert!(matches!(
		window.validate(),
		Err(QueryError::InvalidWindow(_))
	));
}

#[rstest]
fn test_expressions_cover_every_clause() {
	let window = WindowExpression::builder("lead")
		.arg(col("a"))
		.partition_by(col("b"))
		.order_by(OrderByNode::new(col("c")))
		.arg_order_by(OrderByNode::new(col("d")))
		.filter(col("e"))
		.start(BoundaryKind::ExprPrecedingRows)
		.start_expr(col("f"))
		.end(BoundaryKind::ExprFollowingRows)
		.end_expr(col("g"))
		.offset(col("h"))
		.default_value(col("i"))
		.build()
		.unwrap();

	let names: Vec<String> = window.expressions().map(ToString::to_string).collect();
	assert_eq!(names, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
}
