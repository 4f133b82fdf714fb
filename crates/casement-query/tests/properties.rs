//! Window expression property-based tests
//!
//! Property tests for copy independence, binary round-trips and rendering
//! over generated window expressions.

use casement_query::prelude::*;
use proptest::prelude::*;
use rstest::*;

// ============================================================================
// Strategies
// ============================================================================

fn identifier() -> impl Strategy<Value = String> {
	"[a-z_][a-z0-9_]{0,7}"
}

fn leaf() -> impl Strategy<Value = ParsedExpression> {
	prop_oneof![
		identifier().prop_map(ParsedExpression::column),
		(identifier(), identifier())
			.prop_map(|(table, name)| ParsedExpression::qualified_column(table, name)),
		any::<i64>().prop_map(ParsedExpression::value),
		any::<bool>().prop_map(ParsedExpression::value),
		(-1.0e6f64..1.0e6).prop_map(ParsedExpression::value),
		"[a-zA-Z ']{0,8}".prop_map(ParsedExpression::value),
		Just(ParsedExpression::Constant(Value::BigInt(None))),
		Just(ParsedExpression::star()),
	]
}

fn bin_oper() -> impl Strategy<Value = BinOper> {
	prop_oneof![
		Just(BinOper::And),
		Just(BinOper::Equal),
		Just(BinOper::SmallerThan),
		Just(BinOper::Add),
		Just(BinOper::Mul),
		Just(BinOper::Concat),
	]
}

fn expression() -> impl Strategy<Value = ParsedExpression> {
	leaf().prop_recursive(3, 16, 3, |inner| {
		prop_oneof![
			(inner.clone(), bin_oper(), inner.clone())
				.prop_map(|(left, op, right)| ParsedExpression::binary(left, op, right)),
			(identifier(), prop::collection::vec(inner.clone(), 0..3))
				.prop_map(|(name, args)| ParsedExpression::function(name, args)),
			(
				identifier(),
				prop::collection::vec(inner.clone(), 0..2),
				prop::collection::vec(inner, 0..2),
			)
				.prop_map(|(name, args, partitions)| {
					let mut window = WindowExpression::new(name, args);
					window.partitions = partitions;
					ParsedExpression::window(window)
				}),
		]
	})
}

fn order_node() -> impl Strategy<Value = OrderByNode<ParsedExpression>> {
	let order = prop_oneof![
		Just(OrderType::Default),
		Just(OrderType::Ascending),
		Just(OrderType::Descending),
	];
	let nulls = prop_oneof![
		Just(NullOrder::Default),
		Just(NullOrder::NullsFirst),
		Just(NullOrder::NullsLast),
	];
	(expression(), order, nulls)
		.prop_map(|(expr, order, nulls)| OrderByNode::new(expr).order(order).nulls(nulls))
}

fn unit() -> impl Strategy<Value = FrameUnit> {
	prop_oneof![Just(FrameUnit::Rows), Just(FrameUnit::Range)]
}

fn frame_end() -> impl Strategy<Value = WindowBoundary<ParsedExpression>> {
	prop_oneof![
		Just(WindowBoundary::unbounded_preceding()),
		Just(WindowBoundary::unbounded_following()),
		unit().prop_map(WindowBoundary::current_row),
		(unit(), expression()).prop_map(|(unit, expr)| WindowBoundary::preceding(unit, expr)),
		(unit(), expression()).prop_map(|(unit, expr)| WindowBoundary::following(unit, expr)),
	]
}

fn frame_start() -> impl Strategy<Value = WindowBoundary<ParsedExpression>> {
	frame_end().prop_filter("frame cannot start at UNBOUNDED FOLLOWING", |boundary| {
		*boundary != WindowBoundary::unbounded_following()
	})
}

fn exclude() -> impl Strategy<Value = ExcludeMode> {
	prop_oneof![
		Just(ExcludeMode::NoOther),
		Just(ExcludeMode::CurrentRow),
		Just(ExcludeMode::Group),
		Just(ExcludeMode::Ties),
	]
}

prop_compose! {
	fn window()(
		schema in prop_oneof![Just(String::new()), identifier()],
		function_name in identifier(),
		children in prop::collection::vec(expression(), 0..4),
		partitions in prop::collection::vec(expression(), 0..3),
		orders in prop::collection::vec(order_node(), 0..3),
		arg_orders in prop::collection::vec(order_node(), 0..2),
		optional in (
			prop::option::of(expression()),
			prop::option::of(expression()),
			prop::option::of(expression()),
		),
		flags in any::<(bool, bool)>(),
		start in frame_start(),
		end in frame_end(),
		exclude in exclude(),
	) -> WindowExpression {
		let (ignore_nulls, distinct) = flags;
		let (filter_expr, offset_expr, default_expr) = optional;
		WindowExpression {
			catalog: String::new(),
			schema,
			function_name,
			distinct: distinct && !children.is_empty(),
			children,
			partitions,
			orders,
			filter_expr,
			ignore_nulls,
			start,
			end,
			exclude,
			offset_expr,
			default_expr,
			arg_orders,
		}
	}
}

// ============================================================================
// Property-Based Tests: WindowExpression
// ============================================================================

proptest! {
	/// Test: generated expressions are valid
	///
	/// Category: Property
	#[rstest]
	fn prop_generated_windows_validate(window in window()) {
		prop_assert!(window.validate().is_ok());
	}

	/// Test: MessagePack round-trip
	///
	/// Category: Property
	/// Verifies that decode(encode(w)) is structurally equal to w.
	#[rstest]
	fn prop_encode_decode_roundtrip(window in window()) {
		let bytes = encode(&window).unwrap();
		let decoded = decode(&bytes).unwrap();
		prop_assert_eq!(decoded, window);
	}

	/// Test: clones are independent
	///
	/// Category: Property
	/// Verifies that a clone equals its source and that mutating the clone's
	/// owned expressions leaves the source untouched.
	#[rstest]
	fn prop_clone_independent(window in window()) {
		let rendered = window.to_string();
		let children = window.children.len();

		let mut copy = window.clone();
		prop_assert_eq!(&copy, &window);

		copy.children.push(ParsedExpression::column("extra"));
		for child in &mut copy.children {
			*child = ParsedExpression::value(0);
		}
		if let Some(expr) = copy.start.expr_mut() {
			*expr = ParsedExpression::star();
		}
		copy.orders.clear();

		prop_assert_ne!(&copy, &window);
		prop_assert_eq!(window.children.len(), children);
		prop_assert_eq!(window.to_string(), rendered);
	}

	/// Test: rendering shape
	///
	/// Category: Property
	/// Verifies that rendering always yields a closed OVER clause and writes
	/// EXCLUDE exactly when it is set.
	#[rstest]
	fn prop_render_shape(window in window()) {
		let sql = window.to_string();
		prop_assert!(sql.contains(") OVER ("));
		prop_assert!(sql.ends_with(')'));
		prop_assert_eq!(sql.contains(" EXCLUDE "), window.exclude.is_set());
	}

	/// Test: implicit frame
	///
	/// Category: Property
	/// Verifies that a window with only function and arguments renders as
	/// `<name>(<args>) OVER ()`.
	#[rstest]
	fn prop_empty_over_clause(
		function_name in identifier(),
		children in prop::collection::vec(expression(), 0..4),
	) {
		let args = children
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(", ");
		let window = WindowExpression::new(function_name.clone(), children);
		prop_assert_eq!(window.to_string(), format!("{}({}) OVER ()", function_name, args));
	}
}
