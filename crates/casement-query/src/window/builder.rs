//! Incremental construction of [`WindowExpression`]s.

use super::WindowExpression;
use crate::error::QueryResult;
use crate::expr::ParsedExpression;
use crate::types::{BoundaryKind, ExcludeMode, OrderByNode, WindowBoundary};

/// Builder for [`WindowExpression`].
///
/// Frame boundaries are recorded as flat [`BoundaryKind`] tags plus optional
/// offset expressions, the way a parser encounters them. Both boundaries
/// start out as [`BoundaryKind::Invalid`] and must be set before
/// [`build`](Self::build), either one by one or with
/// [`default_frame`](Self::default_frame).
#[derive(Debug, Clone)]
pub struct WindowExpressionBuilder {
	catalog: String,
	schema: String,
	function_name: String,
	children: Vec<ParsedExpression>,
	partitions: Vec<ParsedExpression>,
	orders: Vec<OrderByNode<ParsedExpression>>,
	filter_expr: Option<ParsedExpression>,
	ignore_nulls: bool,
	distinct: bool,
	start: BoundaryKind,
	end: BoundaryKind,
	start_expr: Option<ParsedExpression>,
	end_expr: Option<ParsedExpression>,
	exclude: ExcludeMode,
	offset_expr: Option<ParsedExpression>,
	default_expr: Option<ParsedExpression>,
	arg_orders: Vec<OrderByNode<ParsedExpression>>,
}

impl WindowExpressionBuilder {
	/// Creates a builder for a call to `function_name`.
	pub fn new(function_name: impl Into<String>) -> Self {
		Self {
			catalog: String::new(),
			schema: String::new(),
			function_name: function_name.into(),
			children: Vec::new(),
			partitions: Vec::new(),
			orders: Vec::new(),
			filter_expr: None,
			ignore_nulls: false,
			distinct: false,
			start: BoundaryKind::Invalid,
			end: BoundaryKind::Invalid,
			start_expr: None,
			end_expr: None,
			exclude: ExcludeMode::NoOther,
			offset_expr: None,
			default_expr: None,
			arg_orders: Vec::new(),
		}
	}

	/// Sets the catalog.
	pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
		self.catalog = catalog.into();
		self
	}

	/// Sets the schema qualifier.
	pub fn schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = schema.into();
		self
	}

	/// Appends a function argument.
	pub fn arg(mut self, expr: ParsedExpression) -> Self {
		self.children.push(expr);
		self
	}

	/// Appends function arguments.
	pub fn args<I>(mut self, exprs: I) -> Self
	where
		I: IntoIterator<Item = ParsedExpression>,
	{
		self.children.extend(exprs);
		self
	}

	/// Appends a PARTITION BY expression.
	pub fn partition_by(mut self, expr: ParsedExpression) -> Self {
		self.partitions.push(expr);
		self
	}

	/// Appends an entry to the window ORDER BY.
	pub fn order_by(mut self, node: OrderByNode<ParsedExpression>) -> Self {
		self.orders.push(node);
		self
	}

	/// Appends an entry to the argument-level ORDER BY.
	pub fn arg_order_by(mut self, node: OrderByNode<ParsedExpression>) -> Self {
		self.arg_orders.push(node);
		self
	}

	/// Sets the FILTER condition.
	pub fn filter(mut self, expr: ParsedExpression) -> Self {
		self.filter_expr = Some(expr);
		self
	}

	/// Sets IGNORE NULLS.
	pub fn ignore_nulls(mut self, ignore_nulls: bool) -> Self {
		self.ignore_nulls = ignore_nulls;
		self
	}

	/// Sets DISTINCT on the first argument.
	pub fn distinct(mut self, distinct: bool) -> Self {
		self.distinct = distinct;
		self
	}

	/// Sets the frame start kind.
	pub fn start(mut self, kind: BoundaryKind) -> Self {
		self.start = kind;
		self
	}

	/// Sets the frame start offset expression.
	pub fn start_expr(mut self, expr: ParsedExpression) -> Self {
		self.start_expr = Some(expr);
		self
	}

	/// Sets the frame end kind.
	pub fn end(mut self, kind: BoundaryKind) -> Self {
		self.end = kind;
		self
	}

	/// Sets the frame end offset expression.
	pub fn end_expr(mut self, expr: ParsedExpression) -> Self {
		self.end_expr = Some(expr);
		self
	}

	/// Sets both boundaries to the implicit default frame.
	pub fn default_frame(self) -> Self {
		self.start(BoundaryKind::UnboundedPreceding)
			.end(BoundaryKind::CurrentRowRange)
	}

	/// Sets the EXCLUDE clause.
	pub fn exclude(mut self, exclude: ExcludeMode) -> Self {
		self.exclude = exclude;
		self
	}

	/// Sets the LEAD/LAG offset argument.
	pub fn offset(mut self, expr: ParsedExpression) -> Self {
		self.offset_expr = Some(expr);
		self
	}

	/// Sets the LEAD/LAG default argument.
	pub fn default_value(mut self, expr: ParsedExpression) -> Self {
		self.default_expr = Some(expr);
		self
	}

	/// Finalises the window expression.
	///
	/// # Errors
	///
	/// - [`QueryError::Internal`](crate::QueryError::Internal) if a boundary
	///   was never set
	/// - [`QueryError::InvalidWindow`](crate::QueryError::InvalidWindow) if an
	///   offset expression does not match its boundary kind, or if
	///   [`WindowExpression::validate`] fails
	pub fn build(self) -> QueryResult<WindowExpression> {
		let start = WindowBoundary::from_kind(self.start, self.start_expr)?;
		let end = WindowBoundary::from_kind(self.end, self.end_expr)?;

		let window = WindowExpression {
			catalog: self.catalog,
			schema: self.schema,
			function_name: self.function_name,
			children: self.children,
			partitions: self.partitions,
			orders: self.orders,
			filter_expr: self.filter_expr,
			ignore_nulls: self.ignore_nulls,
			distinct: self.distinct,
			start,
			end,
			exclude: self.exclude,
			offset_expr: self.offset_expr,
			default_expr: self.default_expr,
			arg_orders: self.arg_orders,
		};
		window.validate()?;
		Ok(window)
	}
}
