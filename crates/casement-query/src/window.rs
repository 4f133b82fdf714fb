//! Window function calls: `expr(...) OVER (...)`.
//!
//! - [`WindowExpression`]: a window call over [`ParsedExpression`]s, as a
//!   parser produces it
//! - [`WindowExpressionBuilder`]: incremental construction with flat
//!   [`BoundaryKind`] tags, finalised by [`WindowExpressionBuilder::build`]
//! - [`BoundWindowExpression`]: the same call after name resolution
//!
//! Both representations render through [`render_window`](crate::backend::render_window).

mod bound;
mod builder;

pub use bound::BoundWindowExpression;
pub use builder::WindowExpressionBuilder;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::{WindowParts, render_window};
use crate::error::{QueryError, QueryResult};
use crate::expr::ParsedExpression;
use crate::types::{BoundaryKind, ExcludeMode, FrameDirection, FrameUnit, OrderByNode, WindowBoundary};

/// A window function call.
///
/// All fields are public. Code that assembles an instance by hand should call
/// [`validate`](Self::validate) before rendering it.
///
/// # Examples
///
/// ```rust
/// use casement_query::types::{BoundaryKind, ExcludeMode};
/// use casement_query::{ParsedExpression, WindowExpression};
///
/// let window = WindowExpression::builder("sum")
///     .arg(ParsedExpression::column("x"))
///     .start(BoundaryKind::UnboundedPreceding)
///     .end(BoundaryKind::CurrentRowRange)
///     .exclude(ExcludeMode::Ties)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     window.to_string(),
///     "sum(x) OVER (RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW EXCLUDE TIES)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowExpression {
	/// Catalog of the function.
	pub catalog: String,
	/// Schema of the function, empty when unqualified.
	pub schema: String,
	/// Function name.
	pub function_name: String,
	/// Function arguments.
	pub children: Vec<ParsedExpression>,
	/// PARTITION BY list.
	pub partitions: Vec<ParsedExpression>,
	/// ORDER BY list of the window.
	pub orders: Vec<OrderByNode<ParsedExpression>>,
	/// FILTER (WHERE ...) condition.
	pub filter_expr: Option<ParsedExpression>,
	/// IGNORE NULLS
	pub ignore_nulls: bool,
	/// DISTINCT on the first argument.
	pub distinct: bool,
	/// Frame start.
	pub start: WindowBoundary<ParsedExpression>,
	/// Frame end.
	pub end: WindowBoundary<ParsedExpression>,
	/// EXCLUDE clause.
	pub exclude: ExcludeMode,
	/// LEAD/LAG offset argument.
	pub offset_expr: Option<ParsedExpression>,
	/// LEAD/LAG default argument.
	pub default_expr: Option<ParsedExpression>,
	/// ORDER BY inside the argument list, e.g. `first_value(a ORDER BY x)`.
	pub arg_orders: Vec<OrderByNode<ParsedExpression>>,
}

impl WindowExpression {
	/// Creates a call with the implicit default frame and nothing else set.
	pub fn new(function_name: impl Into<String>, children: Vec<ParsedExpression>) -> Self {
		Self {
			catalog: String::new(),
			schema: String::new(),
			function_name: function_name.into(),
			children,
			partitions: Vec::new(),
			orders: Vec::new(),
			filter_expr: None,
			ignore_nulls: false,
			distinct: false,
			start: WindowBoundary::unbounded_preceding(),
			end: WindowBoundary::current_row(FrameUnit::Range),
			exclude: ExcludeMode::NoOther,
			offset_expr: None,
			default_expr: None,
			arg_orders: Vec::new(),
		}
	}

	/// Starts incremental construction.
	pub fn builder(function_name: impl Into<String>) -> WindowExpressionBuilder {
		WindowExpressionBuilder::new(function_name)
	}

	/// Flat kind of the frame start.
	#[must_use]
	pub fn start_kind(&self) -> BoundaryKind {
		self.start.kind()
	}

	/// Flat kind of the frame end.
	#[must_use]
	pub fn end_kind(&self) -> BoundaryKind {
		self.end.kind()
	}

	/// Every expression this call owns directly: arguments, partitions, sort
	/// keys, filter, frame offsets and the LEAD/LAG extras.
	pub fn expressions(&self) -> impl Iterator<Item = &ParsedExpression> {
		self.children
			.iter()
			.chain(&self.partitions)
			.chain(self.orders.iter().map(|node| &node.expression))
			.chain(self.arg_orders.iter().map(|node| &node.expression))
			.chain(self.filter_expr.as_ref())
			.chain(self.start.expr())
			.chain(self.end.expr())
			.chain(self.offset_expr.as_ref())
			.chain(self.default_expr.as_ref())
	}

	/// Checks the structural invariants rendering relies on, for this call and
	/// for every window call nested in its expressions.
	///
	/// # Errors
	///
	/// Returns [`QueryError::InvalidWindow`] if the function name is empty,
	/// if DISTINCT is set without arguments, or if the frame starts at
	/// UNBOUNDED FOLLOWING.
	pub fn validate(&self) -> QueryResult<()> {
		if self.function_name.is_empty() {
			return Err(QueryError::InvalidWindow(
				"window function name is empty".to_string(),
			));
		}
		if self.distinct && self.children.is_empty() {
			return Err(QueryError::InvalidWindow(format!(
				"DISTINCT requires an argument in {}()",
				self.function_name
			)));
		}
		if self.start == WindowBoundary::Unbounded(FrameDirection::Following) {
			return Err(QueryError::InvalidWindow(
				"frame cannot start at UNBOUNDED FOLLOWING".to_string(),
			));
		}
		self.expressions().try_for_each(ParsedExpression::validate)
	}
}

impl WindowParts for WindowExpression {
	type Expr = ParsedExpression;

	fn schema(&self) -> &str {
		&self.schema
	}

	fn function_name(&self) -> &str {
		&self.function_name
	}

	fn children(&self) -> &[ParsedExpression] {
		&self.children
	}

	fn distinct(&self) -> bool {
		self.distinct
	}

	fn offset_expr(&self) -> Option<&ParsedExpression> {
		self.offset_expr.as_ref()
	}

	fn default_expr(&self) -> Option<&ParsedExpression> {
		self.default_expr.as_ref()
	}

	fn arg_orders(&self) -> &[OrderByNode<ParsedExpression>] {
		&self.arg_orders
	}

	fn ignore_nulls(&self) -> bool {
		self.ignore_nulls
	}

	fn filter_expr(&self) -> Option<&ParsedExpression> {
		self.filter_expr.as_ref()
	}

	fn partitions(&self) -> &[ParsedExpression] {
		&self.partitions
	}

	fn orders(&self) -> &[OrderByNode<ParsedExpression>] {
		&self.orders
	}

	fn start(&self) -> &WindowBoundary<ParsedExpression> {
		&self.start
	}

	fn end(&self) -> &WindowBoundary<ParsedExpression> {
		&self.end
	}

	fn exclude(&self) -> ExcludeMode {
		self.exclude
	}
}

impl fmt::Display for WindowExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render_window(self))
	}
}

#[cfg(test)]
mod tests;
