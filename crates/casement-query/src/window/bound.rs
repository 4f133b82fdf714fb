//! BoundWindowExpression - a window call after name resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::{WindowParts, render_window};
use crate::expr::BoundExpression;
use crate::types::{ExcludeMode, ExpressionType, OrderByNode, WindowBoundary};

/// A window function call whose columns are resolved and whose function is
/// classified.
///
/// Produced by [`Binder::bind_window`](crate::binder::Binder::bind_window).
/// Renders the same text as the [`WindowExpression`](super::WindowExpression)
/// it was bound from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundWindowExpression {
	/// Classified function type.
	pub function_type: ExpressionType,
	/// Catalog of the function.
	pub catalog: String,
	/// Schema of the function, empty when unqualified.
	pub schema: String,
	/// Function name.
	pub function_name: String,
	/// Function arguments.
	pub children: Vec<BoundExpression>,
	/// PARTITION BY list.
	pub partitions: Vec<BoundExpression>,
	/// ORDER BY list of the window.
	pub orders: Vec<OrderByNode<BoundExpression>>,
	/// FILTER (WHERE ...) condition.
	pub filter_expr: Option<BoundExpression>,
	/// IGNORE NULLS
	pub ignore_nulls: bool,
	/// DISTINCT on the first argument.
	pub distinct: bool,
	/// Frame start.
	pub start: WindowBoundary<BoundExpression>,
	/// Frame end.
	pub end: WindowBoundary<BoundExpression>,
	/// EXCLUDE clause.
	pub exclude: ExcludeMode,
	/// LEAD/LAG offset argument.
	pub offset_expr: Option<BoundExpression>,
	/// LEAD/LAG default argument.
	pub default_expr: Option<BoundExpression>,
	/// ORDER BY inside the argument list.
	pub arg_orders: Vec<OrderByNode<BoundExpression>>,
}

impl WindowParts for BoundWindowExpression {
	type Expr = BoundExpression;

	fn schema(&self) -> &str {
		&self.schema
	}

	fn function_name(&self) -> &str {
		&self.function_name
	}

	fn children(&self) -> &[BoundExpression] {
		&self.children
	}

	fn distinct(&self) -> bool {
		self.distinct
	}

	fn offset_expr(&self) -> Option<&BoundExpression> {
		self.offset_expr.as_ref()
	}

	fn default_expr(&self) -> Option<&BoundExpression> {
		self.default_expr.as_ref()
	}

	fn arg_orders(&self) -> &[OrderByNode<BoundExpression>] {
		&self.arg_orders
	}

	fn ignore_nulls(&self) -> bool {
		self.ignore_nulls
	}

	fn filter_expr(&self) -> Option<&BoundExpression> {
		self.filter_expr.as_ref()
	}

	fn partitions(&self) -> &[BoundExpression] {
		&self.partitions
	}

	fn orders(&self) -> &[OrderByNode<BoundExpression>] {
		&self.orders
	}

	fn start(&self) -> &WindowBoundary<BoundExpression> {
		&self.start
	}

	fn end(&self) -> &WindowBoundary<BoundExpression> {
		&self.end
	}

	fn exclude(&self) -> ExcludeMode {
		self.exclude
	}
}

impl fmt::Display for BoundWindowExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render_window(self))
	}
}
