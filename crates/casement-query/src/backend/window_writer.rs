//! Rendering of window function calls.
//!
//! [`render_window`] is written once against [`WindowParts`], so the parsed
//! and the bound representation of a window call produce identical text.

use std::fmt;

use super::SqlWriter;
use crate::types::{
	ExcludeMode, FrameDirection, FrameUnit, OrderByNode, WindowBoundary, is_default_frame,
};

/// The parts of a window function call that rendering reads.
///
/// `Expr` is the expression type of arguments, partitions, sort keys and
/// frame offsets. It only needs to render itself.
pub trait WindowParts {
	/// Expression type used throughout the call.
	type Expr: fmt::Display;

	/// Schema qualifier of the function, empty when unqualified.
	fn schema(&self) -> &str;

	/// Function name.
	fn function_name(&self) -> &str;

	/// Function arguments.
	fn children(&self) -> &[Self::Expr];

	/// Whether DISTINCT applies to the first argument.
	fn distinct(&self) -> bool;

	/// LEAD/LAG offset argument.
	fn offset_expr(&self) -> Option<&Self::Expr>;

	/// LEAD/LAG default argument.
	fn default_expr(&self) -> Option<&Self::Expr>;

	/// ORDER BY inside the argument list.
	fn arg_orders(&self) -> &[OrderByNode<Self::Expr>];

	/// Whether IGNORE NULLS is set.
	fn ignore_nulls(&self) -> bool;

	/// FILTER (WHERE ...) condition.
	fn filter_expr(&self) -> Option<&Self::Expr>;

	/// PARTITION BY list.
	fn partitions(&self) -> &[Self::Expr];

	/// ORDER BY list of the window.
	fn orders(&self) -> &[OrderByNode<Self::Expr>];

	/// Frame start.
	fn start(&self) -> &WindowBoundary<Self::Expr>;

	/// Frame end.
	fn end(&self) -> &WindowBoundary<Self::Expr>;

	/// EXCLUDE clause.
	fn exclude(&self) -> ExcludeMode;
}

/// Renders a window function call as canonical SQL.
///
/// The implicit frame `RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW` is
/// omitted unless an EXCLUDE clause requires an explicit frame.
///
/// # Panics
///
/// Panics if the frame starts at UNBOUNDED FOLLOWING. A validated window
/// expression never does.
///
/// # Examples
///
/// ```rust
/// use casement_query::backend::render_window;
/// use casement_query::{ParsedExpression, WindowExpression};
///
/// let window = WindowExpression::new("sum", vec![ParsedExpression::column("x")]);
/// assert_eq!(render_window(&window), "sum(x) OVER ()");
/// ```
pub fn render_window<W: WindowParts + ?Sized>(window: &W) -> String {
	tracing::trace!(function = window.function_name(), "rendering window expression");

	let mut writer = SqlWriter::new();

	// Function head
	if !window.schema().is_empty() {
		writer.push(window.schema());
		writer.push(".");
	}
	writer.push(window.function_name());
	writer.push("(");

	// Arguments, DISTINCT binds to the first one only
	let distinct = window.distinct();
	writer.push_list(window.children().iter().enumerate(), ", ", |w, (i, child)| {
		if distinct && i == 0 {
			w.push("DISTINCT ");
		}
		w.push_display(child);
	});
	if let Some(offset) = window.offset_expr() {
		writer.push(", ");
		writer.push_display(offset);
	}
	if let Some(default) = window.default_expr() {
		writer.push(", ");
		writer.push_display(default);
	}
	if !window.arg_orders().is_empty() {
		writer.push(" ORDER BY ");
		write_orders(&mut writer, window.arg_orders());
	}
	if window.ignore_nulls() {
		writer.push(" IGNORE NULLS");
	}
	if let Some(filter) = window.filter_expr() {
		writer.push(") FILTER (WHERE ");
		writer.push_display(filter);
	}
	writer.push(") OVER (");

	let mut needs_separator = false;
	if !window.partitions().is_empty() {
		writer.push("PARTITION BY ");
		writer.push_list(window.partitions(), ", ", |w, expr| w.push_display(expr));
		needs_separator = true;
	}
	if !window.orders().is_empty() {
		if needs_separator {
			writer.push(" ");
		}
		writer.push("ORDER BY ");
		write_orders(&mut writer, window.orders());
		needs_separator = true;
	}

	let exclude = window.exclude();
	write_frame(
		&mut writer,
		window.start(),
		window.end(),
		exclude,
		needs_separator,
	);
	if exclude.is_set() {
		writer.push(" EXCLUDE ");
		writer.push(exclude.as_str());
	}
	writer.push(")");

	writer.into_string()
}

fn write_orders<E: fmt::Display>(writer: &mut SqlWriter, orders: &[OrderByNode<E>]) {
	writer.push_list(orders, ", ", |w, node| w.push_display(node));
}

/// Write the frame clause (`ROWS|RANGE [BETWEEN] <from> [AND <to>]`), or nothing
/// when the frame is implicit.
fn write_frame<E: fmt::Display>(
	writer: &mut SqlWriter,
	start: &WindowBoundary<E>,
	end: &WindowBoundary<E>,
	exclude: ExcludeMode,
	needs_separator: bool,
) {
	let default_frame = is_default_frame(start, end);
	let mut units = FrameUnit::Rows;
	let mut from = String::new();
	let mut to = String::new();

	match start {
		WindowBoundary::CurrentRow(unit) => {
			from.push_str("CURRENT ROW");
			units = *unit;
		}
		WindowBoundary::Unbounded(FrameDirection::Preceding) => {
			if !default_frame {
				from.push_str("UNBOUNDED PRECEDING");
			}
		}
		WindowBoundary::Offset {
			direction,
			unit,
			expr,
		} => {
			from = format!("{} {}", expr, direction);
			units = *unit;
		}
		WindowBoundary::Unbounded(FrameDirection::Following) => {
			panic!("internal error: unrecognized frame start boundary UNBOUNDED FOLLOWING")
		}
	}

	match end {
		WindowBoundary::CurrentRow(unit) => {
			if !default_frame {
				to.push_str("CURRENT ROW");
				units = *unit;
			}
		}
		WindowBoundary::Unbounded(direction) => {
			to = format!("UNBOUNDED {}", direction);
		}
		WindowBoundary::Offset {
			direction,
			unit,
			expr,
		} => {
			to = format!("{} {}", expr, direction);
			units = *unit;
		}
	}

	// EXCLUDE is only valid with an explicit frame
	if exclude.is_set() {
		if from.is_empty() {
			from.push_str("UNBOUNDED PRECEDING");
		}
		if to.is_empty() {
			to.push_str("CURRENT ROW");
			units = FrameUnit::Range;
		}
	}

	if from.is_empty() && to.is_empty() {
		return;
	}
	if needs_separator {
		writer.push(" ");
	}
	writer.push(units.as_str());
	match (from.is_empty(), to.is_empty()) {
		(false, false) => {
			writer.push(" BETWEEN ");
			writer.push(&from);
			writer.push(" AND ");
			writer.push(&to);
		}
		(false, true) => {
			writer.push(" ");
			writer.push(&from);
		}
		(true, false) => {
			writer.push(" ");
			writer.push(&to);
		}
		(true, true) => {}
	}
}
