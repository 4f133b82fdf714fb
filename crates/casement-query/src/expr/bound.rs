//! BoundExpression - the expression tree after name resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::write_comma_list;
use crate::types::BinOper;
use crate::value::Value;
use crate::window::BoundWindowExpression;

/// Position of a resolved column: which table in scope, and which column of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnBinding {
	/// Index of the table binding.
	pub table_index: usize,
	/// Index of the column within that table.
	pub column_index: usize,
}

impl ColumnBinding {
	/// Creates a binding.
	pub fn new(table_index: usize, column_index: usize) -> Self {
		Self {
			table_index,
			column_index,
		}
	}
}

impl fmt::Display for ColumnBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#[{}.{}]", self.table_index, self.column_index)
	}
}

/// A resolved SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundExpression {
	/// A resolved column. `alias` is the text it was written as.
	ColumnRef {
		/// Display name, empty for synthesized references.
		alias: String,
		/// Resolved position.
		binding: ColumnBinding,
	},

	/// A literal value.
	Constant(Value),

	/// A scalar function call.
	Function {
		/// Function name.
		name: String,
		/// Arguments.
		children: Vec<BoundExpression>,
	},

	/// `*`
	Star,

	/// A binary operation.
	Binary {
		/// Left operand.
		left: Box<BoundExpression>,
		/// Operator.
		op: BinOper,
		/// Right operand.
		right: Box<BoundExpression>,
	},

	/// A nested window function call.
	Window(Box<BoundWindowExpression>),
}

impl fmt::Display for BoundExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ColumnRef { alias, binding } => {
				if alias.is_empty() {
					write!(f, "{}", binding)
				} else {
					f.write_str(alias)
				}
			}
			Self::Constant(value) => f.write_str(&value.to_sql_literal()),
			Self::Function { name, children } => {
				write!(f, "{}(", name)?;
				write_comma_list(f, children)?;
				f.write_str(")")
			}
			Self::Star => f.write_str("*"),
			Self::Binary { left, op, right } => {
				write!(f, "({} {} {})", left, op, right)
			}
			Self::Window(window) => write!(f, "{}", window),
		}
	}
}
