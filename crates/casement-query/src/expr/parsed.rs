//! ParsedExpression - the expression tree as written in the query text.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{write_comma_list, write_identifier};
use crate::error::QueryResult;
use crate::types::BinOper;
use crate::value::{IntoValue, Value};
use crate::window::WindowExpression;

/// A parsed SQL expression.
///
/// Each node exclusively owns its children, so [`Clone`] yields a fully
/// independent tree and [`PartialEq`] compares structurally.
///
/// # Examples
///
/// ```rust
/// use casement_query::types::BinOper;
/// use casement_query::ParsedExpression;
///
/// let expr = ParsedExpression::binary(
///     ParsedExpression::qualified_column("e", "salary"),
///     BinOper::Mul,
///     ParsedExpression::value(2),
/// );
/// assert_eq!(expr.to_string(), "(e.salary * 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedExpression {
	/// A column reference, optionally qualified by a table alias.
	Column {
		/// Table alias qualifier.
		table: Option<String>,
		/// Column name.
		name: String,
	},

	/// A literal value.
	Constant(Value),

	/// A scalar function call.
	Function {
		/// Schema qualifier.
		schema: Option<String>,
		/// Function name.
		name: String,
		/// Arguments.
		args: Vec<ParsedExpression>,
	},

	/// `*`
	Star,

	/// A binary operation.
	Binary {
		/// Left operand.
		left: Box<ParsedExpression>,
		/// Operator.
		op: BinOper,
		/// Right operand.
		right: Box<ParsedExpression>,
	},

	/// A nested window function call.
	Window(Box<WindowExpression>),
}

impl ParsedExpression {
	/// Creates an unqualified column reference.
	pub fn column(name: impl Into<String>) -> Self {
		Self::Column {
			table: None,
			name: name.into(),
		}
	}

	/// Creates a table-qualified column reference.
	pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
		Self::Column {
			table: Some(table.into()),
			name: name.into(),
		}
	}

	/// Creates a literal.
	pub fn value<V: IntoValue>(value: V) -> Self {
		Self::Constant(value.into_value())
	}

	/// Creates an unqualified function call.
	pub fn function(name: impl Into<String>, args: Vec<ParsedExpression>) -> Self {
		Self::Function {
			schema: None,
			name: name.into(),
			args,
		}
	}

	/// Creates `*`.
	pub fn star() -> Self {
		Self::Star
	}

	/// Creates a binary operation.
	pub fn binary(left: ParsedExpression, op: BinOper, right: ParsedExpression) -> Self {
		Self::Binary {
			left: Box::new(left),
			op,
			right: Box::new(right),
		}
	}

	/// Wraps a window expression.
	pub fn window(window: WindowExpression) -> Self {
		Self::Window(Box::new(window))
	}

	/// Validates every window call nested anywhere in this expression.
	///
	/// # Errors
	///
	/// Returns the first [`WindowExpression::validate`] failure found.
	pub fn validate(&self) -> QueryResult<()> {
		match self {
			Self::Column { .. } | Self::Constant(_) | Self::Star => Ok(()),
			Self::Function { args, .. } => args.iter().try_for_each(Self::validate),
			Self::Binary { left, right, .. } => {
				left.validate()?;
				right.validate()
			}
			Self::Window(window) => window.validate(),
		}
	}

	/// Whether `predicate` holds for this node or any node below it, including
	/// the expressions owned by nested window calls.
	pub fn any<F>(&self, predicate: &mut F) -> bool
	where
		F: FnMut(&ParsedExpression) -> bool,
	{
		if predicate(self) {
			return true;
		}
		match self {
			Self::Column { .. } | Self::Constant(_) | Self::Star => false,
			Self::Function { args, .. } => args.iter().any(|arg| arg.any(predicate)),
			Self::Binary { left, right, .. } => left.any(predicate) || right.any(predicate),
			Self::Window(window) => window.expressions().any(|expr| expr.any(predicate)),
		}
	}
}

impl fmt::Display for ParsedExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Column { table, name } => {
				if let Some(table) = table {
					write_identifier(f, table)?;
					f.write_str(".")?;
				}
				write_identifier(f, name)
			}
			Self::Constant(value) => f.write_str(&value.to_sql_literal()),
			Self::Function { schema, name, args } => {
				if let Some(schema) = schema {
					write_identifier(f, schema)?;
					f.write_str(".")?;
				}
				write!(f, "{}(", name)?;
				write_comma_list(f, args)?;
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

impl From<Value> for ParsedExpression {
	fn from(value: Value) -> Self {
		Self::Constant(value)
	}
}
