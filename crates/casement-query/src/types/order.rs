//! Sort specifications used by window ORDER BY lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderType {
	/// No explicit direction.
	#[default]
	Default,
	/// ASC
	Ascending,
	/// DESC
	Descending,
}

impl OrderType {
	/// Returns the SQL keyword, or `None` when no direction is written.
	#[must_use]
	pub fn keyword(&self) -> Option<&'static str> {
		match self {
			Self::Default => None,
			Self::Ascending => Some("ASC"),
			Self::Descending => Some("DESC"),
		}
	}
}

/// Placement of NULL values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NullOrder {
	/// No explicit null placement.
	#[default]
	Default,
	/// NULLS FIRST
	NullsFirst,
	/// NULLS LAST
	NullsLast,
}

impl NullOrder {
	/// Returns the SQL keywords, or `None` when no placement is written.
	#[must_use]
	pub fn keyword(&self) -> Option<&'static str> {
		match self {
			Self::Default => None,
			Self::NullsFirst => Some("NULLS FIRST"),
			Self::NullsLast => Some("NULLS LAST"),
		}
	}
}

/// One entry of an ORDER BY list: `<expr> [ASC|DESC] [NULLS FIRST|NULLS LAST]`.
///
/// # Examples
///
/// ```rust
/// use casement_query::types::{NullOrder, OrderByNode, OrderType};
/// use casement_query::ParsedExpression;
///
/// let node = OrderByNode::new(ParsedExpression::column("salary"))
///     .order(OrderType::Descending)
///     .nulls(NullOrder::NullsLast);
/// assert_eq!(node.to_string(), "salary DESC NULLS LAST");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByNode<E> {
	/// Sort direction.
	pub order: OrderType,
	/// NULL placement.
	pub null_order: NullOrder,
	/// Sort key.
	pub expression: E,
}

impl<E> OrderByNode<E> {
	/// Creates an entry with default direction and null placement.
	pub fn new(expression: E) -> Self {
		Self {
			order: OrderType::Default,
			null_order: NullOrder::Default,
			expression,
		}
	}

	/// Sets the sort direction.
	pub fn order(mut self, order: OrderType) -> Self {
		self.order = order;
		self
	}

	/// Sets the NULL placement.
	pub fn nulls(mut self, null_order: NullOrder) -> Self {
		self.null_order = null_order;
		self
	}
}

impl<E: fmt::Display> fmt::Display for OrderByNode<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.expression)?;
		if let Some(keyword) = self.order.keyword() {
			write!(f, " {}", keyword)?;
		}
		if let Some(keyword) = self.null_order.keyword() {
			write!(f, " {}", keyword)?;
		}
		Ok(())
	}
}
