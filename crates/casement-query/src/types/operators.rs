//! Binary operators usable inside window arguments, filters and frame offsets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Infix operator of a binary expression.
///
/// Binary expressions are always rendered parenthesised, so no precedence
/// table is needed to print them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOper {
	/// `AND`
	And,
	/// `OR`
	Or,
	/// `=`
	Equal,
	/// `<>`
	NotEqual,
	/// `<`
	SmallerThan,
	/// `<=`
	SmallerThanOrEqual,
	/// `>`
	GreaterThan,
	/// `>=`
	GreaterThanOrEqual,
	/// `+`
	Add,
	/// `-`
	Sub,
	/// `*`
	Mul,
	/// `/`
	Div,
	/// `%`
	Mod,
	/// `||`
	Concat,
}

impl BinOper {
	/// SQL token of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
			Self::Mod => "%",
			Self::Concat => "||",
		}
	}

	/// Whether the operator yields a boolean.
	#[must_use]
	pub fn is_predicate(&self) -> bool {
		matches!(
			self,
			Self::And
				| Self::Or
				| Self::Equal
				| Self::NotEqual
				| Self::SmallerThan
				| Self::SmallerThanOrEqual
				| Self::GreaterThan
				| Self::GreaterThanOrEqual
		)
	}
}

impl fmt::Display for BinOper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(BinOper::And, "AND", true)]
	#[case(BinOper::NotEqual, "<>", true)]
	#[case(BinOper::GreaterThanOrEqual, ">=", true)]
	#[case(BinOper::Mod, "%", false)]
	#[case(BinOper::Concat, "||", false)]
	fn test_bin_oper(#[case] op: BinOper, #[case] token: &str, #[case] predicate: bool) {
		assert_eq!(op.to_string(), token);
		assert_eq!(op.is_predicate(), predicate);
	}
}
