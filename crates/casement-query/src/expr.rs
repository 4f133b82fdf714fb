//! Expression trees that window expressions are built from.
//!
//! Two representations exist side by side:
//!
//! - [`ParsedExpression`]: the tree produced by a parser, with column and
//!   function references still written by name
//! - [`BoundExpression`]: the tree after name resolution, where columns point
//!   at a [`ColumnBinding`]
//!
//! Both implement [`Display`](std::fmt::Display) and render canonical SQL.

mod bound;
mod parsed;

pub use bound::{BoundExpression, ColumnBinding};
pub use parsed::ParsedExpression;

use std::borrow::Cow;
use std::fmt;

/// Keywords that must be quoted when used as identifiers.
///
/// Kept sorted for binary search.
const RESERVED_KEYWORDS: &[&str] = &[
	"all",
	"and",
	"as",
	"asc",
	"between",
	"by",
	"case",
	"current",
	"default",
	"desc",
	"distinct",
	"else",
	"end",
	"exclude",
	"false",
	"filter",
	"following",
	"from",
	"group",
	"ignore",
	"in",
	"is",
	"not",
	"null",
	"nulls",
	"or",
	"order",
	"over",
	"partition",
	"preceding",
	"range",
	"row",
	"rows",
	"select",
	"table",
	"then",
	"ties",
	"true",
	"unbounded",
	"when",
	"where",
	"window",
];

/// Whether `name` can be written without quotes.
fn is_bare_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	(first.is_ascii_lowercase() || first == '_')
		&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		&& RESERVED_KEYWORDS.binary_search(&name).is_err()
}

/// Returns `name` as written in SQL, double-quoted when necessary.
pub(crate) fn quote_identifier(name: &str) -> Cow<'_, str> {
	if is_bare_identifier(name) {
		Cow::Borrowed(name)
	} else {
		Cow::Owned(format!("\"{}\"", name.replace('"', "\"\"")))
	}
}

pub(crate) fn write_identifier(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
	f.write_str(&quote_identifier(name))
}

/// Writes `items` separated by `", "`.
pub(crate) fn write_comma_list<T: fmt::Display>(
	f: &mut fmt::Formatter<'_>,
	items: &[T],
) -> fmt::Result {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}", item)?;
	}
	Ok(())
}
