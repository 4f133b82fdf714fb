//! Output buffer for rendered SQL.
//!
//! [`SqlWriter`] collects the text of a window expression fragment by
//! fragment. Rendering never fails, so every push is infallible.

use std::fmt::{self, Write as _};

/// Append-only SQL text buffer.
///
/// # Examples
///
/// ```rust
/// use casement_query::backend::SqlWriter;
///
/// let mut writer = SqlWriter::new();
/// writer.push("sum(");
/// writer.push_list(["a", "b"], ", ", |w, item| w.push(item));
/// writer.push(")");
///
/// assert_eq!(writer.into_string(), "sum(a, b)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
	/// Text written so far
	sql: String,
}

impl SqlWriter {
	/// Creates an empty writer.
	pub fn new() -> Self {
		Self { sql: String::new() }
	}

	/// Appends raw SQL text.
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Appends the `Display` form of `item`, such as an expression or a
	/// sort specification.
	pub fn push_display<T: fmt::Display + ?Sized>(&mut self, item: &T) {
		// Writing into a String cannot fail.
		let _ = write!(self.sql, "{}", item);
	}

	/// Consumes the writer and returns its text.
	pub fn into_string(self) -> String {
		self.sql
	}

	/// Writes each item with `f`, putting `separator` between consecutive items.
	///
	/// # Arguments
	///
	/// * `items` - Items to write, in order
	/// * `separator` - Text placed between two items
	/// * `f` - Writes a single item
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		for (i, item) in items.into_iter().enumerate() {
			if i > 0 {
				self.sql.push_str(separator);
			}
			f(self, item);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sql_writer_basic() {
		let mut writer = SqlWriter::new();
		writer.push("OVER");
		writer.push(" ");
		writer.push("()");

		assert_eq!(writer.into_string(), "OVER ()");
	}

	#[test]
	fn test_sql_writer_display() {
		let mut writer = SqlWriter::new();
		writer.push_display(&42);
		writer.push(" ");
		writer.push_display("PRECEDING");

		assert_eq!(writer.into_string(), "42 PRECEDING");
	}

	#[test]
	fn test_sql_writer_list() {
		let mut writer = SqlWriter::new();
		writer.push_list(vec!["a", "b", "c"], ", ", |w, item| {
			w.push(item);
		});

		assert_eq!(writer.into_string(), "a, b, c");
	}

	#[test]
	fn test_sql_writer_empty_list() {
		let mut writer = SqlWriter::new();
		writer.push_list(Vec::<&str>::new(), ", ", |w, item| w.push(item));

		assert_eq!(writer.into_string(), "");
	}
}
