//! The [`Value`] literal and conversions into it.

use serde::{Deserialize, Serialize};

/// Literal held by a constant expression.
///
/// Each variant wraps an `Option`; `None` is SQL `NULL` of that type.
///
/// ```rust
/// use casement_query::{IntoValue, Value};
///
/// assert_eq!(7i64.into_value(), Value::BigInt(Some(7)));
/// assert_eq!(Value::Double(None).to_sql_literal(), "NULL");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// BOOLEAN
	Bool(Option<bool>),
	/// BIGINT
	BigInt(Option<i64>),
	/// DOUBLE
	Double(Option<f64>),
	/// VARCHAR
	String(Option<Box<String>>),
}

impl Value {
	/// Whether this is a typed NULL.
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(
			self,
			Self::Bool(None) | Self::BigInt(None) | Self::Double(None) | Self::String(None)
		)
	}

	/// Renders the value as a SQL literal.
	///
	/// Strings are single-quoted with embedded quotes doubled. Doubles always
	/// carry a decimal point or an exponent so they never read back as integers,
	/// and non-finite doubles are written as casts (`'inf'::DOUBLE`).
	///
	/// ```rust
	/// use casement_query::Value;
	///
	/// assert_eq!(
	///     Value::String(Some(Box::new("it's".to_string()))).to_sql_literal(),
	///     "'it''s'"
	/// );
	/// ```
	#[must_use]
	pub fn to_sql_literal(&self) -> String {
		match self {
			Self::Bool(Some(true)) => "TRUE".to_string(),
			Self::Bool(Some(false)) => "FALSE".to_string(),
			Self::BigInt(Some(v)) => v.to_string(),
			Self::Double(Some(v)) if v.is_nan() => "'nan'::DOUBLE".to_string(),
			Self::Double(Some(v)) if v.is_infinite() => {
				let sign = if v.is_sign_negative() { "-" } else { "" };
				format!("'{}inf'::DOUBLE", sign)
			}
			Self::Double(Some(v)) => format!("{:?}", v),
			Self::String(Some(v)) => format!("'{}'", v.replace('\'', "''")),
			_ => "NULL".to_string(),
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Self::String(None)
	}
}

/// Conversion into a [`Value`].
pub trait IntoValue {
	/// Performs the conversion.
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Bool(Some(self))
	}
}

impl IntoValue for i32 {
	fn into_value(self) -> Value {
		Value::BigInt(Some(i64::from(self)))
	}
}

impl IntoValue for i64 {
	fn into_value(self) -> Value {
		Value::BigInt(Some(self))
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::Double(Some(self))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_owned())))
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	/// `None` becomes a NULL of unknown type, represented as a NULL string.
	fn into_value(self) -> Value {
		match self {
			Some(v) => v.into_value(),
			None => Value::default(),
		}
	}
}
