//! Error types for window expression handling.
//!
//! Recoverable conditions (unknown functions, unresolved columns, malformed
//! frames, codec and configuration failures) are reported as [`QueryError`].
//! Internal invariant violations discovered while rendering SQL are fatal and
//! panic instead.

use thiserror::Error;

/// Result type for window expression operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Window expression errors.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QueryError {
	/// Function name not known to the function catalog.
	#[error("unrecognized window function: {0}")]
	UnknownFunction(String),

	/// Column reference that no table in scope provides.
	#[error("column not found: {0}")]
	ColumnNotFound(String),

	/// Unqualified column reference provided by more than one table.
	#[error("ambiguous column reference: {0}")]
	AmbiguousColumn(String),

	/// Structurally valid but semantically malformed window expression.
	#[error("invalid window expression: {0}")]
	InvalidWindow(String),

	/// Broken internal invariant.
	#[error("internal error: {0}")]
	Internal(String),

	/// Serialization failure.
	#[error("failed to encode window expression: {0}")]
	Encode(String),

	/// Deserialization failure.
	#[error("failed to decode window expression: {0}")]
	Decode(String),

	/// Settings could not be loaded.
	#[error("configuration error: {0}")]
	Config(String),
}

impl From<toml::de::Error> for QueryError {
	fn from(err: toml::de::Error) -> Self {
		Self::Config(err.to_string())
	}
}
