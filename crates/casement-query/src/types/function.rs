//! Classification of window function names.
//!
//! A window call site names either a dedicated window function
//! (`row_number`, `lead`, `ntile`, ...) or an aggregate evaluated over a
//! frame. [`FunctionCatalog::classify`] maps the textual name onto an
//! [`ExpressionType`] tag and rejects names it does not know.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::settings::WindowSettings;

/// Expression type tag of a window call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionType {
	/// Aggregate function evaluated over the frame.
	WindowAggregate,
	/// ROW_NUMBER()
	WindowRowNumber,
	/// RANK()
	WindowRank,
	/// DENSE_RANK()
	WindowRankDense,
	/// NTILE(n)
	WindowNtile,
	/// PERCENT_RANK()
	WindowPercentRank,
	/// CUME_DIST()
	WindowCumeDist,
	/// FIRST_VALUE(x)
	WindowFirstValue,
	/// LAST_VALUE(x)
	WindowLastValue,
	/// NTH_VALUE(x, n)
	WindowNthValue,
	/// LEAD(x [, offset [, default]])
	WindowLead,
	/// LAG(x [, offset [, default]])
	WindowLag,
}

impl ExpressionType {
	/// Returns the upper-snake name of this type.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::WindowAggregate => "WINDOW_AGGREGATE",
			Self::WindowRowNumber => "WINDOW_ROW_NUMBER",
			Self::WindowRank => "WINDOW_RANK",
			Self::WindowRankDense => "WINDOW_RANK_DENSE",
			Self::WindowNtile => "WINDOW_NTILE",
			Self::WindowPercentRank => "WINDOW_PERCENT_RANK",
			Self::WindowCumeDist => "WINDOW_CUME_DIST",
			Self::WindowFirstValue => "WINDOW_FIRST_VALUE",
			Self::WindowLastValue => "WINDOW_LAST_VALUE",
			Self::WindowNthValue => "WINDOW_NTH_VALUE",
			Self::WindowLead => "WINDOW_LEAD",
			Self::WindowLag => "WINDOW_LAG",
		}
	}

	/// Whether this is an aggregate used as a window function.
	#[must_use]
	pub fn is_aggregate(&self) -> bool {
		*self == Self::WindowAggregate
	}

	/// Whether the call may carry offset and default arguments.
	#[must_use]
	pub fn accepts_offset(&self) -> bool {
		matches!(self, Self::WindowLead | Self::WindowLag)
	}

	/// Whether this is a ranking function.
	#[must_use]
	pub fn is_ranking(&self) -> bool {
		matches!(
			self,
			Self::WindowRowNumber
				| Self::WindowRank
				| Self::WindowRankDense
				| Self::WindowNtile
				| Self::WindowPercentRank
				| Self::WindowCumeDist
		)
	}
}

impl fmt::Display for ExpressionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Aggregates known without any configuration.
const BUILTIN_AGGREGATES: &[&str] = &[
	"sum",
	"count",
	"count_star",
	"avg",
	"min",
	"max",
	"string_agg",
	"array_agg",
	"list",
	"bool_and",
	"bool_or",
	"stddev_samp",
	"stddev_pop",
	"var_samp",
	"var_pop",
	"median",
	"mode",
	"any_value",
	"bit_and",
	"bit_or",
	"bit_xor",
	"product",
];

/// Looks up a dedicated window function by lower-case name.
fn window_function_type(name: &str) -> Option<ExpressionType> {
	let function_type = match name {
		"rank" => ExpressionType::WindowRank,
		"rank_dense" | "dense_rank" => ExpressionType::WindowRankDense,
		"percent_rank" => ExpressionType::WindowPercentRank,
		"row_number" => ExpressionType::WindowRowNumber,
		"first_value" | "first" => ExpressionType::WindowFirstValue,
		"last_value" | "last" => ExpressionType::WindowLastValue,
		"nth_value" => ExpressionType::WindowNthValue,
		"cume_dist" => ExpressionType::WindowCumeDist,
		"lead" => ExpressionType::WindowLead,
		"lag" => ExpressionType::WindowLag,
		"ntile" => ExpressionType::WindowNtile,
		_ => return None,
	};
	Some(function_type)
}

/// Catalog of function names usable in an OVER clause.
///
/// # Examples
///
/// ```rust
/// use casement_query::types::{ExpressionType, FunctionCatalog};
///
/// let mut catalog = FunctionCatalog::new();
/// assert_eq!(catalog.classify("ROW_NUMBER").unwrap(), ExpressionType::WindowRowNumber);
/// assert!(catalog.classify("geomean").is_err());
///
/// catalog.register_aggregate("geomean");
/// assert_eq!(catalog.classify("geomean").unwrap(), ExpressionType::WindowAggregate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCatalog {
	aggregates: BTreeSet<String>,
}

impl FunctionCatalog {
	/// Creates a catalog holding the built-in aggregates.
	pub fn new() -> Self {
		Self {
			aggregates: BUILTIN_AGGREGATES.iter().map(|s| s.to_string()).collect(),
		}
	}

	/// Creates a catalog with the built-ins plus the aggregates listed in `settings`.
	pub fn from_settings(settings: &WindowSettings) -> Self {
		let mut catalog = Self::new();
		for name in &settings.aggregates {
			catalog.register_aggregate(name.as_str());
		}
		catalog
	}

	/// Registers an additional aggregate name.
	///
	/// Dedicated window functions keep precedence over a registered aggregate
	/// of the same name.
	pub fn register_aggregate(&mut self, name: impl Into<String>) -> &mut Self {
		let name = name.into().to_lowercase();
		if window_function_type(&name).is_some() {
			tracing::warn!(
				"aggregate '{}' is shadowed by the window function of the same name",
				name
			);
		}
		self.aggregates.insert(name);
		self
	}

	/// Whether `name` is a known aggregate.
	#[must_use]
	pub fn is_aggregate(&self, name: &str) -> bool {
		self.aggregates.contains(&name.to_lowercase())
	}

	/// Maps a function name onto its expression type.
	///
	/// # Errors
	///
	/// Returns [`QueryError::UnknownFunction`] when the name is neither a
	/// window function nor a registered aggregate.
	pub fn classify(&self, name: &str) -> QueryResult<ExpressionType> {
		let lowered = name.to_lowercase();
		if let Some(function_type) = window_function_type(&lowered) {
			return Ok(function_type);
		}
		if self.aggregates.contains(&lowered) {
			return Ok(ExpressionType::WindowAggregate);
		}
		tracing::debug!(function = name, "unrecognized window function");
		Err(QueryError::UnknownFunction(name.to_string()))
	}
}

impl Default for FunctionCatalog {
	fn default() -> Self {
		Self::new()
	}
}
