//! # Casement
//!
//! SQL window function calls (`expr(...) OVER (...)`) as typed values, with a
//! canonical SQL renderer, name binding and binary persistence.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `query` - Window expression model, renderer, binder and codec
//!   (`casement-query`)
//!
//! ## Quick Start
//!
//! ```rust
//! use casement::prelude::*;
//!
//! let mut window = WindowExpression::new("sum", vec![ParsedExpression::column("x")]);
//! assert_eq!(window.to_string(), "sum(x) OVER ()");
//!
//! window.exclude = ExcludeMode::Ties;
//! assert_eq!(
//!     window.to_string(),
//!     "sum(x) OVER (RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW EXCLUDE TIES)"
//! );
//! ```

#[cfg(feature = "query")]
pub mod query;

/// Prelude module for convenient imports.
pub mod prelude {
	#[cfg(feature = "query")]
	pub use casement_query::prelude::*;
}

// Re-export commonly used types at crate root
#[cfg(feature = "query")]
pub use casement_query::{
	QueryError, QueryResult, WindowExpression, WindowSettings, decode, encode, render_window,
};
