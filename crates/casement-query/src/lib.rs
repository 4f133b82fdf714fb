//! # casement-query
//!
//! In-memory representation of SQL window function calls
//! (`expr(...) OVER (...)`) and their canonical SQL rendering.
//!
//! ## Features
//!
//! - **Typed frames** - Frame boundaries are a tagged [`WindowBoundary`], so an
//!   offset expression exists exactly when the boundary needs one
//! - **Canonical rendering** - The implicit frame
//!   `RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW` is omitted, and
//!   written out again whenever an EXCLUDE clause needs it
//! - **Parsed and bound forms** - [`WindowExpression`] and
//!   [`BoundWindowExpression`] share one renderer
//! - **Function classification** - [`FunctionCatalog`] maps names such as
//!   `row_number` or `lead` to an [`ExpressionType`]
//! - **Binary persistence** - MessagePack or JSON encoding with validation on
//!   decode
//!
//! ## Architecture
//!
//! - [`types`]: frame, ordering, operator and function-type definitions
//! - [`value`]: literal values
//! - [`expr`]: parsed and bound expression trees
//! - [`window`]: window function calls and their builder
//! - [`backend`]: the SQL renderer
//! - [`binder`]: name resolution from parsed to bound form
//! - [`codec`]: encoding and decoding
//! - [`settings`]: TOML-loadable settings
//! - [`error`]: error types
//!
//! ## Quick Start
//!
//! ```rust
//! use casement_query::prelude::*;
//!
//! let window = WindowExpression::builder("lead")
//!     .arg(ParsedExpression::column("x"))
//!     .offset(ParsedExpression::value(2))
//!     .default_value(ParsedExpression::value(0))
//!     .start(BoundaryKind::ExprPrecedingRows)
//!     .start_expr(ParsedExpression::value(3))
//!     .end(BoundaryKind::CurrentRowRows)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     window.to_string(),
//!     "lead(x, 2, 0) OVER (ROWS BETWEEN 3 PRECEDING AND CURRENT ROW)"
//! );
//!
//! let bytes = encode(&window).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), window);
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod value;

// Expression trees
pub mod expr;
pub mod window;

// Rendering
pub mod backend;

// Binding, persistence and configuration
pub mod binder;
pub mod codec;
pub mod settings;

/// Prelude module for convenient imports.
///
/// Import everything from this module to get started quickly:
///
/// ```rust
/// use casement_query::prelude::*;
/// ```
pub mod prelude {
	// Rendering
	pub use crate::backend::{SqlWriter, WindowParts, render_window};
	// Binding
	pub use crate::binder::{BindContext, Binder, TableBinding};
	// Persistence and configuration
	pub use crate::codec::{WindowCodec, WireFormat, decode, encode};
	pub use crate::settings::WindowSettings;
	// Errors
	pub use crate::error::{QueryError, QueryResult};
	// Expression trees
	pub use crate::expr::{BoundExpression, ColumnBinding, ParsedExpression};
	pub use crate::window::{BoundWindowExpression, WindowExpression, WindowExpressionBuilder};
	// Type system
	pub use crate::types::{
		BinOper, BoundaryKind, ExcludeMode, ExpressionType, FrameDirection, FrameUnit,
		FunctionCatalog, NullOrder, OrderByNode, OrderType, WindowBoundary, is_default_frame,
	};
	// Value system
	pub use crate::value::{IntoValue, Value};
}

// Re-export commonly used types at crate root
pub use prelude::*;
