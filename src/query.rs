//! Window expression module.
//!
//! This module provides the window function call model, its SQL renderer,
//! the binder and the codec.
//!
//! # Examples
//!
//! ```rust
//! use casement::query::{ExpressionType, FunctionCatalog, WindowExpression};
//!
//! let window = WindowExpression::new("row_number", vec![]);
//! assert_eq!(window.to_string(), "row_number() OVER ()");
//! assert_eq!(
//!     FunctionCatalog::new().classify(&window.function_name).unwrap(),
//!     ExpressionType::WindowRowNumber
//! );
//! ```

#[cfg(feature = "query")]
pub use casement_query::*;
