//! Type definitions shared by window expressions.
//!
//! - [`WindowBoundary`], [`BoundaryKind`], [`FrameUnit`], [`FrameDirection`]
//!   and [`ExcludeMode`]: frame specification
//! - [`OrderByNode`], [`OrderType`], [`NullOrder`]: sort specifications
//! - [`BinOper`]: binary operators
//! - [`ExpressionType`] and [`FunctionCatalog`]: function classification

mod function;
mod operators;
mod order;
mod window;

pub use function::{ExpressionType, FunctionCatalog};
pub use operators::BinOper;
pub use order::{NullOrder, OrderByNode, OrderType};
pub use window::{
	BoundaryKind, ExcludeMode, FrameDirection, FrameUnit, WindowBoundary, is_default_frame,
};

#[cfg(test)]
mod tests;
