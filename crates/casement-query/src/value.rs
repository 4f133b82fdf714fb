//! Literal values carried by constant expressions.

mod core;

pub use self::core::{IntoValue, Value};
