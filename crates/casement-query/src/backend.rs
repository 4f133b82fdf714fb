//! SQL rendering backend
//!
//! This module turns window expressions back into canonical SQL text.
//!
//! - [`SqlWriter`]: string accumulator used while rendering
//! - [`WindowParts`]: the view of a window expression that rendering needs
//! - [`render_window`]: the renderer, shared by parsed and bound expressions

mod sql_writer;
mod window_writer;

pub use sql_writer::SqlWriter;
pub use window_writer::{WindowParts, render_window};
