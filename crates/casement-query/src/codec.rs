//! Binary persistence of window expressions.
//!
//! The byte layout is an implementation detail. The only contract is that
//! decoding what was encoded yields an equal [`WindowExpression`]. Decoded
//! expressions are validated before they are handed out.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::expr::ParsedExpression;
use crate::settings::WindowSettings;
use crate::value::Value;
use crate::window::WindowExpression;

/// Encoding used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
	/// MessagePack via `rmp-serde`.
	#[default]
	MessagePack,
	/// JSON via `serde_json`. Cannot carry NaN or infinite DOUBLE literals.
	Json,
}

/// Encoder/decoder for [`WindowExpression`]s.
///
/// # Examples
///
/// ```rust
/// use casement_query::codec::{WindowCodec, WireFormat};
/// use casement_query::{ParsedExpression, WindowExpression};
///
/// let codec = WindowCodec::new(WireFormat::Json);
/// let window = WindowExpression::new("count", vec![ParsedExpression::star()]);
///
/// let bytes = codec.encode(&window).unwrap();
/// assert_eq!(codec.decode(&bytes).unwrap(), window);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCodec {
	format: WireFormat,
}

impl WindowCodec {
	/// Creates a codec for the given format.
	pub fn new(format: WireFormat) -> Self {
		Self { format }
	}

	/// Creates a codec for the format selected in `settings`.
	pub fn from_settings(settings: &WindowSettings) -> Self {
		Self::new(settings.wire_format)
	}

	/// The format this codec reads and writes.
	pub fn format(&self) -> WireFormat {
		self.format
	}

	/// Encodes a window expression.
	///
	/// # Errors
	///
	/// Returns [`QueryError::Encode`] if serialization fails, or if the format
	/// is JSON and the expression holds a non-finite DOUBLE literal.
	pub fn encode(&self, window: &WindowExpression) -> QueryResult<Vec<u8>> {
		let bytes = match self.format {
			WireFormat::MessagePack => {
				rmp_serde::to_vec(window).map_err(|e| QueryError::Encode(e.to_string()))?
			}
			WireFormat::Json => {
				// serde_json writes NaN and infinities as null
				if window
					.expressions()
					.any(|expr| expr.any(&mut is_non_finite_double))
				{
					return Err(QueryError::Encode(format!(
						"non-finite DOUBLE literal in {}() has no JSON form, use MessagePack",
						window.function_name
					)));
				}
				serde_json::to_vec(window).map_err(|e| QueryError::Encode(e.to_string()))?
			}
		};
		tracing::debug!(
			format = ?self.format,
			function = %window.function_name,
			len = bytes.len(),
			"encoded window expression"
		);
		Ok(bytes)
	}

	/// Decodes and validates a window expression.
	///
	/// # Errors
	///
	/// - [`QueryError::Decode`] if the bytes are not a window expression in
	///   this codec's format
	/// - [`QueryError::InvalidWindow`] if the decoded expression fails
	///   [`WindowExpression::validate`]
	pub fn decode(&self, bytes: &[u8]) -> QueryResult<WindowExpression> {
		let window: WindowExpression = match self.format {
			WireFormat::MessagePack => {
				rmp_serde::from_slice(bytes).map_err(|e| QueryError::Decode(e.to_string()))?
			}
			WireFormat::Json => {
				serde_json::from_slice(bytes).map_err(|e| QueryError::Decode(e.to_string()))?
			}
		};
		window.validate()?;
		tracing::debug!(
			format = ?self.format,
			function = %window.function_name,
			"decoded window expression"
		);
		Ok(window)
	}
}

fn is_non_finite_double(expr: &ParsedExpression) -> bool {
	matches!(expr, ParsedExpression::Constant(Value::Double(Some(v))) if !v.is_finite())
}

/// Encodes a window expression as MessagePack.
///
/// # Errors
///
/// Returns [`QueryError::Encode`] if serialization fails.
pub fn encode(window: &WindowExpression) -> QueryResult<Vec<u8>> {
	WindowCodec::default().encode(window)
}

/// Decodes a window expression from MessagePack.
///
/// # Errors
///
/// See [`WindowCodec::decode`].
pub fn decode(bytes: &[u8]) -> QueryResult<WindowExpression> {
	WindowCodec::default().decode(bytes)
}
