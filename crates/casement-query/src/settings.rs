//! Settings for window expression handling.
//!
//! Settings are plain serde structures, usually loaded from a TOML document:
//!
//! ```toml
//! aggregates = ["geomean", "histogram"]
//! wire_format = "json"
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::WireFormat;
use crate::error::QueryResult;

/// Window expression settings.
///
/// # Examples
///
/// ```rust
/// use casement_query::codec::WireFormat;
/// use casement_query::settings::WindowSettings;
///
/// let settings = WindowSettings::from_toml_str(r#"aggregates = ["geomean"]"#).unwrap();
/// assert_eq!(settings.aggregates, vec!["geomean".to_string()]);
/// assert_eq!(settings.wire_format, WireFormat::MessagePack);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
	/// Aggregate function names registered on top of the built-in ones.
	pub aggregates: Vec<String>,
	/// Encoding used by [`WindowCodec`](crate::codec::WindowCodec).
	pub wire_format: WireFormat,
}

impl WindowSettings {
	/// Parses settings from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`QueryError::Config`](crate::QueryError::Config) if the
	/// document is not valid TOML or does not match the settings layout.
	pub fn from_toml_str(s: &str) -> QueryResult<Self> {
		Ok(toml::from_str(s)?)
	}
}
