//! Window frame types.
//!
//! This module defines the building blocks of a window frame:
//! - Frame units (ROWS, RANGE)
//! - Frame boundaries (UNBOUNDED PRECEDING, CURRENT ROW, `<expr>` FOLLOWING, ...)
//! - The flat [`BoundaryKind`] tag used by the execution engine and by
//!   incremental construction
//! - The EXCLUDE clause

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Frame unit for window functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameUnit {
	/// ROWS: frame based on physical row positions.
	Rows,
	/// RANGE: frame based on the ORDER BY value range.
	Range,
}

impl FrameUnit {
	/// Returns the SQL keyword for this unit.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Rows => "ROWS",
			Self::Range => "RANGE",
		}
	}
}

impl fmt::Display for FrameUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Side of the current row a boundary lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameDirection {
	/// Before the current row.
	Preceding,
	/// After the current row.
	Following,
}

impl FrameDirection {
	/// Returns the SQL keyword for this direction.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Preceding => "PRECEDING",
			Self::Following => "FOLLOWING",
		}
	}
}

impl fmt::Display for FrameDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Flat boundary tag combining unit and position.
///
/// `Invalid` is the not-yet-set sentinel used while a window expression is
/// being assembled. It never appears in a finalised [`WindowBoundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryKind {
	/// Not yet set.
	#[default]
	Invalid,
	/// UNBOUNDED PRECEDING
	UnboundedPreceding,
	/// UNBOUNDED FOLLOWING
	UnboundedFollowing,
	/// CURRENT ROW under RANGE
	CurrentRowRange,
	/// CURRENT ROW under ROWS
	CurrentRowRows,
	/// `<expr>` PRECEDING under ROWS
	ExprPrecedingRows,
	/// `<expr>` FOLLOWING under ROWS
	ExprFollowingRows,
	/// `<expr>` PRECEDING under RANGE
	ExprPrecedingRange,
	/// `<expr>` FOLLOWING under RANGE
	ExprFollowingRange,
}

impl BoundaryKind {
	/// Every boundary kind, in declaration order.
	pub const ALL: [BoundaryKind; 9] = [
		Self::Invalid,
		Self::UnboundedPreceding,
		Self::UnboundedFollowing,
		Self::CurrentRowRange,
		Self::CurrentRowRows,
		Self::ExprPrecedingRows,
		Self::ExprFollowingRows,
		Self::ExprPrecedingRange,
		Self::ExprFollowingRange,
	];

	/// Returns the upper-snake name of this kind.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Invalid => "INVALID",
			Self::UnboundedPreceding => "UNBOUNDED_PRECEDING",
			Self::UnboundedFollowing => "UNBOUNDED_FOLLOWING",
			Self::CurrentRowRange => "CURRENT_ROW_RANGE",
			Self::CurrentRowRows => "CURRENT_ROW_ROWS",
			Self::ExprPrecedingRows => "EXPR_PRECEDING_ROWS",
			Self::ExprFollowingRows => "EXPR_FOLLOWING_ROWS",
			Self::ExprPrecedingRange => "EXPR_PRECEDING_RANGE",
			Self::ExprFollowingRange => "EXPR_FOLLOWING_RANGE",
		}
	}

	/// Whether a boundary of this kind carries an offset expression.
	#[must_use]
	pub fn requires_expr(&self) -> bool {
		matches!(
			self,
			Self::ExprPrecedingRows
				| Self::ExprFollowingRows
				| Self::ExprPrecedingRange
				| Self::ExprFollowingRange
		)
	}
}

impl fmt::Display for BoundaryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for BoundaryKind {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| QueryError::InvalidWindow(format!("unknown boundary kind: {}", s)))
	}
}

/// EXCLUDE clause of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExcludeMode {
	/// No EXCLUDE clause.
	#[default]
	NoOther,
	/// EXCLUDE CURRENT ROW
	CurrentRow,
	/// EXCLUDE GROUP
	Group,
	/// EXCLUDE TIES
	Ties,
}

impl ExcludeMode {
	/// Returns the SQL text following `EXCLUDE`, empty for [`ExcludeMode::NoOther`].
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::NoOther => "",
			Self::CurrentRow => "CURRENT ROW",
			Self::Group => "GROUP",
			Self::Ties => "TIES",
		}
	}

	/// Whether an EXCLUDE clause is present.
	#[must_use]
	pub fn is_set(&self) -> bool {
		*self != Self::NoOther
	}
}

impl fmt::Display for ExcludeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Start or end boundary of a window frame.
///
/// The offset expression exists exactly when the boundary is offset-relative,
/// so the expression/kind pairing cannot drift apart.
///
/// # Examples
///
/// ```rust
/// use casement_query::types::{BoundaryKind, FrameUnit, WindowBoundary};
/// use casement_query::ParsedExpression;
///
/// // ROWS ... 3 PRECEDING
/// let start = WindowBoundary::preceding(FrameUnit::Rows, ParsedExpression::value(3));
/// assert_eq!(start.kind(), BoundaryKind::ExprPrecedingRows);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowBoundary<E> {
	/// UNBOUNDED PRECEDING / UNBOUNDED FOLLOWING
	Unbounded(FrameDirection),
	/// CURRENT ROW under the given unit.
	CurrentRow(FrameUnit),
	/// `<expr>` PRECEDING / `<expr>` FOLLOWING under the given unit.
	Offset {
		/// Side of the current row.
		direction: FrameDirection,
		/// ROWS or RANGE.
		unit: FrameUnit,
		/// Offset expression.
		expr: E,
	},
}

impl<E> WindowBoundary<E> {
	/// UNBOUNDED PRECEDING
	pub fn unbounded_preceding() -> Self {
		Self::Unbounded(FrameDirection::Preceding)
	}

	/// UNBOUNDED FOLLOWING
	pub fn unbounded_following() -> Self {
		Self::Unbounded(FrameDirection::Following)
	}

	/// CURRENT ROW
	pub fn current_row(unit: FrameUnit) -> Self {
		Self::CurrentRow(unit)
	}

	/// `<expr>` PRECEDING
	pub fn preceding(unit: FrameUnit, expr: E) -> Self {
		Self::Offset {
			direction: FrameDirection::Preceding,
			unit,
			expr,
		}
	}

	/// `<expr>` FOLLOWING
	pub fn following(unit: FrameUnit, expr: E) -> Self {
		Self::Offset {
			direction: FrameDirection::Following,
			unit,
			expr,
		}
	}

	/// Returns the flat kind of this boundary.
	#[must_use]
	pub fn kind(&self) -> BoundaryKind {
		match self {
			Self::Unbounded(FrameDirection::Preceding) => BoundaryKind::UnboundedPreceding,
			Self::Unbounded(FrameDirection::Following) => BoundaryKind::UnboundedFollowing,
			Self::CurrentRow(FrameUnit::Range) => BoundaryKind::CurrentRowRange,
			Self::CurrentRow(FrameUnit::Rows) => BoundaryKind::CurrentRowRows,
			Self::Offset {
				direction, unit, ..
			} => match (direction, unit) {
				(FrameDirection::Preceding, FrameUnit::Rows) => BoundaryKind::ExprPrecedingRows,
				(FrameDirection::Following, FrameUnit::Rows) => BoundaryKind::ExprFollowingRows,
				(FrameDirection::Preceding, FrameUnit::Range) => BoundaryKind::ExprPrecedingRange,
				(FrameDirection::Following, FrameUnit::Range) => BoundaryKind::ExprFollowingRange,
			},
		}
	}

	/// Builds a boundary from its flat kind and optional offset expression.
	///
	/// # Errors
	///
	/// - [`QueryError::Internal`] if `kind` is [`BoundaryKind::Invalid`]
	/// - [`QueryError::InvalidWindow`] if `expr` is present for a kind without
	///   an offset, or missing for an offset kind
	pub fn from_kind(kind: BoundaryKind, expr: Option<E>) -> QueryResult<Self> {
		let offset = |direction, unit, expr: Option<E>| match expr {
			Some(expr) => Ok(Self::Offset {
				direction,
				unit,
				expr,
			}),
			None => Err(QueryError::InvalidWindow(format!(
				"boundary {} requires an offset expression",
				kind
			))),
		};

		if !kind.requires_expr() && expr.is_some() {
			return Err(QueryError::InvalidWindow(format!(
				"boundary {} does not take an offset expression",
				kind
			)));
		}

		match kind {
			BoundaryKind::Invalid => Err(QueryError::Internal(
				"window boundary was never set".to_string(),
			)),
			BoundaryKind::UnboundedPreceding => Ok(Self::unbounded_preceding()),
			BoundaryKind::UnboundedFollowing => Ok(Self::unbounded_following()),
			BoundaryKind::CurrentRowRange => Ok(Self::CurrentRow(FrameUnit::Range)),
			BoundaryKind::CurrentRowRows => Ok(Self::CurrentRow(FrameUnit::Rows)),
			BoundaryKind::ExprPrecedingRows => offset(FrameDirection::Preceding, FrameUnit::Rows, expr),
			BoundaryKind::ExprFollowingRows => offset(FrameDirection::Following, FrameUnit::Rows, expr),
			BoundaryKind::ExprPrecedingRange => {
				offset(FrameDirection::Preceding, FrameUnit::Range, expr)
			}
			BoundaryKind::ExprFollowingRange => {
				offset(FrameDirection::Following, FrameUnit::Range, expr)
			}
		}
	}

	/// Returns the offset expression, if any.
	pub fn expr(&self) -> Option<&E> {
		match self {
			Self::Offset { expr, .. } => Some(expr),
			_ => None,
		}
	}

	/// Returns the offset expression mutably, if any.
	pub fn expr_mut(&mut self) -> Option<&mut E> {
		match self {
			Self::Offset { expr, .. } => Some(expr),
			_ => None,
		}
	}

	/// Returns the frame unit this boundary pins down, if any.
	///
	/// Unbounded boundaries do not determine a unit.
	#[must_use]
	pub fn unit(&self) -> Option<FrameUnit> {
		match self {
			Self::Unbounded(_) => None,
			Self::CurrentRow(unit) | Self::Offset { unit, .. } => Some(*unit),
		}
	}

	/// Converts the offset expression, keeping the boundary shape.
	pub fn try_map<T, F>(&self, f: F) -> QueryResult<WindowBoundary<T>>
	where
		F: FnOnce(&E) -> QueryResult<T>,
	{
		Ok(match self {
			Self::Unbounded(direction) => WindowBoundary::Unbounded(*direction),
			Self::CurrentRow(unit) => WindowBoundary::CurrentRow(*unit),
			Self::Offset {
				direction,
				unit,
				expr,
			} => WindowBoundary::Offset {
				direction: *direction,
				unit: *unit,
				expr: f(expr)?,
			},
		})
	}
}

/// Whether `start`/`end` spell the SQL-standard implicit frame
/// `RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`.
///
/// Only this exact pair counts. Other pairs are printed even when they are
/// semantically equivalent to the default.
#[must_use]
pub fn is_default_frame<E>(start: &WindowBoundary<E>, end: &WindowBoundary<E>) -> bool {
	matches!(start, WindowBoundary::Unbounded(FrameDirection::Preceding))
		&& matches!(end, WindowBoundary::CurrentRow(FrameUnit::Range))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	type Boundary = WindowBoundary<i64>;

	#[rstest]
	#[case(BoundaryKind::UnboundedPreceding, None)]
	#[case(BoundaryKind::UnboundedFollowing, None)]
	#[case(BoundaryKind::CurrentRowRange, None)]
	#[case(BoundaryKind::CurrentRowRows, None)]
	#[case(BoundaryKind::ExprPrecedingRows, Some(3))]
	#[case(BoundaryKind::ExprFollowingRows, Some(3))]
	#[case(BoundaryKind::ExprPrecedingRange, Some(3))]
	#[case(BoundaryKind::ExprFollowingRange, Some(3))]
	fn test_from_kind_preserves_kind(#[case] kind: BoundaryKind, #[case] expr: Option<i64>) {
		let boundary = Boundary::from_kind(kind, expr).unwrap();
		assert_eq!(boundary.kind(), kind);
		assert_eq!(boundary.expr().copied(), expr);
	}

	#[rstest]
	fn test_from_kind_invalid_is_internal() {
		let err = Boundary::from_kind(BoundaryKind::Invalid, None).unwrap_err();
		assert!(matches!(err, QueryError::Internal(_)));
	}

	#[rstest]
	#[case(BoundaryKind::ExprPrecedingRows, None)]
	#[case(BoundaryKind::ExprFollowingRange, None)]
	#[case(BoundaryKind::CurrentRowRows, Some(1))]
	#[case(BoundaryKind::UnboundedPreceding, Some(1))]
	fn test_from_kind_expr_mismatch(#[case] kind: BoundaryKind, #[case] expr: Option<i64>) {
		let err = Boundary::from_kind(kind, expr).unwrap_err();
		assert!(matches!(err, QueryError::InvalidWindow(_)));
	}

	#[rstest]
	fn test_boundary_kind_name_roundtrip() {
		for kind in BoundaryKind::ALL {
			assert_eq!(kind.to_string().parse::<BoundaryKind>().unwrap(), kind);
		}
		assert_eq!(BoundaryKind::CurrentRowRange.to_string(), "CURRENT_ROW_RANGE");
		assert!("SIDEWAYS".parse::<BoundaryKind>().is_err());
	}

	#[rstest]
	fn test_requires_expr() {
		let with_expr: Vec<_> = BoundaryKind::ALL
			.into_iter()
			.filter(BoundaryKind::requires_expr)
			.collect();
		assert_eq!(with_expr.len(), 4);
		assert!(!BoundaryKind::Invalid.requires_expr());
	}

	#[rstest]
	#[case(Boundary::unbounded_preceding(), Boundary::current_row(FrameUnit::Range), true)]
	#[case(Boundary::unbounded_preceding(), Boundary::current_row(FrameUnit::Rows), false)]
	#[case(Boundary::unbounded_preceding(), Boundary::unbounded_following(), false)]
	#[case(Boundary::current_row(FrameUnit::Range), Boundary::current_row(FrameUnit::Range), false)]
	#[case(
		Boundary::preceding(FrameUnit::Range, 1),
		Boundary::current_row(FrameUnit::Range),
		false
	)]
	fn test_is_default_frame(
		#[case] start: Boundary,
		#[case] end: Boundary,
		#[case] expected: bool,
	) {
		assert_eq!(is_default_frame(&start, &end), expected);
	}

	#[rstest]
	fn test_unit() {
		assert_eq!(Boundary::unbounded_following().unit(), None);
		assert_eq!(Boundary::current_row(FrameUnit::Rows).unit(), Some(FrameUnit::Rows));
		assert_eq!(Boundary::following(FrameUnit::Range, 2).unit(), Some(FrameUnit::Range));
	}

	#[rstest]
	fn test_try_map_keeps_shape() {
		let boundary = Boundary::following(FrameUnit::Rows, 2);
		let mapped = boundary.try_map(|n| Ok(n.to_string())).unwrap();
		assert_eq!(mapped, WindowBoundary::following(FrameUnit::Rows, "2".to_string()));

		let failing = boundary.try_map::<String, _>(|_| Err(QueryError::Internal("no".into())));
		assert!(failing.is_err());
	}

	#[rstest]
	fn test_exclude_mode_text() {
		assert_eq!(ExcludeMode::default(), ExcludeMode::NoOther);
		assert!(!ExcludeMode::NoOther.is_set());
		assert_eq!(ExcludeMode::CurrentRow.to_string(), "CURRENT ROW");
		assert_eq!(ExcludeMode::Group.to_string(), "GROUP");
		assert_eq!(ExcludeMode::Ties.to_string(), "TIES");
	}
}
