//! Ability modifiers: deriving them from ability scores and displaying them.

use alloc::{format, string::String};
use core::fmt;

/// Calculates the modifier for an ability score: `floor((score - 10) / 2)`.
///
/// Odd scores below 10 round down, away from zero.
///
/// # Examples
/// ```
/// use dicebag::ability::modifier_for;
///
/// assert_eq!(modifier_for(10), 0);
/// assert_eq!(modifier_for(18), 4);
/// assert_eq!(modifier_for(8), -1);
/// assert_eq!(modifier_for(7), -2);
/// ```
#[must_use]
pub const fn modifier_for(score: i32) -> i32 {
	score.saturating_sub(10).div_euclid(2)
}

/// Formats a modifier with an explicit sign. Zero and positive values get a `+`.
///
/// # Examples
/// ```
/// use dicebag::ability::format_modifier;
///
/// assert_eq!(format_modifier(3), "+3");
/// assert_eq!(format_modifier(0), "+0");
/// assert_eq!(format_modifier(-2), "-2");
/// ```
#[must_use]
pub fn format_modifier(modifier: i32) -> String {
	format!("{modifier:+}")
}

/// An ability modifier that displays with its sign
///
/// # Examples
/// ```
/// use dicebag::ability::Modifier;
///
/// assert_eq!(Modifier::for_score(14).to_string(), "+2");
/// assert_eq!(Modifier::for_score(9).to_string(), "-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[expect(clippy::exhaustive_structs, reason = "Newtype around the value")]
pub struct Modifier(pub i32);

impl Modifier {
	/// Creates the modifier for an ability score. See [`modifier_for()`].
	#[must_use]
	#[inline]
	pub const fn for_score(score: i32) -> Self {
		Self(modifier_for(score))
	}
}

impl From<Modifier> for i32 {
	#[inline]
	fn from(modifier: Modifier) -> Self {
		modifier.0
	}
}

impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:+}", self.0)
	}
}
