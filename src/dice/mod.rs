//! All functionality for directly creating dice specs, rolling them, and working with their resulting outcomes.
//!
//! This is the home of the dice "primitives". For going straight from expression text to a rolled outcome, see
//! [`evaluate`].
//!
//! [`evaluate`]: crate::expr::evaluate

pub mod derived;
pub mod outcome;
pub mod pool;
pub mod presets;
pub mod roller;

use core::{fmt, ops::RangeInclusive};

pub use self::{
	outcome::{RollKind, RollOutcome},
	pool::Pool,
	roller::Roller,
};

/// Allowed range for the number of dice in a [`DiceSpec`]
pub const COUNT_BOUNDS: RangeInclusive<u32> = 1..=100;

/// Allowed range for the number of sides per die in a [`DiceSpec`]
pub const SIDES_BOUNDS: RangeInclusive<u32> = 1..=1000;

/// Allowed range for the flat modifier of a [`DiceSpec`]
pub const MODIFIER_BOUNDS: RangeInclusive<i32> = -999..=999;

/// A validated request to roll some number of identical dice and add a flat modifier to their sum.
///
/// The fields are only reachable through getters, so a `DiceSpec` that exists is always within [`COUNT_BOUNDS`],
/// [`SIDES_BOUNDS`], and [`MODIFIER_BOUNDS`].
///
/// # Examples
/// ```
/// use dicebag::DiceSpec;
///
/// let spec = DiceSpec::new(2, 20, 5)?;
/// assert_eq!(spec.count(), 2);
/// assert_eq!(spec.sides(), 20);
/// assert_eq!(spec.modifier(), 5);
/// assert_eq!(spec.to_string(), "2d20+5");
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSpec {
	/// Number of dice to roll
	count: u8,

	/// Number of sides for each die
	sides: u16,

	/// Flat value added to the sum of the rolls
	modifier: i16,
}

impl DiceSpec {
	/// Creates a new dice spec, checking every field against its bounds.
	///
	/// # Errors
	/// If any of the values lies outside of its allowed range, the matching out-of-bounds error variant is returned.
	/// Nothing is ever clamped.
	///
	/// # Examples
	/// ```
	/// use dicebag::dice::{DiceSpec, Error};
	///
	/// assert!(DiceSpec::new(3, 6, -2).is_ok());
	/// assert!(matches!(DiceSpec::new(0, 6, 0), Err(Error::CountOutOfBounds(0))));
	/// assert!(matches!(DiceSpec::new(1, 1001, 0), Err(Error::SidesOutOfBounds(1001))));
	/// assert!(matches!(DiceSpec::new(1, 6, -1000), Err(Error::ModifierOutOfBounds(-1000))));
	/// ```
	pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, Error> {
		let count = u8::try_from(count)
			.ok()
			.filter(|_| COUNT_BOUNDS.contains(&count))
			.ok_or(Error::CountOutOfBounds(count))?;
		let sides = u16::try_from(sides)
			.ok()
			.filter(|_| SIDES_BOUNDS.contains(&sides))
			.ok_or(Error::SidesOutOfBounds(sides))?;
		let modifier = i16::try_from(modifier)
			.ok()
			.filter(|_| MODIFIER_BOUNDS.contains(&modifier))
			.ok_or(Error::ModifierOutOfBounds(modifier))?;

		Ok(Self {
			count,
			sides,
			modifier,
		})
	}

	/// Creates a spec for `count` dice with `sides` sides each and no modifier.
	///
	/// # Errors
	/// See [`Self::new()`].
	#[inline]
	pub fn plain(count: u32, sides: u32) -> Result<Self, Error> {
		Self::new(count, sides, 0)
	}

	/// Builds a spec from values that are known to be in bounds at compile time.
	/// Only used for presets.
	pub(crate) const fn from_parts(count: u8, sides: u16, modifier: i16) -> Self {
		Self {
			count,
			sides,
			modifier,
		}
	}

	/// Number of dice to roll
	#[must_use]
	#[inline]
	pub const fn count(&self) -> u8 {
		self.count
	}

	/// Number of sides for each die
	#[must_use]
	#[inline]
	pub const fn sides(&self) -> u16 {
		self.sides
	}

	/// Flat value added to the sum of the rolls
	#[must_use]
	#[inline]
	pub const fn modifier(&self) -> i16 {
		self.modifier
	}

	/// Creates a copy of this spec with its modifier replaced.
	///
	/// # Errors
	/// If the new modifier is out of bounds, [`Error::ModifierOutOfBounds`] is returned.
	#[inline]
	pub fn with_modifier(&self, modifier: i32) -> Result<Self, Error> {
		Self::new(self.count.into(), self.sides.into(), modifier)
	}

	/// Creates a copy of this spec with `bonus` stacked on top of its existing modifier.
	///
	/// # Errors
	/// If the combined modifier is out of bounds, [`Error::ModifierOutOfBounds`] is returned.
	///
	/// # Examples
	/// ```
	/// use dicebag::DiceSpec;
	///
	/// let spec = DiceSpec::new(1, 8, 2)?.add_modifier(-5)?;
	/// assert_eq!(spec.to_string(), "1d8-3");
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	pub fn add_modifier(&self, bonus: i32) -> Result<Self, Error> {
		let modifier = i32::from(self.modifier).saturating_add(bonus);
		self.with_modifier(modifier)
	}

	/// Largest total a roll of this spec can produce
	#[must_use]
	#[expect(clippy::arithmetic_side_effects, reason = "Bounds keep this far below i32::MAX")]
	pub fn max_total(&self) -> i32 {
		i32::from(self.count) * i32::from(self.sides) + i32::from(self.modifier)
	}

	/// Smallest total a roll of this spec can produce
	#[must_use]
	#[expect(clippy::arithmetic_side_effects, reason = "Bounds keep this far below i32::MAX")]
	pub fn min_total(&self) -> i32 {
		i32::from(self.count) + i32::from(self.modifier)
	}

	/// Creates a new dice spec builder.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}
}

impl Default for DiceSpec {
	/// Creates the default spec (1d20).
	#[inline]
	fn default() -> Self {
		Self::from_parts(1, 20, 0)
	}
}

impl fmt::Display for DiceSpec {
	/// Formats the spec as its canonical expression, e.g. `2d20+5`, `3d8-2`, or `1d6`.
	/// A zero modifier is left out entirely.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)?;
		if self.modifier != 0 {
			write!(f, "{:+}", self.modifier)?;
		}
		Ok(())
	}
}

/// An error resulting from a dice operation
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The number of dice is outside of [`COUNT_BOUNDS`].
	#[error("dice count {0} is outside of 1..=100")]
	CountOutOfBounds(u32),

	/// The number of sides is outside of [`SIDES_BOUNDS`].
	#[error("die sides {0} is outside of 1..=1000")]
	SidesOutOfBounds(u32),

	/// The modifier is outside of [`MODIFIER_BOUNDS`].
	#[error("modifier {0} is outside of -999..=999")]
	ModifierOutOfBounds(i32),
}

/// Builds [`DiceSpec`]s with a fluent interface, validating everything at the end.
///
/// Useful when a spec is assembled piece by piece (e.g. from steppers in a UI) rather than parsed from text.
///
/// # Examples
///
/// ## Basic dice
/// ```
/// use dicebag::DiceSpec;
///
/// let spec = DiceSpec::builder().count(2).sides(6).build()?;
/// assert_eq!(spec, DiceSpec::new(2, 6, 0)?);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
///
/// ## With a modifier
/// ```
/// use dicebag::DiceSpec;
///
/// let spec = DiceSpec::builder().count(4).sides(8).modifier(-1).build()?;
/// assert_eq!(spec.to_string(), "4d8-1");
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
///
/// ## Invalid values
/// ```
/// use dicebag::dice::{DiceSpec, Error};
///
/// let result = DiceSpec::builder().count(101).sides(6).build();
/// assert!(matches!(result, Err(Error::CountOutOfBounds(101))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builder {
	/// Number of dice to roll
	count: u32,

	/// Number of sides for each die
	sides: u32,

	/// Flat value added to the sum of the rolls
	modifier: i32,
}

impl Default for Builder {
	/// Creates a builder that starts out as 1d20.
	#[inline]
	fn default() -> Self {
		Self {
			count: 1,
			sides: 20,
			modifier: 0,
		}
	}
}

impl Builder {
	/// Sets the number of dice to roll.
	#[must_use]
	pub const fn count(mut self, count: u32) -> Self {
		self.count = count;
		self
	}

	/// Sets the number of sides per die.
	#[must_use]
	pub const fn sides(mut self, sides: u32) -> Self {
		self.sides = sides;
		self
	}

	/// Sets the flat modifier.
	#[must_use]
	pub const fn modifier(mut self, modifier: i32) -> Self {
		self.modifier = modifier;
		self
	}

	/// Finalizes the spec.
	///
	/// # Errors
	/// See [`DiceSpec::new()`].
	#[inline]
	pub fn build(self) -> Result<DiceSpec, Error> {
		DiceSpec::new(self.count, self.sides, self.modifier)
	}
}
