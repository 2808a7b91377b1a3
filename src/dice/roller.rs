//! Abstractions for rolling dice using various means.

use alloc::vec::Vec;
use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::{DiceSpec, RollKind, RollOutcome};

/// Rolls dice - what else is there to say?
///
/// This is the random source for everything in the crate. Rolling never touches any global generator, so passing a
/// seeded or scripted roller makes every roll reproducible.
pub trait Roller {
	/// Rolls a single die with the given number of sides.
	#[must_use]
	fn roll_die(&mut self, sides: u16) -> u16;

	/// Rolls every die in a spec, in order, and sums them up.
	///
	/// A [`DiceSpec`] is always within its bounds, so this can't fail.
	fn roll(&mut self, spec: &DiceSpec) -> RollOutcome
	where
		Self: Sized,
	{
		let rolls = self.roll_dice(spec.count(), spec.sides());
		RollOutcome::from_spec_and_rolls(*spec, rolls, RollKind::Sum)
	}

	/// Rolls `count` dice with `sides` sides each, returning the raw values in the order they were rolled.
	fn roll_dice(&mut self, count: u8, sides: u16) -> Vec<u16>
	where
		Self: Sized,
	{
		let mut rolls = Vec::with_capacity(count.into());
		for _ in 0..count {
			rolls.push(self.roll_die(sides));
		}
		rolls
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use dicebag::dice::{roller::{FastRand as FastRandRoller, Roller}, DiceSpec};
///
/// let mut roller = FastRandRoller::default();
///
/// let spec = DiceSpec::new(4, 6, 0)?;
/// let _ = roller.roll(&spec);
/// let _ = roller.roll(&spec);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use dicebag::dice::{roller::{FastRand as FastRandRoller, Roller}, DiceSpec};
///
/// let spec = DiceSpec::new(4, 6, 0)?;
/// let first = FastRandRoller::with_seed(0x750c38d574400).roll(&spec);
/// let second = FastRandRoller::with_seed(0x750c38d574400).roll(&spec);
/// assert_eq!(first, second);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
///
/// ## Custom fastrand roller
/// ```
/// use dicebag::dice::{roller::{FastRand as FastRandRoller, Roller}, DiceSpec};
/// use fastrand::Rng;
///
/// let rng = Rng::with_seed(0x750c38d574400);
/// let mut roller = FastRandRoller::new(rng);
///
/// let spec = DiceSpec::new(4, 6, 0)?;
/// let _ = roller.roll(&spec);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with.
	#[inline]
	fn roll_die(&mut self, sides: u16) -> u16 {
		if sides > 0 {
			self.0.u16(1..=sides)
		} else {
			0
		}
	}
}

/// Generates rolls that always have a specific value.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Roller, Val as ValRoller}, DiceSpec};
///
/// let mut roller = ValRoller(4);
///
/// let outcome = roller.roll(&DiceSpec::new(3, 6, 1)?);
/// assert_eq!(outcome.rolls(), &[4, 4, 4]);
/// assert_eq!(outcome.total(), 13);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u16);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, _sides: u16) -> u16 {
		self.0
	}
}

/// Generates rolls that always have their max value.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Max as MaxRoller, Roller}, DiceSpec};
///
/// let mut roller = MaxRoller;
///
/// let spec = DiceSpec::new(4, 6, -2)?;
/// let outcome = roller.roll(&spec);
/// assert!(outcome.rolls().iter().all(|&roll| roll == 6));
/// assert_eq!(outcome.total(), spec.max_total());
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of sides).
	#[inline]
	fn roll_die(&mut self, sides: u16) -> u16 {
		sides
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Iter as IterRoller, Roller}, DiceSpec};
///
/// let mut roller = IterRoller::new(vec![1, 2, 3, 4, 10]);
/// let outcome = roller.roll(&DiceSpec::new(5, 10, 0)?);
/// assert_eq!(outcome.rolls(), &[1, 2, 3, 4, 10]);
/// assert!(!roller.can_roll());
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u16>>(Peekable<I>);

impl<I: Iterator<Item = u16>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u16>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn roll_die(&mut self, _sides: u16) -> u16 {
		self.0.next().expect("iterator is finished")
	}
}
