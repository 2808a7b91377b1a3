//! Rolling several [`DiceSpec`]s together as one combined result.

use alloc::{string::String, vec::Vec};
use core::fmt;

use super::{DiceSpec, RollOutcome, Roller};
use crate::expr::Describe;

/// An ordered collection of dice specs that are rolled together and totalled up, like a "roll all" button for a
/// tray of different dice.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::Max as MaxRoller, DiceSpec, Pool};
///
/// let pool: Pool = [DiceSpec::new(1, 4, 1)?, DiceSpec::new(2, 6, 0)?].into_iter().collect();
/// let outcome = pool.roll(&mut MaxRoller);
/// assert_eq!(outcome.label(), "1d4+1 + 2d6");
/// assert_eq!(outcome.rolls(), vec![4, 6, 6]);
/// assert_eq!(outcome.modifier(), 1);
/// assert_eq!(outcome.total(), 17);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
	/// Specs to roll, in order
	specs: Vec<DiceSpec>,
}

impl Pool {
	/// Creates an empty pool.
	#[must_use]
	#[inline]
	pub const fn new() -> Self {
		Self { specs: Vec::new() }
	}

	/// Adds a spec to the end of the pool.
	#[inline]
	pub fn push(&mut self, spec: DiceSpec) {
		self.specs.push(spec);
	}

	/// Specs in the pool, in the order they'll be rolled
	#[must_use]
	#[inline]
	pub fn specs(&self) -> &[DiceSpec] {
		&self.specs
	}

	/// Checks whether the pool has no specs to roll.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.specs.is_empty()
	}

	/// Rolls every spec in the pool in order.
	#[must_use]
	pub fn roll(&self, roller: &mut impl Roller) -> PoolOutcome {
		PoolOutcome {
			outcomes: self.specs.iter().map(|spec| roller.roll(spec)).collect(),
		}
	}
}

impl FromIterator<DiceSpec> for Pool {
	fn from_iter<T: IntoIterator<Item = DiceSpec>>(iter: T) -> Self {
		Self {
			specs: iter.into_iter().collect(),
		}
	}
}

impl Extend<DiceSpec> for Pool {
	fn extend<T: IntoIterator<Item = DiceSpec>>(&mut self, iter: T) {
		self.specs.extend(iter);
	}
}

impl fmt::Display for Pool {
	/// Formats the pool as each spec's expression joined with ` + `.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (idx, spec) in self.specs.iter().enumerate() {
			if idx > 0 {
				f.write_str(" + ")?;
			}
			write!(f, "{spec}")?;
		}
		Ok(())
	}
}

/// Representation of the result from rolling a [`Pool`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolOutcome {
	/// Outcome of each spec in the pool, in order
	outcomes: Vec<RollOutcome>,
}

impl PoolOutcome {
	/// Outcome of each spec in the pool, in order
	#[must_use]
	#[inline]
	pub fn outcomes(&self) -> &[RollOutcome] {
		&self.outcomes
	}

	/// Every individual die roll across all specs, in the order they were made
	#[must_use]
	pub fn rolls(&self) -> Vec<u16> {
		self.outcomes
			.iter()
			.flat_map(|outcome| outcome.rolls().iter().copied())
			.collect()
	}

	/// Sum of all rolls, before modifiers
	#[must_use]
	pub fn sum(&self) -> i32 {
		self.outcomes.iter().map(RollOutcome::sum).sum()
	}

	/// Combined modifier of every spec
	#[must_use]
	pub fn modifier(&self) -> i32 {
		self.outcomes.iter().map(|outcome| i32::from(outcome.modifier())).sum()
	}

	/// Combined total of every spec
	#[must_use]
	pub fn total(&self) -> i32 {
		self.outcomes.iter().map(RollOutcome::total).sum()
	}

	/// Labels of every spec joined with ` + `
	#[must_use]
	pub fn label(&self) -> String {
		self.outcomes
			.iter()
			.map(RollOutcome::label)
			.collect::<Vec<_>>()
			.join(" + ")
	}
}

impl Describe for PoolOutcome {
	/// Describes each outcome (see [`RollOutcome::describe()`]) and joins them with ` + `.
	/// The list limit applies to each outcome individually.
	///
	/// [`RollOutcome::describe()`]: ./struct.RollOutcome.html#method.describe
	fn describe(&self, list_limit: Option<usize>) -> String {
		self.outcomes
			.iter()
			.map(|outcome| outcome.describe(list_limit))
			.collect::<Vec<_>>()
			.join(" + ")
	}
}

impl fmt::Display for PoolOutcome {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}
