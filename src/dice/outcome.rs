//! Results of rolling a [`DiceSpec`].

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

use super::DiceSpec;
use crate::expr::Describe;

/// Rule used to turn a set of rolls into the outcome's [`sum`](RollOutcome::sum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RollKind {
	/// All rolls are added together.
	#[default]
	Sum,

	/// Only the highest roll counts.
	Advantage,

	/// Only the lowest roll counts.
	Disadvantage,
}

impl RollKind {
	/// Applies the selection rule to a set of rolls.
	/// Keeping from an empty set of rolls results in 0.
	#[must_use]
	pub fn select(self, rolls: &[u16]) -> i32 {
		match self {
			Self::Sum => rolls.iter().copied().map(i32::from).sum(),
			Self::Advantage => rolls.iter().copied().max().map_or(0, i32::from),
			Self::Disadvantage => rolls.iter().copied().min().map_or(0, i32::from),
		}
	}

	/// Text appended to a spec's label to indicate the rule, if any
	#[must_use]
	pub const fn suffix(self) -> &'static str {
		match self {
			Self::Sum => "",
			Self::Advantage => " (Advantage)",
			Self::Disadvantage => " (Disadvantage)",
		}
	}
}

/// Representation of the result from rolling a [`DiceSpec`]
///
/// Outcomes are plain values: everything is computed once when they're created and only exposed through getters
/// afterwards, so [`Self::sum()`] and [`Self::total()`] always agree with [`Self::rolls()`].
///
/// # Examples
/// ```
/// use dicebag::dice::{DiceSpec, RollKind, RollOutcome};
///
/// let spec = DiceSpec::new(2, 6, 3)?;
/// let outcome = RollOutcome::from_spec_and_rolls(spec, vec![4, 5], RollKind::Sum);
/// assert_eq!(outcome.sum(), 9);
/// assert_eq!(outcome.total(), 12);
/// assert_eq!(outcome.label(), "2d6+3");
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
	/// Spec that was rolled to produce this
	spec: DiceSpec,

	/// Each individual die roll, in the order they were made
	rolls: Vec<u16>,

	/// Rule used to compute the sum
	kind: RollKind,

	/// Value of the rolls after applying the rule
	sum: i32,

	/// Sum plus the spec's modifier
	total: i32,

	/// Canonical text for the spec that was rolled
	label: String,
}

impl RollOutcome {
	/// Creates a new outcome from a spec and the values rolled for it, computing the sum, total, and label.
	#[must_use]
	#[expect(clippy::arithmetic_side_effects, reason = "Spec bounds keep totals far within i32")]
	pub fn from_spec_and_rolls(spec: DiceSpec, rolls: Vec<u16>, kind: RollKind) -> Self {
		let sum = kind.select(&rolls);
		let total = sum + i32::from(spec.modifier());
		let label = format!("{spec}{}", kind.suffix());

		Self {
			spec,
			rolls,
			kind,
			sum,
			total,
			label,
		}
	}

	/// Spec that was rolled to produce this outcome
	#[must_use]
	#[inline]
	pub const fn spec(&self) -> &DiceSpec {
		&self.spec
	}

	/// Each individual die roll, in the order they were made
	#[must_use]
	#[inline]
	pub fn rolls(&self) -> &[u16] {
		&self.rolls
	}

	/// Rule that was used to compute [`Self::sum()`]
	#[must_use]
	#[inline]
	pub const fn kind(&self) -> RollKind {
		self.kind
	}

	/// Sum of all rolls, or the single kept roll for advantage and disadvantage
	#[must_use]
	#[inline]
	pub const fn sum(&self) -> i32 {
		self.sum
	}

	/// Flat modifier copied from the spec
	#[must_use]
	#[inline]
	pub const fn modifier(&self) -> i16 {
		self.spec.modifier()
	}

	/// Final result: [`Self::sum()`] plus [`Self::modifier()`]
	#[must_use]
	#[inline]
	pub const fn total(&self) -> i32 {
		self.total
	}

	/// Canonical text for what was rolled, e.g. `2d20+5` or `2d20 (Advantage)`
	#[must_use]
	#[inline]
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Position of the roll that was kept for advantage/disadvantage outcomes.
	/// Ties keep the earliest roll. Summed outcomes keep every roll, so this is `None` for them.
	///
	/// # Examples
	/// ```
	/// use dicebag::dice::{DiceSpec, RollKind, RollOutcome};
	///
	/// let spec = DiceSpec::new(2, 20, 0)?;
	/// let outcome = RollOutcome::from_spec_and_rolls(spec, vec![14, 7], RollKind::Advantage);
	/// assert_eq!(outcome.kept_index(), Some(0));
	/// assert_eq!(outcome.total(), 14);
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	#[must_use]
	pub fn kept_index(&self) -> Option<usize> {
		match self.kind {
			RollKind::Sum => None,
			RollKind::Advantage | RollKind::Disadvantage => {
				self.rolls.iter().position(|&roll| i32::from(roll) == self.sum)
			}
		}
	}

	/// Consumes the outcome and returns the individual rolls.
	#[must_use]
	#[inline]
	pub fn into_rolls(self) -> Vec<u16> {
		self.rolls
	}
}

impl Describe for RollOutcome {
	/// Builds a string of the label and a list of all of the individual rolls.
	/// For advantage and disadvantage, the roll that wasn't kept is appended with ` (d)`.
	///
	/// If `list_limit` is specified and there are more rolls than it, the list of rolls will be truncated and
	/// appended with "X more..." (where X is the remaining roll count past the max).
	///
	/// # Examples
	/// ```
	/// use dicebag::{dice::{DiceSpec, RollKind, RollOutcome}, expr::Describe};
	///
	/// let spec = DiceSpec::new(4, 6, 0)?;
	/// let outcome = RollOutcome::from_spec_and_rolls(spec, vec![6, 2, 5, 3], RollKind::Sum);
	/// assert_eq!(outcome.describe(None), "4d6[6, 2, 5, 3]");
	/// assert_eq!(outcome.describe(Some(2)), "4d6[6, 2, 2 more...]");
	///
	/// let spec = DiceSpec::new(2, 20, 0)?;
	/// let outcome = RollOutcome::from_spec_and_rolls(spec, vec![3, 17], RollKind::Disadvantage);
	/// assert_eq!(outcome.describe(None), "2d20 (Disadvantage)[3, 17 (d)]");
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let total_rolls = self.rolls.len();
		let truncated_rolls = total_rolls.saturating_sub(list_limit);
		let kept = self.kept_index();

		format!(
			"{}[{}{}]",
			self.label,
			self.rolls
				.iter()
				.enumerate()
				.take(list_limit)
				.map(|(idx, roll)| match kept {
					Some(kept) if kept != idx => format!("{roll} (d)"),
					_ => roll.to_string(),
				})
				.collect::<Vec<_>>()
				.join(", "),
			if truncated_rolls > 0 {
				format!(", {truncated_rolls} more...")
			} else {
				String::new()
			}
		)
	}
}

impl fmt::Display for RollOutcome {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}
