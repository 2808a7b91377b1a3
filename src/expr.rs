//! Entry points for going from dice expression text straight to a rolled outcome, and describing the results.

use alloc::string::String;

#[cfg(feature = "parse")]
use crate::parse::Error as ParseError;
use crate::dice::{DiceSpec, RollOutcome, Roller};

/// Parses a dice expression and rolls it with a fresh, entropy-seeded [fastrand] roller.
///
/// Requires the `std`, `parse`, and `fastrand` features (all enabled by default).
///
/// # Errors
/// If the expression is malformed or out of bounds, an error variant is returned and nothing is rolled.
///
/// # Examples
/// ```
/// let outcome = dicebag::evaluate("2d6+3")?;
/// assert_eq!(outcome.rolls().len(), 2);
/// assert!(outcome.rolls().iter().all(|roll| (1..=6).contains(roll)));
/// assert_eq!(outcome.total(), outcome.sum() + 3);
///
/// assert!(dicebag::evaluate("").is_err());
/// assert!(dicebag::evaluate("0d6").is_err());
/// # Ok::<(), dicebag::parse::Error>(())
/// ```
#[cfg(all(feature = "std", feature = "parse", feature = "fastrand"))]
pub fn evaluate(text: &str) -> Result<RollOutcome, ParseError> {
	evaluate_using(text, &mut crate::dice::roller::FastRand::default())
}

/// Parses a dice expression and rolls it with the given roller.
///
/// # Errors
/// If the expression is malformed or out of bounds, an error variant is returned and nothing is rolled.
///
/// # Examples
/// ```
/// use dicebag::{dice::roller::Iter as IterRoller, evaluate_using};
///
/// let outcome = evaluate_using("3d8-2", &mut IterRoller::new([1, 1, 2]))?;
/// assert_eq!(outcome.sum(), 4);
/// assert_eq!(outcome.total(), 2);
/// assert_eq!(outcome.label(), "3d8-2");
/// # Ok::<(), dicebag::parse::Error>(())
/// ```
#[cfg(feature = "parse")]
pub fn evaluate_using(text: &str, roller: &mut impl Roller) -> Result<RollOutcome, ParseError> {
	let spec = text.parse::<DiceSpec>()?;
	Ok(execute_spec(&spec, roller))
}

/// Rolls an already-built spec with the given roller. Equivalent to [`Roller::roll()`].
#[must_use]
#[inline]
pub fn execute_spec(spec: &DiceSpec, roller: &mut impl Roller) -> RollOutcome {
	roller.roll(spec)
}

/// Trait to allow creation of expanded descriptions with an optional max number of individual listed results where
/// applicable
pub trait Describe {
	/// Builds a detailed description of the result.
	///
	/// If `list_limit` is specified and there are more results than it, the list of results should be truncated and
	/// appended with "X more..." (where X is the remaining result count past the max).
	#[must_use]
	fn describe(&self, list_limit: Option<usize>) -> String;
}
