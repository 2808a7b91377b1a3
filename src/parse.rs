//! Parser generators and [`FromStr`] implementations for dice expressions like `2d20+5`.
//!
//! Grammar: optional surrounding whitespace, one or more digits (count), `d` or `D`, one or more digits (sides), and
//! optionally a `+` or `-` immediately followed by one or more digits (modifier). Nothing else is allowed in between.

use alloc::{
	string::{String, ToString},
	vec::Vec,
};
use core::str::FromStr;

use chumsky::prelude::*;

use crate::dice::{DiceSpec, Error as DiceError};

/// Dice spec values as they were written, before being checked against the [`DiceSpec`] bounds.
/// Digit runs that don't fit in the integer type are saturated so they always fail the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Mirrors the grammar, which is fixed")]
pub struct RawSpec {
	/// Number of dice as written
	pub count: u32,

	/// Number of sides as written
	pub sides: u32,

	/// Modifier as written, or 0 if there wasn't one
	pub modifier: i32,
}

impl RawSpec {
	/// Checks the values against the dice bounds, producing a real [`DiceSpec`].
	///
	/// # Errors
	/// See [`DiceSpec::new()`].
	#[inline]
	pub fn validate(self) -> Result<DiceSpec, DiceError> {
		DiceSpec::new(self.count, self.sides, self.modifier)
	}
}

/// Generates a parser for a run of ASCII digits as an unsigned integer, saturating at [`u32::MAX`]
fn number<'src>() -> impl Parser<'src, &'src str, u32, extra::Err<Rich<'src, char>>> + Clone {
	text::digits(10)
		.collect::<String>()
		.map(|digits| digits.parse().unwrap_or(u32::MAX))
}

/// Generates a parser that specifically handles dice specs like "d20", "2d20+5", "3D8-2", etc.
pub fn spec_part<'src>() -> impl Parser<'src, &'src str, RawSpec, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for the sign of the modifier, true when negative
	let sign = choice((just('+').to(false), just('-').to(true)));

	number()
		.then_ignore(just('d').or(just('D')))
		.then(number())
		.then(sign.then(number()).or_not())
		.map(|((count, sides), modifier)| {
			let modifier = modifier.map_or(0, |(negative, magnitude)| {
				let magnitude = i32::try_from(magnitude).unwrap_or(i32::MAX);
				if negative {
					magnitude.saturating_neg()
				} else {
					magnitude
				}
			});

			RawSpec {
				count,
				sides,
				modifier,
			}
		})
}

/// Generates a parser that handles a full dice spec with optional surrounding whitespace and expects end of input
pub fn spec<'src>() -> impl Parser<'src, &'src str, RawSpec, extra::Err<Rich<'src, char>>> + Clone {
	spec_part().padded().then_ignore(end())
}

/// Error that can occur while parsing a string into a [`DiceSpec`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The text doesn't follow the dice expression grammar.
	///
	/// # Examples
	/// ```
	/// use dicebag::{parse::Error, DiceSpec};
	///
	/// assert!(matches!("2d6 + 3".parse::<DiceSpec>(), Err(Error::Malformed { .. })));
	/// ```
	#[error("not a valid dice expression: {details}")]
	Malformed {
		/// Messages from the parser about what was expected
		details: String,
	},

	/// The text follows the grammar, but one of its values is out of bounds.
	///
	/// # Examples
	/// ```
	/// use dicebag::{dice::Error as DiceError, parse::Error, DiceSpec};
	///
	/// assert_eq!("0d6".parse::<DiceSpec>(), Err(Error::OutOfBounds(DiceError::CountOutOfBounds(0))));
	/// ```
	#[error(transparent)]
	OutOfBounds(#[from] DiceError),
}

impl FromStr for DiceSpec {
	type Err = Error;

	/// Parses and validates a dice expression.
	///
	/// # Examples
	/// ```
	/// use dicebag::DiceSpec;
	///
	/// let spec: DiceSpec = " 3D6+0 ".parse()?;
	/// assert_eq!(spec, DiceSpec::new(3, 6, 0)?);
	/// assert_eq!(spec.to_string(), "3d6");
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let raw = spec().parse(s).into_result().map_err(|errs| Error::Malformed {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		})?;
		raw.validate().map_err(Error::from)
	}
}
