//! Named rolls built on top of plain [`DiceSpec`] rolling: advantage, disadvantage, ability score generation, and
//! the d20 checks a character sheet makes.

use super::{DiceSpec, Error, RollKind, RollOutcome, Roller};
use crate::ability::modifier_for;

/// Spec rolled for advantage and disadvantage (2d20)
const TWO_D20: DiceSpec = DiceSpec::from_parts(2, 20, 0);

/// Number of ability scores a character has
pub const ABILITY_COUNT: usize = 6;

/// Rolls two d20s and keeps the higher one.
///
/// Both raw rolls stay in the outcome in the order they were rolled, but [`RollOutcome::sum()`] and
/// [`RollOutcome::total()`] are the kept value only.
///
/// # Examples
/// ```
/// use dicebag::dice::{derived::advantage, roller::Iter as IterRoller};
///
/// let outcome = advantage(&mut IterRoller::new([14, 7]));
/// assert_eq!(outcome.rolls(), &[14, 7]);
/// assert_eq!(outcome.total(), 14);
/// assert_eq!(outcome.label(), "2d20 (Advantage)");
/// ```
#[must_use]
pub fn advantage(roller: &mut impl Roller) -> RollOutcome {
	let rolls = roller.roll_dice(TWO_D20.count(), TWO_D20.sides());
	RollOutcome::from_spec_and_rolls(TWO_D20, rolls, RollKind::Advantage)
}

/// Rolls two d20s and keeps the lower one. See [`advantage()`] for the shape of the outcome.
///
/// # Examples
/// ```
/// use dicebag::dice::{derived::disadvantage, roller::Iter as IterRoller};
///
/// let outcome = disadvantage(&mut IterRoller::new([14, 7]));
/// assert_eq!(outcome.total(), 7);
/// ```
#[must_use]
pub fn disadvantage(roller: &mut impl Roller) -> RollOutcome {
	let rolls = roller.roll_dice(TWO_D20.count(), TWO_D20.sides());
	RollOutcome::from_spec_and_rolls(TWO_D20, rolls, RollKind::Disadvantage)
}

/// Generates a single ability score by rolling 4d6 and dropping the lowest die.
///
/// # Examples
/// ```
/// use dicebag::dice::{derived::ability_score, roller::Iter as IterRoller};
///
/// assert_eq!(ability_score(&mut IterRoller::new([3, 6, 1, 5])), 14);
/// ```
#[must_use]
pub fn ability_score(roller: &mut impl Roller) -> u8 {
	let mut rolls = roller.roll_dice(4, 6);
	rolls.sort_unstable_by(|a, b| b.cmp(a));

	let kept: u16 = rolls.iter().take(3).sum();
	u8::try_from(kept).unwrap_or(u8::MAX)
}

/// Generates a full set of ability scores, each one independently with [`ability_score()`].
#[must_use]
pub fn ability_scores(roller: &mut impl Roller) -> [u8; ABILITY_COUNT] {
	core::array::from_fn(|_| ability_score(roller))
}

/// Rolls 1d20 plus the score's ability modifier, adding the proficiency bonus if the character is proficient.
///
/// # Errors
/// If the combined modifier is out of bounds, [`Error::ModifierOutOfBounds`] is returned.
///
/// # Examples
/// ```
/// use dicebag::dice::{derived::ability_check, roller::Val as ValRoller};
///
/// // Score 16 gives +3, plus a proficiency bonus of 2
/// let outcome = ability_check(&mut ValRoller(10), 16, 2, true)?;
/// assert_eq!(outcome.label(), "1d20+5");
/// assert_eq!(outcome.total(), 15);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
pub fn ability_check(
	roller: &mut impl Roller,
	score: u8,
	proficiency_bonus: u8,
	proficient: bool,
) -> Result<RollOutcome, Error> {
	let bonus = if proficient { i32::from(proficiency_bonus) } else { 0 };
	let modifier = modifier_for(score.into()).saturating_add(bonus);
	d20_with(roller, modifier)
}

/// Rolls a saving throw, which works exactly like an [`ability_check()`].
///
/// # Errors
/// See [`ability_check()`].
#[inline]
pub fn saving_throw(
	roller: &mut impl Roller,
	score: u8,
	proficiency_bonus: u8,
	proficient: bool,
) -> Result<RollOutcome, Error> {
	ability_check(roller, score, proficiency_bonus, proficient)
}

/// Rolls 1d20 plus an attack bonus.
///
/// # Errors
/// If the bonus is out of bounds, [`Error::ModifierOutOfBounds`] is returned.
#[inline]
pub fn attack(roller: &mut impl Roller, attack_bonus: i32) -> Result<RollOutcome, Error> {
	d20_with(roller, attack_bonus)
}

/// Rolls 1d20 plus a dexterity modifier for initiative.
///
/// # Errors
/// If the modifier is out of bounds, [`Error::ModifierOutOfBounds`] is returned.
#[inline]
pub fn initiative(roller: &mut impl Roller, dex_modifier: i32) -> Result<RollOutcome, Error> {
	d20_with(roller, dex_modifier)
}

/// Parses a damage dice expression, stacks a damage bonus onto it, and rolls it.
///
/// # Errors
/// If the expression doesn't parse or the combined modifier is out of bounds, an error variant is returned.
///
/// # Examples
/// ```
/// use dicebag::dice::{derived::damage, roller::Val as ValRoller};
///
/// let outcome = damage(&mut ValRoller(3), "2d6+1", 2)?;
/// assert_eq!(outcome.label(), "2d6+3");
/// assert_eq!(outcome.total(), 9);
/// # Ok::<(), dicebag::parse::Error>(())
/// ```
#[cfg(feature = "parse")]
pub fn damage(roller: &mut impl Roller, dice: &str, bonus: i32) -> Result<RollOutcome, crate::parse::Error> {
	let spec = dice.parse::<DiceSpec>()?.add_modifier(bonus)?;
	Ok(roller.roll(&spec))
}

/// Rolls 1d20 with the given modifier.
fn d20_with(roller: &mut impl Roller, modifier: i32) -> Result<RollOutcome, Error> {
	let spec = DiceSpec::new(1, 20, modifier)?;
	Ok(roller.roll(&spec))
}
