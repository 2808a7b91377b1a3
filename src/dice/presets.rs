//! Ready-made specs for the standard polyhedral dice and a few common damage rolls.

use super::DiceSpec;

/// Sides of the standard polyhedral dice, smallest first
pub const STANDARD_DIE_SIDES: [u16; 7] = [4, 6, 8, 10, 12, 20, 100];

/// 1d4
pub const D4: DiceSpec = DiceSpec::from_parts(1, 4, 0);

/// 1d6
pub const D6: DiceSpec = DiceSpec::from_parts(1, 6, 0);

/// 1d8
pub const D8: DiceSpec = DiceSpec::from_parts(1, 8, 0);

/// 1d10
pub const D10: DiceSpec = DiceSpec::from_parts(1, 10, 0);

/// 1d12
pub const D12: DiceSpec = DiceSpec::from_parts(1, 12, 0);

/// 1d20
pub const D20: DiceSpec = DiceSpec::from_parts(1, 20, 0);

/// 1d100
pub const D100: DiceSpec = DiceSpec::from_parts(1, 100, 0);

/// Shortsword damage (1d6)
pub const SHORTSWORD: DiceSpec = D6;

/// Longsword damage (1d8)
pub const LONGSWORD: DiceSpec = D8;

/// Greatsword damage (2d6)
pub const GREATSWORD: DiceSpec = DiceSpec::from_parts(2, 6, 0);

/// Fireball damage (8d6)
pub const FIREBALL: DiceSpec = DiceSpec::from_parts(8, 6, 0);

/// Looks up the single-die preset for a standard number of sides.
///
/// # Examples
/// ```
/// use dicebag::dice::presets;
///
/// assert_eq!(presets::standard(20), Some(presets::D20));
/// assert_eq!(presets::standard(7), None);
/// ```
#[must_use]
pub const fn standard(sides: u16) -> Option<DiceSpec> {
	match sides {
		4 => Some(D4),
		6 => Some(D6),
		8 => Some(D8),
		10 => Some(D10),
		12 => Some(D12),
		20 => Some(D20),
		100 => Some(D100),
		_ => None,
	}
}
