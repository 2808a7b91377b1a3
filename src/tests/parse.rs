use chumsky::Parser;

use crate::{
	dice::{roller::Iter as IterRoller, DiceSpec, Error as DiceError},
	evaluate, evaluate_using,
	parse::{Error, RawSpec},
	parser,
};

#[test]
fn plain_dice() {
	assert_eq!(parses("1d20"), DiceSpec::new(1, 20, 0).unwrap());
	assert_eq!(parses("3d6"), DiceSpec::new(3, 6, 0).unwrap());
}

#[test]
fn dice_with_modifiers() {
	assert_eq!(parses("3d6+2"), DiceSpec::new(3, 6, 2).unwrap());
	assert_eq!(parses("2d8-1"), DiceSpec::new(2, 8, -1).unwrap());
	assert_eq!(parses("1d20+999"), DiceSpec::new(1, 20, 999).unwrap());
	assert_eq!(parses("1d20-999"), DiceSpec::new(1, 20, -999).unwrap());
}

#[test]
fn separator_is_case_insensitive() {
	assert_eq!(parses("2D20+5"), parses("2d20+5"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
	assert_eq!(parses("  4d4-3\t\n"), DiceSpec::new(4, 4, -3).unwrap());
	assert_eq!(parses("\r\n 1d6 "), DiceSpec::new(1, 6, 0).unwrap());
}

#[test]
fn leading_zeros_are_accepted() {
	assert_eq!(parses("01d06+007"), DiceSpec::new(1, 6, 7).unwrap());
}

#[test]
fn labels_are_normalized() {
	for (input, label) in [
		("3d6+0", "3d6"),
		("3d6-0", "3d6"),
		(" 2D20+5 ", "2d20+5"),
		("002d8-01", "2d8-1"),
		("1d100", "1d100"),
	] {
		assert_eq!(parses(input).to_string(), label);
	}
}

#[test]
fn malformed_expressions() {
	for input in [
		"",
		"   ",
		"d20",
		"20",
		"2x6",
		"2d",
		"2dd6",
		"-1d6",
		"+1d6",
		"2d6+",
		"2d6-",
		"2d6++1",
		"2d6+-1",
		"2d6 + 3",
		"2 d6",
		"2d6+3d4",
		"2d6*2",
		"1.5d6",
		"1d6.5",
		"2d6kh1",
		"1d20 adv",
		"🎲d6",
		"١d٦",
	] {
		assert!(
			matches!(input.parse::<DiceSpec>(), Err(Error::Malformed { .. })),
			"{input:?} should be malformed"
		);
	}
}

#[test]
fn out_of_bounds_expressions() {
	for (input, err) in [
		("0d6", DiceError::CountOutOfBounds(0)),
		("101d6", DiceError::CountOutOfBounds(101)),
		("1d0", DiceError::SidesOutOfBounds(0)),
		("1d1001", DiceError::SidesOutOfBounds(1001)),
		("1d6+1000", DiceError::ModifierOutOfBounds(1000)),
		("1d6-1000", DiceError::ModifierOutOfBounds(-1000)),
		("999999d999999", DiceError::CountOutOfBounds(999_999)),
		("99999999999999999999d6", DiceError::CountOutOfBounds(u32::MAX)),
		("1d6+99999999999", DiceError::ModifierOutOfBounds(i32::MAX)),
		("1d6-99999999999", DiceError::ModifierOutOfBounds(-i32::MAX)),
	] {
		assert_eq!(input.parse::<DiceSpec>(), Err(Error::OutOfBounds(err)), "{input:?}");
	}
}

#[test]
fn very_long_input() {
	let digits = "9".repeat(10_000);
	assert!(matches!(
		format!("{digits}d6").parse::<DiceSpec>(),
		Err(Error::OutOfBounds(DiceError::CountOutOfBounds(u32::MAX)))
	));
	assert!(matches!(
		format!("1d6{}", "+1".repeat(10_000)).parse::<DiceSpec>(),
		Err(Error::Malformed { .. })
	));
	assert!(matches!(
		"\u{fffd}".repeat(10_000).parse::<DiceSpec>(),
		Err(Error::Malformed { .. })
	));
}

#[test]
fn raw_parser_keeps_unchecked_values() {
	let raw = parser().parse("0d1001-1000").into_result().unwrap();
	assert_eq!(
		raw,
		RawSpec {
			count: 0,
			sides: 1001,
			modifier: -1000
		}
	);
	assert_eq!(raw.validate(), Err(DiceError::CountOutOfBounds(0)));
}

#[test]
fn raw_parser_reports_spans() {
	let errs = parser().parse("2d6 + 3").into_result().unwrap_err();
	assert!(!errs.is_empty());
	assert!(errs.iter().all(|err| err.span().start >= 3));
}

#[test]
fn error_messages() {
	let err = "".parse::<DiceSpec>().unwrap_err();
	assert!(err.to_string().starts_with("not a valid dice expression"));

	let err = "0d6".parse::<DiceSpec>().unwrap_err();
	assert_eq!(err.to_string(), "dice count 0 is outside of 1..=100");
}

#[test]
fn evaluate_1d20() {
	let outcome = evaluate("1d20").unwrap();
	assert_eq!(outcome.rolls().len(), 1);
	assert!((1..=20).contains(&outcome.rolls()[0]));
	assert_eq!(outcome.modifier(), 0);
	assert_eq!(outcome.total(), i32::from(outcome.rolls()[0]));
}

#[test]
fn evaluate_2d6_plus_3() {
	let outcome = evaluate("2d6+3").unwrap();
	assert_eq!(outcome.rolls().len(), 2);
	assert!(outcome.rolls().iter().all(|roll| (1..=6).contains(roll)));
	assert_eq!(
		outcome.total(),
		i32::from(outcome.rolls()[0]) + i32::from(outcome.rolls()[1]) + 3
	);
}

#[test]
fn evaluate_3d8_minus_2() {
	let outcome = evaluate_using("3d8-2", &mut IterRoller::new([2, 5, 8])).unwrap();
	assert_eq!(outcome.total(), 13);
	assert_eq!(outcome.total(), outcome.sum() - 2);
}

#[test]
fn evaluate_rejects_without_rolling() {
	let mut roller = IterRoller::new([]);
	assert!(evaluate_using("", &mut roller).is_err());
	assert!(evaluate_using("0d6", &mut roller).is_err());
	assert!(evaluate("").is_err());
	assert!(evaluate("0d6").is_err());
}

fn parses(input: &str) -> DiceSpec {
	let result = input.parse::<DiceSpec>();
	assert!(result.is_ok(), "{input:?} failed to parse: {result:?}");
	result.unwrap()
}
