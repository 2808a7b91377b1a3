use crate::dice::{
	derived::{ability_check, ability_score, ability_scores, advantage, attack, disadvantage, initiative, saving_throw},
	roller::{FastRand as FastRandRoller, Iter as IterRoller, Val as ValRoller},
	Error, RollKind,
};
use crate::expr::Describe;

#[test]
fn advantage_keeps_highest() {
	let outcome = advantage(&mut IterRoller::new([14, 7]));
	assert_eq!(outcome.rolls(), &[14, 7]);
	assert_eq!(outcome.sum(), 14);
	assert_eq!(outcome.total(), 14);
	assert_eq!(outcome.modifier(), 0);
	assert_eq!(outcome.kind(), RollKind::Advantage);
	assert_eq!(outcome.kept_index(), Some(0));
	assert_eq!(outcome.label(), "2d20 (Advantage)");
	assert_eq!(outcome.describe(None), "2d20 (Advantage)[14, 7 (d)]");
}

#[test]
fn disadvantage_keeps_lowest() {
	let outcome = disadvantage(&mut IterRoller::new([14, 7]));
	assert_eq!(outcome.rolls(), &[14, 7]);
	assert_eq!(outcome.total(), 7);
	assert_eq!(outcome.kind(), RollKind::Disadvantage);
	assert_eq!(outcome.kept_index(), Some(1));
	assert_eq!(outcome.describe(None), "2d20 (Disadvantage)[14 (d), 7]");
}

#[test]
fn ties_keep_the_shared_value() {
	let adv = advantage(&mut IterRoller::new([11, 11]));
	let dis = disadvantage(&mut IterRoller::new([11, 11]));
	assert_eq!(adv.total(), 11);
	assert_eq!(dis.total(), 11);
	assert_eq!(adv.kept_index(), Some(0));
	assert_eq!(adv.describe(None), "2d20 (Advantage)[11, 11 (d)]");
}

#[test]
fn advantage_never_below_either_roll() {
	let mut roller = FastRandRoller::with_seed(0xad7);
	let mut kept_total = 0;

	for _ in 0..1000 {
		let outcome = advantage(&mut roller);
		let (a, b) = (i32::from(outcome.rolls()[0]), i32::from(outcome.rolls()[1]));
		assert_eq!(outcome.total(), a.max(b));
		assert!(outcome.rolls().iter().all(|roll| (1..=20).contains(roll)));
		kept_total += outcome.total();
	}

	// E[max(U1, U2)] for two d20s is 13.825, with a standard error of about 0.15 over 1000 trials
	let mean = f64::from(kept_total) / 1000.0;
	assert!((mean - 13.825).abs() < 0.75, "mean was {mean}");
}

#[test]
fn disadvantage_never_above_either_roll() {
	let mut roller = FastRandRoller::with_seed(0xd15);
	let mut kept_total = 0;

	for _ in 0..1000 {
		let outcome = disadvantage(&mut roller);
		let (a, b) = (i32::from(outcome.rolls()[0]), i32::from(outcome.rolls()[1]));
		assert_eq!(outcome.total(), a.min(b));
		kept_total += outcome.total();
	}

	// E[min(U1, U2)] for two d20s is 7.175
	let mean = f64::from(kept_total) / 1000.0;
	assert!((mean - 7.175).abs() < 0.75, "mean was {mean}");
}

#[test]
fn ability_score_drops_lowest() {
	assert_eq!(ability_score(&mut IterRoller::new([1, 1, 1, 1])), 3);
	assert_eq!(ability_score(&mut IterRoller::new([6, 6, 6, 6])), 18);
	assert_eq!(ability_score(&mut IterRoller::new([2, 5, 4, 3])), 12);
	assert_eq!(ability_score(&mut IterRoller::new([1, 6, 1, 6])), 13);
}

#[test]
fn ability_scores_are_six_independent_rolls() {
	let mut roller = IterRoller::new([
		6, 6, 6, 1, //
		1, 1, 1, 1, //
		2, 3, 4, 5, //
		6, 5, 4, 3, //
		3, 3, 3, 3, //
		5, 1, 5, 1,
	]);
	assert_eq!(ability_scores(&mut roller), [18, 3, 12, 15, 9, 11]);
	assert!(!roller.can_roll());
}

#[test]
fn random_ability_scores_in_range() {
	let mut roller = FastRandRoller::default();
	for _ in 0..200 {
		let scores = ability_scores(&mut roller);
		assert_eq!(scores.len(), 6);
		assert!(scores.iter().all(|score| (3..=18).contains(score)));
	}
}

#[test]
fn ability_checks_add_modifiers() {
	let outcome = ability_check(&mut ValRoller(12), 8, 3, false).unwrap();
	assert_eq!(outcome.label(), "1d20-1");
	assert_eq!(outcome.total(), 11);

	let outcome = ability_check(&mut ValRoller(12), 8, 3, true).unwrap();
	assert_eq!(outcome.label(), "1d20+2");
	assert_eq!(outcome.total(), 14);

	let outcome = saving_throw(&mut ValRoller(1), 10, 2, false).unwrap();
	assert_eq!(outcome.label(), "1d20");
	assert_eq!(outcome.total(), 1);
}

#[test]
fn attack_and_initiative() {
	let outcome = attack(&mut ValRoller(20), 7).unwrap();
	assert_eq!(outcome.label(), "1d20+7");
	assert_eq!(outcome.total(), 27);

	let outcome = initiative(&mut ValRoller(4), -1).unwrap();
	assert_eq!(outcome.label(), "1d20-1");
	assert_eq!(outcome.total(), 3);

	assert_eq!(attack(&mut ValRoller(20), 1000), Err(Error::ModifierOutOfBounds(1000)));
}

#[cfg(feature = "parse")]
#[test]
fn damage_stacks_bonus() {
	use crate::{dice::derived::damage, parse::Error as ParseError};

	let outcome = damage(&mut IterRoller::new([3, 5]), "2d6", 4).unwrap();
	assert_eq!(outcome.label(), "2d6+4");
	assert_eq!(outcome.total(), 12);

	let outcome = damage(&mut ValRoller(1), "1d8+2", -5).unwrap();
	assert_eq!(outcome.label(), "1d8-3");
	assert_eq!(outcome.total(), -2);

	assert!(matches!(
		damage(&mut ValRoller(1), "2d6 fire", 0),
		Err(ParseError::Malformed { .. })
	));
	assert_eq!(
		damage(&mut ValRoller(1), "1d6+999", 1),
		Err(ParseError::OutOfBounds(Error::ModifierOutOfBounds(1000)))
	);
}
