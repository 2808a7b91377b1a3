use std::{
	env,
	io::{self, Write},
	process::ExitCode,
};

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::Parser;
use dicebag::{
	ability::Modifier,
	dice::{derived, roller::FastRand as FastRandRoller, Roller},
	expr::Describe,
	RollOutcome,
};

fn main() -> ExitCode {
	let args = env::args();
	let input = if args.len() > 1 {
		// Obtain the expression by combining all args passed to the executable, so that it can be left unquoted
		// even with spaces. The first argument is ignored since it is typically the name of the executable itself.
		args.skip(1).collect::<Vec<String>>().join(" ")
	} else {
		let mut lines = io::stdin().lines();

		// If there isn't already input available in stdin, display a prompt for it
		if lines.size_hint().1.is_none() {
			print!("Enter dice expression: ");
			let _ = io::stdout().flush();
		}

		// Grab the first line available from stdin
		match lines.next() {
			Some(Ok(line)) => line,
			Some(Err(err)) => {
				eprintln!("Unable to read input: {err}");
				return ExitCode::FAILURE;
			}
			None => String::new(),
		}
	};

	println!("Input: {input}");
	let mut roller = FastRandRoller::default();

	match input.trim().to_lowercase().as_str() {
		"adv" | "advantage" => print_outcome(&derived::advantage(&mut roller)),
		"dis" | "disadvantage" => print_outcome(&derived::disadvantage(&mut roller)),
		"stats" => {
			let scores = derived::ability_scores(&mut roller);
			for score in scores {
				println!("{score:>2} ({})", Modifier::for_score(score.into()));
			}
		}
		_ => match dicebag::parser().parse(input.as_str()).into_result() {
			Ok(raw) => match raw.validate() {
				Ok(spec) => {
					println!("Parsed: {spec}");
					print_outcome(&roller.roll(&spec));
				}
				Err(err) => {
					eprintln!("Invalid roll: {err}");
					return ExitCode::FAILURE;
				}
			},
			Err(parse_errs) => {
				for err in parse_errs {
					let span = err.span().start..err.span().end;
					let _ = Report::build(ReportKind::Error, span.clone())
						.with_message("not a valid dice expression")
						.with_label(
							Label::new(span)
								.with_message(err.to_string())
								.with_color(Color::Red),
						)
						.finish()
						.eprint(Source::from(&input));
				}
				return ExitCode::FAILURE;
			}
		},
	}

	ExitCode::SUCCESS
}

/// Prints the description and total of an outcome.
fn print_outcome(outcome: &RollOutcome) {
	println!("Described: {}", outcome.describe(Some(20)));
	println!("Total: {}", outcome.total());
}
