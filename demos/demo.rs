//! Worksheet generation end to end.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=math_drill_gen=debug` to see the generator's events,
//! including a warning whenever a problem falls back.
//!
//! ## What it shows
//!
//! - `WorksheetSettings::new(op)` needs only the operation.
//! - `rng_seed: Some(u64)` makes a worksheet reproducible.
//! - Subtypes, tables and filters shape the operands.
//! - A range too small for the filters yields `Fallback` problems whose
//!   answers are still correct.
//! - Settings load from JSON.

use math_drill_gen::{
    check_answer, generate_worksheet_problems, worksheet::AdditionSubtype, Difficulty, Generation,
    NumberRange, Operation, WorksheetSettings,
};
use tracing_subscriber::EnvFilter;

fn print_worksheet(title: &str, settings: &WorksheetSettings) {
    let problems = generate_worksheet_problems(settings);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for p in &problems {
        let marker = match p.generation {
            Generation::Constrained => " ",
            Generation::Fallback    => "*",
        };
        println!("  {marker} {:<14} {:<20} = {}", p.id, p.to_string(), p.expected_value());
    }
    let fallbacks = problems.iter().filter(|p| p.is_fallback()).count();
    if fallbacks > 0 {
        println!("  ({fallbacks} fallback problem(s) marked *)");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── Minimal API ────────────────────────────────────────────────────────
    print_worksheet("Addition, defaults", &WorksheetSettings::new(Operation::Addition));

    // ── Carry-over practice ────────────────────────────────────────────────
    print_worksheet(
        "Addition with carry, range 1-10",
        &WorksheetSettings {
            number_range: Some(NumberRange::new(1, 10)),
            problems_per_page: 5,
            carry_over: true,
            rng_seed: Some(42),
            ..WorksheetSettings::new(Operation::Addition)
        },
    );

    // ── Subtypes ───────────────────────────────────────────────────────────
    let mut column = WorksheetSettings {
        problems_per_page: 6,
        rng_seed: Some(7),
        ..WorksheetSettings::new(Operation::Addition)
    };
    column.operation_subtypes.addition = vec![AdditionSubtype::TensOnes, AdditionSubtype::TwoDigitTwoDigit];
    print_worksheet("Column addition: Z+E and ZE+ZE", &column);

    // ── Tables and placeholders ────────────────────────────────────────────
    print_worksheet(
        "Mixed times tables 3 and 7, blanks",
        &WorksheetSettings {
            operations: vec![Operation::Multiplication, Operation::Division],
            multiplication_tables: vec![3, 7],
            placeholders: true,
            suppress_trivial: true,
            problems_per_page: 8,
            rng_seed: Some(3),
            ..WorksheetSettings::new(Operation::Multiplication)
        },
    );

    // ── Fallback ───────────────────────────────────────────────────────────
    print_worksheet(
        "Unique additions over 1-2 (only four exist)",
        &WorksheetSettings {
            number_range: Some(NumberRange::new(1, 2)),
            problems_per_page: 10,
            avoid_duplicates: true,
            rng_seed: Some(19),
            ..WorksheetSettings::new(Operation::Addition)
        },
    );

    // ── JSON settings ──────────────────────────────────────────────────────
    let json = r#"{ "operation": "subtraction", "difficulty": "hard", "carry_over": true, "problems_per_page": 4, "rng_seed": 11 }"#;
    match WorksheetSettings::from_json(json) {
        Ok(settings) => {
            assert_eq!(settings.difficulty, Difficulty::Hard);
            print_worksheet("Subtraction with borrow, from JSON", &settings);
        }
        Err(e) => eprintln!("invalid settings: {e}"),
    }

    // ── Checking answers ───────────────────────────────────────────────────
    let problems = generate_worksheet_problems(&WorksheetSettings {
        placeholders: true,
        problems_per_page: 1,
        rng_seed: Some(5),
        ..WorksheetSettings::new(Operation::Subtraction)
    });
    let p = &problems[0];
    println!("  {p}");
    println!("  answer {} correct? {}", p.expected_value(), check_answer(p, p.expected_value()));
    println!("  answer {} correct? {}", p.expected_value() + 1, check_answer(p, p.expected_value() + 1));
}
