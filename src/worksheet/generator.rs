use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::worksheet::{
    models::{DivisionSubtype, Generation, MultiplicationSubtype, NumberRange, Operation, Placeholder, Problem, WorksheetSettings},
    subtypes::{
        column_ranges, division_operands, has_carry_over, is_trivial, multiplication_ranges, sample,
    },
};

/// Attempts per problem before the filters are abandoned.
pub const MAX_ATTEMPTS: usize = 100;

/// `(operand1, operation, operand2)` triples already placed on a worksheet.
pub type UsedProblems = HashSet<(i64, Operation, i64)>;

/// Where a candidate's operands came from. Division is only forced exact
/// for operands drawn from the plain range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandSource {
    Subtype,
    Table,
    Range,
}

/// Generate a full worksheet.
///
/// One RNG and one duplicate set are shared by every problem on the page.
pub fn generate_worksheet_problems(settings: &WorksheetSettings) -> Vec<Problem> {
    let mut rng: StdRng = match settings.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let mut used = UsedProblems::new();

    let problems: Vec<Problem> = (0..settings.problems_per_page)
        .map(|_| generate_problem(settings, &mut used, &mut rng))
        .collect();

    let fallbacks = problems.iter().filter(|p| p.is_fallback()).count();
    debug!(
        count = problems.len(),
        fallbacks,
        mixed = settings.is_mixed(),
        seed = ?settings.rng_seed,
        "generated worksheet"
    );
    problems
}

/// Generate one problem, retrying operand selection until every configured
/// filter passes or [`MAX_ATTEMPTS`] is reached.
///
/// The accepted triple is recorded in `used`.
pub fn generate_problem<R: Rng>(
    settings: &WorksheetSettings,
    used: &mut UsedProblems,
    rng: &mut R,
) -> Problem {
    let pool = settings.operation_pool();
    let operation = pool[rng.gen_range(0..pool.len())];
    let range = settings.effective_range();

    for _ in 0..MAX_ATTEMPTS {
        let (a, b, source) = draw_operands(rng, settings, operation, range);
        let (a, b) = repair(rng, a, b, operation, source);
        if passes_filters(settings, a, b, operation, used) {
            used.insert((a, operation, b));
            return build_problem(rng, settings, operation, a, b, Generation::Constrained);
        }
    }

    let (a, b) = (sample(rng, range), sample(rng, range));
    let (a, b) = repair(rng, a, b, operation, OperandSource::Range);
    warn!(
        %operation,
        operand1 = a,
        operand2 = b,
        attempts = MAX_ATTEMPTS,
        "filters unsatisfied, falling back to an unconstrained problem"
    );
    used.insert((a, operation, b));
    build_problem(rng, settings, operation, a, b, Generation::Fallback)
}

/// Compare the learner's input against the blanked field, or the answer
/// when nothing is blanked.
pub fn check_answer(problem: &Problem, user_answer: i64) -> bool {
    user_answer == problem.expected_value()
}

fn draw_operands<R: Rng>(
    rng: &mut R,
    settings: &WorksheetSettings,
    operation: Operation,
    range: NumberRange,
) -> (i64, i64, OperandSource) {
    let subtypes = &settings.operation_subtypes;
    match operation {
        Operation::Addition if !subtypes.addition.is_empty() => {
            let st = subtypes.addition[rng.gen_range(0..subtypes.addition.len())];
            let (a, b) = column_ranges(st.shape()).sample(rng);
            return (a, b, OperandSource::Subtype);
        }
        Operation::Subtraction if !subtypes.subtraction.is_empty() => {
            let st = subtypes.subtraction[rng.gen_range(0..subtypes.subtraction.len())];
            let (a, b) = column_ranges(st.shape()).sample(rng);
            return (a, b, OperandSource::Subtype);
        }
        Operation::Multiplication if !subtypes.multiplication.is_empty() => {
            let st = subtypes.multiplication[rng.gen_range(0..subtypes.multiplication.len())];
            if let Some(ranges) = multiplication_ranges(st) {
                let (a, b) = ranges.sample(rng);
                return (a, b, OperandSource::Subtype);
            }
            debug_assert_eq!(st, MultiplicationSubtype::Standard);
        }
        Operation::Division if !subtypes.division.is_empty() => {
            let st = subtypes.division[rng.gen_range(0..subtypes.division.len())];
            if let Some((a, b)) = division_operands(rng, st, range) {
                return (a, b, OperandSource::Subtype);
            }
            debug_assert_eq!(st, DivisionSubtype::Standard);
        }
        _ => {}
    }

    if matches!(operation, Operation::Multiplication | Operation::Division) {
        let tables: Vec<i64> = settings
            .multiplication_tables
            .iter()
            .filter(|t| (1..=10).contains(*t))
            .map(|&t| t as i64)
            .collect();
        if !tables.is_empty() {
            let table = tables[rng.gen_range(0..tables.len())];
            let multiplier = rng.gen_range(1..=10i64);
            let (a, b) = if operation == Operation::Division {
                (table * multiplier, table)
            } else if rng.gen_bool(0.5) {
                (table, multiplier)
            } else {
                (multiplier, table)
            };
            return (a, b, OperandSource::Table);
        }
    }

    (sample(rng, range), sample(rng, range), OperandSource::Range)
}

/// Subtraction never goes negative; division never divides by zero and,
/// for plain-range operands, is always exact.
fn repair<R: Rng>(
    rng: &mut R,
    a: i64,
    b: i64,
    operation: Operation,
    source: OperandSource,
) -> (i64, i64) {
    match operation {
        Operation::Subtraction if b > a => (b, a),
        Operation::Division => {
            let divisor = if b == 0 { 1 } else { b };
            if source == OperandSource::Range {
                (divisor * rng.gen_range(1..=10i64), divisor)
            } else {
                (a, divisor)
            }
        }
        _ => (a, b),
    }
}

fn passes_filters(
    settings: &WorksheetSettings,
    a: i64,
    b: i64,
    operation: Operation,
    used: &UsedProblems,
) -> bool {
    let column_op = matches!(operation, Operation::Addition | Operation::Subtraction);
    if settings.carry_over && column_op && !has_carry_over(a, b, operation) {
        return false;
    }
    if settings.suppress_trivial && is_trivial(a, b, operation) {
        return false;
    }
    if settings.avoid_duplicates && used.contains(&(a, operation, b)) {
        return false;
    }
    true
}

fn build_problem<R: Rng>(
    rng: &mut R,
    settings: &WorksheetSettings,
    operation: Operation,
    operand1: i64,
    operand2: i64,
    generation: Generation,
) -> Problem {
    let placeholder = if settings.placeholders {
        Some(Placeholder::ALL[rng.gen_range(0..Placeholder::ALL.len())])
    } else {
        None
    };
    Problem {
        id: format!("{}-{:08X}", operation.id_prefix(), rng.next_u32()),
        operand1,
        operand2,
        operation,
        answer: operation.apply(operand1, operand2),
        placeholder,
        generation,
    }
}
