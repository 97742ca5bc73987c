//! Operand-shape tables and the predicates the generator filters on.
//!
//! Each subtype maps to a fixed pair of operand ranges. Shapes with a `Z`
//! operand (whole tens) sample that operand from the multiples of ten inside
//! its range rather than from the full range.

use rand::Rng;
use crate::worksheet::models::{
    ColumnShape, DivisionSubtype, MultiplicationSubtype, NumberRange, Operation,
};

/// Operand ranges for one subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeRanges {
    pub operand1: NumberRange,
    pub operand2: NumberRange,
    /// Operand 1 must be a whole ten.
    pub tens1: bool,
    /// Operand 2 must be a whole ten.
    pub tens2: bool,
}

impl SubtypeRanges {
    const fn plain(operand1: NumberRange, operand2: NumberRange) -> Self {
        SubtypeRanges { operand1, operand2, tens1: false, tens2: false }
    }

    /// Sample `(operand1, operand2)` honouring the whole-tens flags.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (i64, i64) {
        let a = if self.tens1 { tens_number(rng, self.operand1) } else { sample(rng, self.operand1) };
        let b = if self.tens2 { tens_number(rng, self.operand2) } else { sample(rng, self.operand2) };
        (a, b)
    }
}

const ONES: NumberRange = NumberRange::new(1, 9);
const TENS: NumberRange = NumberRange::new(10, 90);
const TWO_DIGIT: NumberRange = NumberRange::new(10, 99);
const THREE_DIGIT: NumberRange = NumberRange::new(100, 999);

/// Ranges for the column shapes shared by addition and subtraction.
pub fn column_ranges(shape: ColumnShape) -> SubtypeRanges {
    match shape {
        ColumnShape::OnesOnes => SubtypeRanges::plain(ONES, ONES),
        ColumnShape::TensOnes => SubtypeRanges { tens1: true, ..SubtypeRanges::plain(TENS, ONES) },
        ColumnShape::TwoDigitOnes => SubtypeRanges::plain(TWO_DIGIT, ONES),
        ColumnShape::TwoDigitTens => SubtypeRanges { tens2: true, ..SubtypeRanges::plain(TWO_DIGIT, TENS) },
        ColumnShape::TwoDigitTwoDigit => SubtypeRanges::plain(TWO_DIGIT, TWO_DIGIT),
        ColumnShape::ThreeDigitThreeDigit => SubtypeRanges::plain(THREE_DIGIT, THREE_DIGIT),
    }
}

/// Ranges for a multiplication subtype; `None` means use the configured
/// range or tables.
pub fn multiplication_ranges(subtype: MultiplicationSubtype) -> Option<SubtypeRanges> {
    match subtype {
        MultiplicationSubtype::Standard => None,
        MultiplicationSubtype::Written  => Some(SubtypeRanges::plain(TWO_DIGIT, NumberRange::new(2, 9))),
        MultiplicationSubtype::Large    => Some(SubtypeRanges::plain(TWO_DIGIT, TWO_DIGIT)),
    }
}

/// Build `(dividend, divisor)` for a division subtype; `None` means use the
/// configured range or tables.
pub fn division_operands<R: Rng>(
    rng: &mut R,
    subtype: DivisionSubtype,
    range: NumberRange,
) -> Option<(i64, i64)> {
    match subtype {
        DivisionSubtype::Standard => None,
        DivisionSubtype::Long => {
            let divisor = rng.gen_range(2..=9i64);
            let quotient = sample(rng, TWO_DIGIT);
            Some((divisor * quotient, divisor))
        }
        DivisionSubtype::Remainder => {
            let divisor = sample(rng, range).max(2);
            let upper = range.max.max(divisor) * 2;
            let dividend = rng.gen_range(divisor..=upper);
            Some((dividend, divisor))
        }
    }
}

/// Uniform inclusive sample.
pub fn sample<R: Rng>(rng: &mut R, range: NumberRange) -> i64 {
    if range.min >= range.max {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// Uniform sample among the multiples of ten inside `range`. Falls back to a
/// plain sample when the range holds no multiple of ten.
pub fn tens_number<R: Rng>(rng: &mut R, range: NumberRange) -> i64 {
    let lo = (range.min as f64 / 10.0).ceil() as i64 * 10;
    let hi = (range.max as f64 / 10.0).floor() as i64 * 10;
    if lo > hi {
        return sample(rng, range);
    }
    let steps = (hi - lo) / 10;
    lo + rng.gen_range(0..=steps) * 10
}

/// Pedagogically uninteresting operand pairs.
pub fn is_trivial(operand1: i64, operand2: i64, operation: Operation) -> bool {
    match operation {
        Operation::Addition => {
            operand1 == 0 || operand2 == 0 || (operand1 == 1 && operand2 == 1)
        }
        Operation::Subtraction => operand1 == operand2 || operand2 == 0,
        Operation::Multiplication => {
            operand1 == 0 || operand2 == 0 || operand1 == 1 || operand2 == 1
        }
        Operation::Division => operand2 == 1 || operand1 == 0,
    }
}

/// Column carry (addition) or borrow (subtraction) in the units place.
/// Always false for multiplication and division.
pub fn has_carry_over(operand1: i64, operand2: i64, operation: Operation) -> bool {
    let units1 = operand1.rem_euclid(10);
    let units2 = operand2.rem_euclid(10);
    match operation {
        Operation::Addition    => units1 + units2 >= 10,
        Operation::Subtraction => units1 < units2,
        _                      => false,
    }
}
