use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operations and number ranges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "-",
            Operation::Multiplication => "×",
            Operation::Division       => "÷",
        }
    }

    /// Short prefix used in problem IDs (e.g. `ADD-0F3A91C2`).
    pub fn id_prefix(self) -> &'static str {
        match self {
            Operation::Addition       => "ADD",
            Operation::Subtraction    => "SUB",
            Operation::Multiplication => "MUL",
            Operation::Division       => "DIV",
        }
    }

    /// Integer result of `lhs <op> rhs`. Division floors toward negative
    /// infinity; a zero divisor yields 0. Results saturate at the `i64`
    /// bounds.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Addition       => lhs.saturating_add(rhs),
            Operation::Subtraction    => lhs.saturating_sub(rhs),
            Operation::Multiplication => lhs.saturating_mul(rhs),
            Operation::Division       => floor_div(lhs, rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition       => write!(f, "Addition"),
            Operation::Subtraction    => write!(f, "Subtraction"),
            Operation::Multiplication => write!(f, "Multiplication"),
            Operation::Division       => write!(f, "Division"),
        }
    }
}

fn floor_div(lhs: i64, rhs: i64) -> i64 {
    if rhs == 0 {
        return 0;
    }
    // Only `i64::MIN / -1` overflows.
    let Some(q) = lhs.checked_div(rhs) else {
        return i64::MAX;
    };
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        q - 1
    } else {
        q
    }
}

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    /// Largest operand magnitude the generator draws. Keeps every sum,
    /// product and scaled dividend well inside `i64`.
    pub const LIMIT: i64 = 1_000_000;

    pub const fn new(min: i64, max: i64) -> Self {
        NumberRange { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn is_bounded(&self) -> bool {
        self.min.abs_diff(0) <= Self::LIMIT as u64 && self.max.abs_diff(0) <= Self::LIMIT as u64
    }

    /// Both bounds pulled into `-LIMIT..=LIMIT`.
    pub fn clamped(&self) -> NumberRange {
        NumberRange {
            min: self.min.clamp(-Self::LIMIT, Self::LIMIT),
            max: self.max.clamp(-Self::LIMIT, Self::LIMIT),
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Range both operands are drawn from when no explicit override is set.
    pub fn default_range(self) -> NumberRange {
        match self {
            Difficulty::Easy   => NumberRange::new(1, 10),
            Difficulty::Medium => NumberRange::new(1, 20),
            Difficulty::Hard   => NumberRange::new(1, 100),
            Difficulty::Expert => NumberRange::new(1, 1000),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

// ---------------------------------------------------------------------------
// Operand-shape subtypes
// ---------------------------------------------------------------------------
//
// Notation follows German primary-school worksheets:
// E = Einer (ones), Z = Zehner (whole tens), ZE = two-digit, HZE = three-digit.

/// Digit-width shape shared by the addition and subtraction subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnShape {
    OnesOnes,
    TensOnes,
    TwoDigitOnes,
    TwoDigitTens,
    TwoDigitTwoDigit,
    ThreeDigitThreeDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdditionSubtype {
    #[serde(rename = "E+E")]
    OnesOnes,
    #[serde(rename = "Z+E")]
    TensOnes,
    #[serde(rename = "ZE+E")]
    TwoDigitOnes,
    #[serde(rename = "ZE+Z")]
    TwoDigitTens,
    #[serde(rename = "ZE+ZE")]
    TwoDigitTwoDigit,
    #[serde(rename = "HZE+HZE")]
    ThreeDigitThreeDigit,
}

impl AdditionSubtype {
    pub fn shape(self) -> ColumnShape {
        match self {
            AdditionSubtype::OnesOnes             => ColumnShape::OnesOnes,
            AdditionSubtype::TensOnes             => ColumnShape::TensOnes,
            AdditionSubtype::TwoDigitOnes         => ColumnShape::TwoDigitOnes,
            AdditionSubtype::TwoDigitTens         => ColumnShape::TwoDigitTens,
            AdditionSubtype::TwoDigitTwoDigit     => ColumnShape::TwoDigitTwoDigit,
            AdditionSubtype::ThreeDigitThreeDigit => ColumnShape::ThreeDigitThreeDigit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubtractionSubtype {
    #[serde(rename = "E-E")]
    OnesOnes,
    #[serde(rename = "Z-E")]
    TensOnes,
    #[serde(rename = "ZE-E")]
    TwoDigitOnes,
    #[serde(rename = "ZE-Z")]
    TwoDigitTens,
    #[serde(rename = "ZE-ZE")]
    TwoDigitTwoDigit,
    #[serde(rename = "HZE-HZE")]
    ThreeDigitThreeDigit,
}

impl SubtractionSubtype {
    pub fn shape(self) -> ColumnShape {
        match self {
            SubtractionSubtype::OnesOnes             => ColumnShape::OnesOnes,
            SubtractionSubtype::TensOnes             => ColumnShape::TensOnes,
            SubtractionSubtype::TwoDigitOnes         => ColumnShape::TwoDigitOnes,
            SubtractionSubtype::TwoDigitTens         => ColumnShape::TwoDigitTens,
            SubtractionSubtype::TwoDigitTwoDigit     => ColumnShape::TwoDigitTwoDigit,
            SubtractionSubtype::ThreeDigitThreeDigit => ColumnShape::ThreeDigitThreeDigit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplicationSubtype {
    /// Configured range or multiplication tables.
    Standard,
    /// Two-digit × one-digit, the shape practised with written multiplication.
    Written,
    /// Two-digit × two-digit.
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionSubtype {
    /// Exact division over the configured range or tables.
    Standard,
    /// One-digit divisor, two-digit quotient, exact.
    Long,
    /// Dividend need not be a multiple of the divisor.
    Remainder,
}

/// Per-operation subtype lists. An empty list means "no subtype shaping".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSubtypes {
    #[serde(default)]
    pub addition: Vec<AdditionSubtype>,
    #[serde(default)]
    pub subtraction: Vec<SubtractionSubtype>,
    #[serde(default)]
    pub multiplication: Vec<MultiplicationSubtype>,
    #[serde(default)]
    pub division: Vec<DivisionSubtype>,
}

impl OperationSubtypes {
    pub fn is_empty(&self) -> bool {
        self.addition.is_empty()
            && self.subtraction.is_empty()
            && self.multiplication.is_empty()
            && self.division.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// The field a learner has to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    Operand1,
    Operand2,
    Answer,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Placeholder::Operand1, Placeholder::Operand2, Placeholder::Answer];
}

/// Whether a problem satisfied every configured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    #[default]
    Constrained,
    /// The attempt bound was exhausted; operands were sampled without
    /// filters. The answer is still correct for the returned operands.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub operand1: i64,
    pub operand2: i64,
    pub operation: Operation,
    pub answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
    #[serde(default)]
    pub generation: Generation,
}

impl Problem {
    /// True value of the field the learner is asked for.
    pub fn expected_value(&self) -> i64 {
        match self.placeholder {
            Some(Placeholder::Operand1) => self.operand1,
            Some(Placeholder::Operand2) => self.operand2,
            Some(Placeholder::Answer) | None => self.answer,
        }
    }

    /// Key used for duplicate detection within a worksheet.
    pub fn key(&self) -> (i64, Operation, i64) {
        (self.operand1, self.operation, self.operand2)
    }

    pub fn is_fallback(&self) -> bool {
        self.generation == Generation::Fallback
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |field: Placeholder, value: i64| {
            if self.placeholder == Some(field) {
                "__".to_string()
            } else {
                value.to_string()
            }
        };
        write!(
            f,
            "{} {} {} = {}",
            show(Placeholder::Operand1, self.operand1),
            self.operation.symbol(),
            show(Placeholder::Operand2, self.operand2),
            show(Placeholder::Answer, self.answer),
        )
    }
}

// ---------------------------------------------------------------------------
// Worksheet settings
// ---------------------------------------------------------------------------

fn default_problems_per_page() -> usize {
    12
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetSettings {
    pub operation: Operation,
    /// More than one entry turns the worksheet into a mixed one.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Draw from all four operations regardless of `operations`.
    #[serde(default)]
    pub mixed_operations: bool,
    #[serde(default)]
    pub operation_subtypes: OperationSubtypes,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Overrides the difficulty's default range when set.
    #[serde(default)]
    pub number_range: Option<NumberRange>,
    #[serde(default = "default_problems_per_page")]
    pub problems_per_page: usize,
    /// Restrict multiplication/division to these tables (1..=10).
    #[serde(default)]
    pub multiplication_tables: Vec<u32>,
    #[serde(default)]
    pub carry_over: bool,
    #[serde(default)]
    pub suppress_trivial: bool,
    #[serde(default)]
    pub avoid_duplicates: bool,
    #[serde(default)]
    pub placeholders: bool,
    /// `Some` makes the worksheet reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl WorksheetSettings {
    /// Minimal settings: one operation, everything else defaulted.
    pub fn new(operation: Operation) -> Self {
        WorksheetSettings {
            operation,
            operations: Vec::new(),
            mixed_operations: false,
            operation_subtypes: OperationSubtypes::default(),
            difficulty: Difficulty::Easy,
            number_range: None,
            problems_per_page: default_problems_per_page(),
            multiplication_tables: Vec::new(),
            carry_over: false,
            suppress_trivial: false,
            avoid_duplicates: false,
            placeholders: false,
            rng_seed: None,
        }
    }

    /// Range used for unconstrained sampling and for the fallback path,
    /// clamped to [`NumberRange::LIMIT`].
    pub fn effective_range(&self) -> NumberRange {
        self.number_range
            .unwrap_or_else(|| self.difficulty.default_range())
            .clamped()
    }

    /// Operations a problem may be drawn from, without duplicates.
    pub fn operation_pool(&self) -> Vec<Operation> {
        if self.mixed_operations {
            return Operation::ALL.to_vec();
        }
        let mut pool: Vec<Operation> = Vec::with_capacity(self.operations.len());
        for op in &self.operations {
            if !pool.contains(op) {
                pool.push(*op);
            }
        }
        if pool.is_empty() {
            pool.push(self.operation);
        }
        pool
    }

    pub fn is_mixed(&self) -> bool {
        self.operation_pool().len() > 1
    }
}

impl From<Operation> for WorksheetSettings {
    fn from(operation: Operation) -> Self {
        WorksheetSettings::new(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(Operation::Division.apply(7, 2), 3);
        assert_eq!(Operation::Division.apply(-7, 2), -4);
        assert_eq!(Operation::Division.apply(7, -2), -4);
        assert_eq!(Operation::Division.apply(6, 3), 2);
        assert_eq!(Operation::Division.apply(5, 0), 0);
    }

    #[test]
    fn apply_saturates_instead_of_overflowing() {
        assert_eq!(Operation::Addition.apply(i64::MAX, 1), i64::MAX);
        assert_eq!(Operation::Subtraction.apply(i64::MIN, 1), i64::MIN);
        assert_eq!(Operation::Multiplication.apply(i64::MAX / 2, 3), i64::MAX);
        assert_eq!(Operation::Division.apply(i64::MIN, -1), i64::MAX);
    }

    #[test]
    fn effective_range_is_clamped_to_the_operand_limit() {
        let s = WorksheetSettings {
            number_range: Some(NumberRange::new(-i64::MAX, i64::MAX)),
            ..WorksheetSettings::new(Operation::Addition)
        };
        assert_eq!(s.effective_range(), NumberRange::new(-NumberRange::LIMIT, NumberRange::LIMIT));
        assert!(!NumberRange::new(0, NumberRange::LIMIT + 1).is_bounded());
        assert!(NumberRange::new(-NumberRange::LIMIT, NumberRange::LIMIT).is_bounded());
    }

    #[test]
    fn expected_value_follows_placeholder() {
        let mut p = Problem {
            id: "ADD-00000000".into(),
            operand1: 7,
            operand2: 8,
            operation: Operation::Addition,
            answer: 15,
            placeholder: Some(Placeholder::Operand1),
            generation: Generation::Constrained,
        };
        assert_eq!(p.expected_value(), 7);
        p.placeholder = Some(Placeholder::Operand2);
        assert_eq!(p.expected_value(), 8);
        p.placeholder = None;
        assert_eq!(p.expected_value(), 15);
    }

    #[test]
    fn display_blanks_the_placeholder() {
        let p = Problem {
            id: "SUB-00000000".into(),
            operand1: 12,
            operand2: 5,
            operation: Operation::Subtraction,
            answer: 7,
            placeholder: Some(Placeholder::Operand2),
            generation: Generation::Constrained,
        };
        assert_eq!(p.to_string(), "12 - __ = 7");
    }

    #[test]
    fn operation_pool_prefers_mixed_then_list_then_single() {
        let mut s = WorksheetSettings::new(Operation::Addition);
        assert_eq!(s.operation_pool(), vec![Operation::Addition]);
        assert!(!s.is_mixed());

        s.operations = vec![Operation::Subtraction, Operation::Subtraction, Operation::Division];
        assert_eq!(s.operation_pool(), vec![Operation::Subtraction, Operation::Division]);
        assert!(s.is_mixed());

        s.mixed_operations = true;
        assert_eq!(s.operation_pool().len(), 4);
    }

    #[test]
    fn subtypes_use_worksheet_notation() {
        let json = serde_json::to_string(&AdditionSubtype::TwoDigitTens).unwrap();
        assert_eq!(json, "\"ZE+Z\"");
        let parsed: SubtractionSubtype = serde_json::from_str("\"HZE-HZE\"").unwrap();
        assert_eq!(parsed.shape(), ColumnShape::ThreeDigitThreeDigit);
    }
}
