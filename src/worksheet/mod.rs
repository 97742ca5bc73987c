//! Worksheet engine: constrained-random arithmetic problem generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Operations, ranges, subtypes, problems and worksheet settings |
//! | `subtypes`  | Subtype range tables, whole-tens sampling, carry and triviality checks |
//! | `generator` | `generate_worksheet_problems()` with bounded rejection sampling, `check_answer()` |
//! | `config`    | JSON loading and validation of `WorksheetSettings` |

pub mod config;
pub mod generator;
pub mod models;
pub mod subtypes;

pub use generator::{check_answer, generate_problem, generate_worksheet_problems, MAX_ATTEMPTS};
pub use models::{
    AdditionSubtype, Difficulty, DivisionSubtype, Generation, MultiplicationSubtype, NumberRange,
    Operation, OperationSubtypes, Placeholder, Problem, SubtractionSubtype, WorksheetSettings,
};
