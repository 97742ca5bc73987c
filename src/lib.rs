//! # math_drill_gen
//!
//! Offline generators for arithmetic practice: printable worksheets and
//! gamified quests.
//!
//! ## How it works
//!
//! **Worksheets.** Build a [`WorksheetSettings`] (operation(s), difficulty or
//! explicit range, subtypes, filters) and call [`generate_worksheet_problems`].
//! Each problem is drawn by bounded rejection sampling: operands are shaped by
//! subtype or multiplication table, repaired (no negative differences, exact
//! division), then checked against the carry-over, triviality and duplicate
//! filters. After 100 failed attempts the generator gives up on the filters
//! and returns a problem tagged [`Generation::Fallback`] whose answer is still
//! correct.
//!
//! **Quests.** [`QuestGenerator::generate_quest`] turns `(theme, number)` into
//! a seed and builds the quest path, title and rewards from a
//! [`SeededRandom`] linear congruential generator, so the same pair yields the
//! same quest on every machine. [`ProgressTracker`] walks a quest forward,
//! scores answers with a combo bonus and unlocks achievements.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{
//!     check_answer, generate_worksheet_problems, Operation, QuestGenerator, ThemeType,
//!     WorksheetSettings,
//! };
//!
//! // Minimal, only the operation is required:
//! let problems = generate_worksheet_problems(&WorksheetSettings::new(Operation::Addition));
//! assert_eq!(problems.len(), 12);
//! assert!(check_answer(&problems[0], problems[0].answer));
//!
//! // Reproducible, carry-over practice:
//! let settings = WorksheetSettings {
//!     carry_over: true,
//!     problems_per_page: 5,
//!     rng_seed: Some(42),
//!     ..WorksheetSettings::new(Operation::Addition)
//! };
//! for p in generate_worksheet_problems(&settings) {
//!     println!("{p}");
//! }
//!
//! // Quests are a pure function of (theme, number):
//! let quests = QuestGenerator::new();
//! let a = quests.generate_quest(ThemeType::Space, 7);
//! let b = quests.generate_quest(ThemeType::Space, 7);
//! assert_eq!(a, b);
//! println!("{}: {} problems", a.title, a.total_problems);
//! ```

pub mod error;
pub mod quest;
pub mod worksheet;

pub use error::{DrillError, Result};
pub use quest::{
    NodeAdvance, NodeType, PlayerProgress, ProgressTracker, Quest, QuestBonuses, QuestGenerator,
    QuestNode, SeededRandom, ThemeType,
};
pub use worksheet::{
    check_answer, generate_worksheet_problems, Difficulty, Generation, NumberRange, Operation,
    Placeholder, Problem, WorksheetSettings,
};
