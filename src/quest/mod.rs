//! Quest engine: reproducible quests and player progression.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `seeded`    | Linear congruential RNG that regenerates identically everywhere |
//! | `models`    | Themes, content templates, quest nodes and quests |
//! | `themes`    | Static per-theme content pools (space, dino, medieval, ocean, circus) |
//! | `generator` | `QuestGenerator`: path, title and reward selection from a seed |
//! | `progress`  | `ProgressTracker`: forward-only node progression, combos, achievements |

pub mod generator;
pub mod models;
pub mod progress;
pub mod seeded;
pub mod themes;

pub use generator::QuestGenerator;
pub use models::{
    Boss, Challenge, LocalizedString, NodeType, Quest, QuestBonuses, QuestNode, Rarity, Reward,
    ThemeDictionary, ThemeType,
};
pub use progress::{NodeAdvance, PlayerProgress, ProgressTracker};
pub use seeded::SeededRandom;
