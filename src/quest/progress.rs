//! Player progress through quests.
//!
//! A [`ProgressTracker`] is an owned value: create one per player and pass it
//! to whatever drives play. It walks a quest's path strictly forward, scores
//! answers with a combo bonus, tracks defeated bosses and evaluates
//! achievements. Storage is the caller's concern; `export_json` and
//! `import_json` only convert to and from a snapshot string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DrillError, Result};
use crate::quest::models::{Boss, LocalizedString, NodeType, Quest, ThemeType};

/// Points for a correct answer with no combo running.
const BASE_POINTS: u32 = 10;

// ---------------------------------------------------------------------------
// Progress state
// ---------------------------------------------------------------------------

/// State of the quest currently being played in one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRun {
    pub quest_id: String,
    pub current_node_index: usize,
    pub nodes_completed: usize,
    pub score: u32,
    pub mistakes: u32,
    pub combo: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProgress {
    pub quests_completed: u32,
    pub current_quest: Option<QuestRun>,
    pub total_score: u64,
    pub bosses_defeated: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_score: u64,
    pub best_combo: u32,
    pub total_bosses_defeated: u32,
    pub perfect_quests: u32,
    pub total_problems: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Quest,
    Combat,
    Collection,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Bosses,
    Quests,
    Score,
    Combo,
    Perfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub kind: RequirementKind,
    pub value: u64,
    /// Restrict quest counting to one theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: LocalizedString,
    pub description: LocalizedString,
    pub icon: String,
    pub category: AchievementCategory,
    pub requirement: Requirement,
    pub progress: u64,
    pub unlocked: bool,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub player_id: String,
    pub current_theme: ThemeType,
    pub themes: BTreeMap<ThemeType, ThemeProgress>,
    pub achievements: Vec<Achievement>,
    pub statistics: Statistics,
}

impl PlayerProgress {
    pub fn new(player_id: impl Into<String>) -> Self {
        PlayerProgress {
            player_id: player_id.into(),
            current_theme: ThemeType::Space,
            themes: ThemeType::ALL.into_iter().map(|t| (t, ThemeProgress::default())).collect(),
            achievements: Vec::new(),
            statistics: Statistics::default(),
        }
    }
}

/// Result of finishing the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAdvance {
    /// The run moved on to the node at this index.
    Next(usize),
    /// Every node including the reward has been completed.
    QuestComplete,
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    progress: PlayerProgress,
}

impl ProgressTracker {
    pub fn new(player_id: impl Into<String>) -> Self {
        ProgressTracker { progress: PlayerProgress::new(player_id) }
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn theme(&self, theme: ThemeType) -> &ThemeProgress {
        // Every constructor and import fills all themes.
        &self.progress.themes[&theme]
    }

    fn theme_mut(&mut self, theme: ThemeType) -> &mut ThemeProgress {
        self.progress.themes.entry(theme).or_default()
    }

    fn active_run(&mut self, theme: ThemeType) -> Result<&mut QuestRun> {
        self.theme_mut(theme)
            .current_quest
            .as_mut()
            .ok_or_else(|| DrillError::NoActiveQuest(theme.to_string()))
    }

    pub fn set_current_theme(&mut self, theme: ThemeType) {
        self.progress.current_theme = theme;
    }

    /// Open a run at the first node. Replaces any unfinished run in the
    /// same theme.
    pub fn start_quest(&mut self, quest: &Quest) {
        self.theme_mut(quest.theme).current_quest = Some(QuestRun {
            quest_id: quest.id.clone(),
            current_node_index: 0,
            nodes_completed: 0,
            score: 0,
            mistakes: 0,
            combo: 0,
        });
    }

    /// Score one answer and return the points awarded.
    ///
    /// A correct answer earns `10 * (1 + combo * 0.1)` where `combo` is the
    /// streak before this answer; a wrong one resets the streak.
    pub fn record_answer(&mut self, theme: ThemeType, correct: bool) -> Result<u32> {
        let run = self.active_run(theme)?;
        if !correct {
            run.combo = 0;
            run.mistakes += 1;
            return Ok(0);
        }

        let points = BASE_POINTS + run.combo * BASE_POINTS / 10;
        run.combo += 1;
        run.score += points;
        let combo = run.combo;

        let stats = &mut self.progress.statistics;
        stats.total_score += u64::from(points);
        stats.total_problems += 1;
        stats.best_combo = stats.best_combo.max(combo);
        Ok(points)
    }

    /// Finish the current node and move forward. A reward node completes
    /// as soon as it is reached.
    pub fn complete_node(&mut self, theme: ThemeType, quest: &Quest) -> Result<NodeAdvance> {
        let run = self.active_run(theme)?;
        if run.quest_id != quest.id {
            return Err(DrillError::QuestMismatch {
                expected: run.quest_id.clone(),
                found: quest.id.clone(),
            });
        }

        if run.current_node_index < quest.path.len() {
            run.current_node_index += 1;
            run.nodes_completed += 1;
        }
        while let Some(node) = quest.path.get(run.current_node_index) {
            if node.node_type != NodeType::Reward {
                return Ok(NodeAdvance::Next(run.current_node_index));
            }
            run.current_node_index += 1;
            run.nodes_completed += 1;
        }
        Ok(NodeAdvance::QuestComplete)
    }

    /// Close the active run and fold it into the theme totals.
    pub fn complete_quest(&mut self, theme: ThemeType) -> Result<()> {
        let run = self
            .theme_mut(theme)
            .current_quest
            .take()
            .ok_or_else(|| DrillError::NoActiveQuest(theme.to_string()))?;

        let tp = self.theme_mut(theme);
        tp.quests_completed += 1;
        tp.total_score += u64::from(run.score);

        if run.mistakes == 0 {
            self.progress.statistics.perfect_quests += 1;
        }
        info!(
            %theme,
            quest = %run.quest_id,
            score = run.score,
            mistakes = run.mistakes,
            "quest completed"
        );
        self.check_achievements();
        Ok(())
    }

    /// Record a boss as defeated. Each boss counts once per theme.
    pub fn defeat_boss(&mut self, theme: ThemeType, boss: &Boss) {
        let tp = self.theme_mut(theme);
        if !tp.bosses_defeated.contains(&boss.id) {
            tp.bosses_defeated.push(boss.id.clone());
            self.progress.statistics.total_bosses_defeated += 1;
        }
        self.check_achievements();
    }

    pub fn unlocked_achievements(&self) -> Vec<&Achievement> {
        self.progress.achievements.iter().filter(|a| a.unlocked).collect()
    }

    pub fn total_achievement_points(&self) -> u32 {
        self.unlocked_achievements().iter().map(|a| a.points).sum()
    }

    pub fn reset(&mut self) {
        let player_id = std::mem::take(&mut self.progress.player_id);
        self.progress = PlayerProgress::new(player_id);
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.progress)?)
    }

    /// Replace the current progress with a snapshot. The tracker is left
    /// untouched when the snapshot is rejected.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let mut imported: PlayerProgress = serde_json::from_str(json)?;
        if imported.player_id.trim().is_empty() {
            return Err(DrillError::InvalidSnapshot("missing player id".into()));
        }
        for theme in ThemeType::ALL {
            imported.themes.entry(theme).or_default();
        }
        self.progress = imported;
        Ok(())
    }

    fn requirement_progress(&self, req: &Requirement) -> u64 {
        let stats = &self.progress.statistics;
        match req.kind {
            RequirementKind::Quests => match req.theme {
                Some(theme) => u64::from(self.theme(theme).quests_completed),
                None => self.progress.themes.values().map(|t| u64::from(t.quests_completed)).sum(),
            },
            RequirementKind::Bosses  => u64::from(stats.total_bosses_defeated),
            RequirementKind::Perfect => u64::from(stats.perfect_quests),
            RequirementKind::Combo   => u64::from(stats.best_combo),
            RequirementKind::Score   => stats.total_score,
        }
    }

    /// Refresh progress on every achievement. Unlocked achievements are
    /// never re-evaluated.
    fn check_achievements(&mut self) {
        for mut achievement in achievement_catalog() {
            let existing = self.progress.achievements.iter().position(|a| a.id == achievement.id);
            if let Some(idx) = existing {
                if self.progress.achievements[idx].unlocked {
                    continue;
                }
            }

            achievement.progress = self.requirement_progress(&achievement.requirement);
            achievement.unlocked = achievement.progress >= achievement.requirement.value;
            if achievement.unlocked {
                info!(id = %achievement.id, points = achievement.points, "achievement unlocked");
            }

            match existing {
                Some(idx) => self.progress.achievements[idx] = achievement,
                None => self.progress.achievements.push(achievement),
            }
        }
    }
}

fn achievement(
    id: &str, title: (&str, &str), description: (&str, &str), icon: &str,
    category: AchievementCategory, requirement: Requirement, points: u32,
) -> Achievement {
    Achievement {
        id: id.into(),
        title: LocalizedString::new(title.0, title.1),
        description: LocalizedString::new(description.0, description.1),
        icon: icon.into(),
        category,
        requirement,
        progress: 0,
        unlocked: false,
        points,
    }
}

fn requires(kind: RequirementKind, value: u64) -> Requirement {
    Requirement { kind, value, theme: None }
}

pub fn achievement_catalog() -> Vec<Achievement> {
    vec![
        achievement(
            "first-quest", ("First Steps", "Erste Schritte"),
            ("Complete your first quest", "Schließe deine erste Quest ab"),
            "🎯", AchievementCategory::Quest, requires(RequirementKind::Quests, 1), 10,
        ),
        achievement(
            "boss-slayer", ("Boss Slayer", "Boss-Bezwinger"),
            ("Defeat 10 bosses", "Besiege 10 Bosse"),
            "⚔️", AchievementCategory::Combat, requires(RequirementKind::Bosses, 10), 50,
        ),
        achievement(
            "perfectionist", ("Perfectionist", "Perfektionist"),
            ("Complete 5 quests without mistakes", "Schließe 5 Quests ohne Fehler ab"),
            "⭐", AchievementCategory::Special, requires(RequirementKind::Perfect, 5), 100,
        ),
        achievement(
            "combo-master", ("Combo Master", "Combo-Meister"),
            ("Achieve a 20x combo", "Erreiche eine 20x Combo"),
            "🔥", AchievementCategory::Combat, requires(RequirementKind::Combo, 20), 75,
        ),
        achievement(
            "space-explorer", ("Space Explorer", "Weltraum-Entdecker"),
            ("Complete 10 Space quests", "Schließe 10 Weltraum-Quests ab"),
            "🚀", AchievementCategory::Collection,
            Requirement { kind: RequirementKind::Quests, value: 10, theme: Some(ThemeType::Space) }, 30,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::generator::QuestGenerator;

    fn started(theme: ThemeType, n: u32) -> (ProgressTracker, Quest) {
        let quest = QuestGenerator::new().generate_quest(theme, n);
        let mut tracker = ProgressTracker::new("player-1");
        tracker.start_quest(&quest);
        (tracker, quest)
    }

    #[test]
    fn combo_raises_points_and_mistake_resets_it() {
        let (mut t, _) = started(ThemeType::Space, 1);
        assert_eq!(t.record_answer(ThemeType::Space, true).unwrap(), 10);
        assert_eq!(t.record_answer(ThemeType::Space, true).unwrap(), 11);
        assert_eq!(t.record_answer(ThemeType::Space, true).unwrap(), 12);
        assert_eq!(t.record_answer(ThemeType::Space, false).unwrap(), 0);
        assert_eq!(t.record_answer(ThemeType::Space, true).unwrap(), 10);

        let run = t.theme(ThemeType::Space).current_quest.clone().unwrap();
        assert_eq!(run.score, 43);
        assert_eq!(run.mistakes, 1);
        assert_eq!(t.progress().statistics.best_combo, 3);
        assert_eq!(t.progress().statistics.total_problems, 4);
    }

    #[test]
    fn answers_without_a_run_are_rejected() {
        let mut t = ProgressTracker::new("p");
        assert!(matches!(
            t.record_answer(ThemeType::Dino, true),
            Err(DrillError::NoActiveQuest(_))
        ));
        assert!(t.complete_quest(ThemeType::Dino).is_err());
    }

    #[test]
    fn nodes_advance_forward_and_reward_auto_completes() {
        let (mut t, quest) = started(ThemeType::Ocean, 3);
        let last = quest.path.len() - 1;
        assert_eq!(quest.path[last].node_type, NodeType::Reward);

        let mut seen = Vec::new();
        loop {
            match t.complete_node(ThemeType::Ocean, &quest).unwrap() {
                NodeAdvance::Next(idx) => {
                    assert!(seen.last().map_or(true, |&prev| idx > prev), "pointer moved backwards");
                    assert_ne!(quest.path[idx].node_type, NodeType::Reward);
                    seen.push(idx);
                }
                NodeAdvance::QuestComplete => break,
            }
        }
        // Every node after the intro except the reward is reported through `Next`.
        assert_eq!(seen.len(), quest.path.len() - 2);
        let run = t.theme(ThemeType::Ocean).current_quest.clone().unwrap();
        assert_eq!(run.nodes_completed, quest.path.len());

        // Completing again stays terminal.
        assert_eq!(t.complete_node(ThemeType::Ocean, &quest).unwrap(), NodeAdvance::QuestComplete);
    }

    #[test]
    fn completing_a_different_quest_is_rejected() {
        let (mut t, _) = started(ThemeType::Circus, 1);
        let other = QuestGenerator::new().generate_quest(ThemeType::Circus, 2);
        assert!(matches!(
            t.complete_node(ThemeType::Circus, &other),
            Err(DrillError::QuestMismatch { .. })
        ));
    }

    #[test]
    fn perfect_quest_unlocks_first_steps() {
        let (mut t, _) = started(ThemeType::Space, 1);
        t.record_answer(ThemeType::Space, true).unwrap();
        t.complete_quest(ThemeType::Space).unwrap();

        let tp = t.theme(ThemeType::Space);
        assert_eq!(tp.quests_completed, 1);
        assert_eq!(tp.total_score, 10);
        assert!(tp.current_quest.is_none());
        assert_eq!(t.progress().statistics.perfect_quests, 1);

        let unlocked: Vec<&str> = t.unlocked_achievements().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(unlocked, vec!["first-quest"]);
        assert_eq!(t.total_achievement_points(), 10);
    }

    #[test]
    fn bosses_count_once_and_unlock_boss_slayer() {
        let generator = QuestGenerator::new();
        let mut t = ProgressTracker::new("p");
        let space = generator.dictionary(ThemeType::Space);
        let boss = &space.mini_bosses[0];
        t.defeat_boss(ThemeType::Space, boss);
        t.defeat_boss(ThemeType::Space, boss);
        assert_eq!(t.progress().statistics.total_bosses_defeated, 1);

        let mut defeated = 1;
        'outer: for theme in ThemeType::ALL {
            let d = generator.dictionary(theme);
            for b in d.mini_bosses.iter().chain(d.final_bosses.iter()) {
                if defeated == 10 {
                    break 'outer;
                }
                if theme == ThemeType::Space && b.id == boss.id {
                    continue;
                }
                t.defeat_boss(theme, b);
                defeated += 1;
            }
        }
        assert_eq!(t.progress().statistics.total_bosses_defeated, 10);
        assert!(t.unlocked_achievements().iter().any(|a| a.id == "boss-slayer"));
    }

    #[test]
    fn snapshot_round_trips_and_rejects_bad_input() {
        let (mut t, _) = started(ThemeType::Medieval, 4);
        t.record_answer(ThemeType::Medieval, true).unwrap();
        let json = t.export_json().unwrap();

        let mut other = ProgressTracker::new("someone-else");
        other.import_json(&json).unwrap();
        assert_eq!(other.progress(), t.progress());

        assert!(matches!(other.import_json("not json"), Err(DrillError::Json(_))));
        let mut blank = PlayerProgress::new("");
        blank.statistics.total_score = 5;
        let blank_json = serde_json::to_string(&blank).unwrap();
        assert!(matches!(other.import_json(&blank_json), Err(DrillError::InvalidSnapshot(_))));
        // Rejected imports leave the previous state in place.
        assert_eq!(other.progress(), t.progress());
    }

    #[test]
    fn reset_keeps_player_id() {
        let (mut t, _) = started(ThemeType::Dino, 2);
        t.record_answer(ThemeType::Dino, true).unwrap();
        t.reset();
        assert_eq!(t.progress().player_id, "player-1");
        assert_eq!(t.progress().statistics, Statistics::default());
        assert!(t.theme(ThemeType::Dino).current_quest.is_none());
    }
}
