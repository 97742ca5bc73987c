use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DrillError;

// ---------------------------------------------------------------------------
// Themes and localised text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Space,
    Dino,
    Medieval,
    Ocean,
    Circus,
}

impl ThemeType {
    pub const ALL: [ThemeType; 5] = [
        ThemeType::Space,
        ThemeType::Dino,
        ThemeType::Medieval,
        ThemeType::Ocean,
        ThemeType::Circus,
    ];

    /// Fixed offset mixed into every quest seed of this theme.
    pub fn base_seed(self) -> u64 {
        match self {
            ThemeType::Space    => 1000,
            ThemeType::Dino     => 2000,
            ThemeType::Medieval => 3000,
            ThemeType::Ocean    => 4000,
            ThemeType::Circus   => 5000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeType::Space    => "space",
            ThemeType::Dino     => "dino",
            ThemeType::Medieval => "medieval",
            ThemeType::Ocean    => "ocean",
            ThemeType::Circus   => "circus",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DrillError::UnknownTheme(s.to_string()))
    }
}

/// Text in the two shipped languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedString {
    pub en: String,
    pub de: String,
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        LocalizedString { en: en.into(), de: de.into() }
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.en)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub gradient: String,
}

// ---------------------------------------------------------------------------
// Content templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRules {
    #[serde(default)]
    pub time_bonus: bool,
    #[serde(default)]
    pub no_mistakes: bool,
    #[serde(default)]
    pub reverse_order: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialMechanics {
    #[serde(default)]
    pub double_digits: bool,
    #[serde(default)]
    pub mixed_operations: bool,
    #[serde(default)]
    pub moving_target: bool,
    #[serde(default)]
    pub shield_phase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: LocalizedString,
    pub description: LocalizedString,
    pub problem_count: u32,
    pub difficulty_modifier: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_rules: Option<SpecialRules>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    pub id: String,
    pub name: LocalizedString,
    /// Hits needed to defeat the boss.
    pub health: u32,
    /// Seconds per combat round.
    pub time_limit: u32,
    pub difficulty: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_mechanics: Option<SpecialMechanics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Draw weight; rarer rewards are drawn less often.
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Common    => 100,
            Rarity::Rare      => 50,
            Rarity::Epic      => 20,
            Rarity::Legendary => 5,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common    => write!(f, "Common"),
            Rarity::Rare      => write!(f, "Rare"),
            Rarity::Epic      => write!(f, "Epic"),
            Rarity::Legendary => write!(f, "Legendary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub name: LocalizedString,
    pub description: LocalizedString,
    pub icon: String,
    pub rarity: Rarity,
}

/// Read-only content pool for one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDictionary {
    pub theme: ThemeType,
    pub name: LocalizedString,
    pub icon: String,
    pub colors: ThemeColors,
    pub locations: Vec<LocalizedString>,
    pub actions: Vec<LocalizedString>,
    pub challenges: Vec<Challenge>,
    pub mini_bosses: Vec<Boss>,
    pub final_bosses: Vec<Boss>,
    pub rewards: Vec<Reward>,
    pub ambient_emojis: Vec<String>,
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Intro,
    Challenge,
    MiniBoss,
    FinalBoss,
    Reward,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Intro     => write!(f, "Intro"),
            NodeType::Challenge => write!(f, "Challenge"),
            NodeType::MiniBoss  => write!(f, "Mini Boss"),
            NodeType::FinalBoss => write!(f, "Final Boss"),
            NodeType::Reward    => write!(f, "Reward"),
        }
    }
}

/// One stage of a quest path.
///
/// Boss and reward nodes carry no problem count: bosses are cleared through
/// combat rounds and the reward node completes on display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<Challenge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss: Option<Boss>,
    #[serde(default)]
    pub completed: bool,
}

impl QuestNode {
    pub fn problem_count(&self) -> u32 {
        self.problems.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// `<theme>-quest-<number>`
    pub id: String,
    pub theme: ThemeType,
    pub number: u32,
    pub title: LocalizedString,
    pub path: Vec<QuestNode>,
    pub total_problems: u32,
    pub rewards: Vec<Reward>,
    pub seed: u64,
}

impl Quest {
    pub fn node_types(&self) -> Vec<NodeType> {
        self.path.iter().map(|n| n.node_type).collect()
    }
}

/// Milestone bonuses for a quest number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestBonuses {
    pub score_multiplier: f64,
    pub special_reward: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Ocean".parse::<ThemeType>().unwrap(), ThemeType::Ocean);
        assert_eq!(" medieval ".parse::<ThemeType>().unwrap(), ThemeType::Medieval);
        assert!(matches!(
            "castle".parse::<ThemeType>(),
            Err(DrillError::UnknownTheme(t)) if t == "castle"
        ));
    }

    #[test]
    fn node_type_serializes_camel_case() {
        assert_eq!(serde_json::to_string(&NodeType::MiniBoss).unwrap(), "\"miniBoss\"");
        let node = QuestNode {
            node_type: NodeType::Reward,
            name: None,
            problems: None,
            challenge: None,
            boss: None,
            completed: false,
        };
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"type":"reward","completed":false}"#);
    }

    #[test]
    fn rarity_weights_decrease() {
        let w: Vec<u32> = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
            .iter()
            .map(|r| r.weight())
            .collect();
        assert_eq!(w, vec![100, 50, 20, 5]);
    }
}
