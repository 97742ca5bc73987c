use tracing::debug;

use crate::quest::{
    models::{
        Challenge, Boss, LocalizedString, NodeType, Quest, QuestBonuses, QuestNode, Reward,
        ThemeDictionary, ThemeType,
    },
    seeded::SeededRandom,
    themes,
};

/// Prime stride between consecutive quest seeds of one theme.
const SEED_STRIDE: u64 = 137;

/// Problems on the intro node of every quest.
const INTRO_PROBLEMS: u32 = 5;

/// Path templates in increasing complexity. The last one is used for every
/// milestone quest (numbers divisible by 5).
const STRUCTURES: [&[NodeType]; 4] = [
    &[NodeType::Intro, NodeType::Challenge, NodeType::MiniBoss, NodeType::Reward],
    &[NodeType::Intro, NodeType::Challenge, NodeType::Challenge, NodeType::MiniBoss, NodeType::Reward],
    &[
        NodeType::Intro, NodeType::Challenge, NodeType::MiniBoss,
        NodeType::Challenge, NodeType::FinalBoss, NodeType::Reward,
    ],
    &[
        NodeType::Intro, NodeType::Challenge, NodeType::Challenge, NodeType::MiniBoss,
        NodeType::Challenge, NodeType::FinalBoss, NodeType::Reward,
    ],
];

/// Builds reproducible quests from `(theme, quest_number)`.
///
/// Construct one at startup and hand out references; it holds only the
/// read-only theme content, so any number of callers can share it.
#[derive(Debug, Clone)]
pub struct QuestGenerator {
    dictionaries: Vec<ThemeDictionary>,
}

impl Default for QuestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestGenerator {
    pub fn new() -> Self {
        QuestGenerator {
            dictionaries: ThemeType::ALL.into_iter().map(themes::dictionary).collect(),
        }
    }

    pub fn dictionary(&self, theme: ThemeType) -> &ThemeDictionary {
        // `new` builds one dictionary per theme in `ThemeType::ALL` order.
        let idx = ThemeType::ALL.iter().position(|t| *t == theme).unwrap_or(0);
        &self.dictionaries[idx]
    }

    /// Seed the quest RNG is started from.
    pub fn quest_seed(theme: ThemeType, quest_number: u32) -> u64 {
        theme.base_seed() + u64::from(quest_number) * SEED_STRIDE
    }

    /// Deterministic in `(theme, quest_number)`: the same pair always yields
    /// the same path, title and rewards.
    pub fn generate_quest(&self, theme: ThemeType, quest_number: u32) -> Quest {
        let dictionary = self.dictionary(theme);
        let seed = Self::quest_seed(theme, quest_number);
        let mut rng = SeededRandom::new(seed);

        let structure = quest_structure(quest_number, &mut rng);
        let title = quest_title(dictionary, &mut rng);
        let path = build_path(dictionary, structure, &mut rng);
        let rewards = select_rewards(dictionary, quest_number, &mut rng);
        let total_problems = path.iter().map(QuestNode::problem_count).sum();

        debug!(
            %theme,
            quest_number,
            seed,
            nodes = path.len(),
            total_problems,
            rewards = rewards.len(),
            "generated quest"
        );

        Quest {
            id: format!("{theme}-quest-{quest_number}"),
            theme,
            number: quest_number,
            title,
            path,
            total_problems,
            rewards,
            seed,
        }
    }

    /// `count` consecutive quests starting at `start`. Stops early at
    /// `u32::MAX`.
    pub fn quest_preview(&self, theme: ThemeType, start: u32, count: usize) -> Vec<Quest> {
        (0..count)
            .map_while(|i| u32::try_from(i).ok().and_then(|i| start.checked_add(i)))
            .map(|n| self.generate_quest(theme, n))
            .collect()
    }

    pub fn is_special_quest(quest_number: u32) -> bool {
        quest_number % 10 == 0 || quest_number % 25 == 0
    }

    pub fn quest_bonuses(quest_number: u32) -> QuestBonuses {
        let (score_multiplier, special_reward) = if quest_number % 25 == 0 {
            (2.0, true)
        } else if quest_number % 10 == 0 {
            (1.5, true)
        } else if quest_number % 5 == 0 {
            (1.2, false)
        } else {
            (1.0, false)
        };
        QuestBonuses { score_multiplier, special_reward }
    }
}

/// Complexity grows one step every ten quests; milestones skip the draw.
fn quest_structure(quest_number: u32, rng: &mut SeededRandom) -> &'static [NodeType] {
    let most_complex = STRUCTURES[STRUCTURES.len() - 1];
    if quest_number % 5 == 0 {
        return most_complex;
    }
    let complexity = ((quest_number / 10) as usize).min(STRUCTURES.len() - 1);
    rng.pick(&STRUCTURES[..=complexity]).copied().unwrap_or(most_complex)
}

fn quest_title(dictionary: &ThemeDictionary, rng: &mut SeededRandom) -> LocalizedString {
    let action = rng.pick(&dictionary.actions).cloned().unwrap_or_else(|| LocalizedString::new("", ""));
    let location = rng.pick(&dictionary.locations).cloned().unwrap_or_else(|| LocalizedString::new("", ""));
    LocalizedString {
        en: format!("{} the {}", action.en, location.en),
        de: format!("{} {}", action.de, location.de),
    }
}

fn build_path(dictionary: &ThemeDictionary, structure: &[NodeType], rng: &mut SeededRandom) -> Vec<QuestNode> {
    let mut path = Vec::with_capacity(structure.len());
    let mut used_challenges: Vec<&str> = Vec::new();
    let mut used_bosses: Vec<&str> = Vec::new();

    for &node_type in structure {
        match node_type {
            NodeType::Intro => path.push(QuestNode {
                node_type,
                name: Some(LocalizedString::new("Prepare for Adventure", "Bereite dich auf das Abenteuer vor")),
                problems: Some(INTRO_PROBLEMS),
                challenge: None,
                boss: None,
                completed: false,
            }),

            NodeType::Challenge => {
                let available: Vec<&Challenge> = dictionary
                    .challenges
                    .iter()
                    .filter(|c| !used_challenges.contains(&c.id.as_str()))
                    .collect();
                if let Some(&challenge) = rng.pick(&available) {
                    used_challenges.push(&challenge.id);
                    path.push(QuestNode {
                        node_type,
                        name: Some(challenge.name.clone()),
                        problems: Some(challenge.problem_count),
                        challenge: Some(challenge.clone()),
                        boss: None,
                        completed: false,
                    });
                }
            }

            NodeType::MiniBoss | NodeType::FinalBoss => {
                let pool = if node_type == NodeType::MiniBoss {
                    &dictionary.mini_bosses
                } else {
                    &dictionary.final_bosses
                };
                let available: Vec<&Boss> = pool
                    .iter()
                    .filter(|b| !used_bosses.contains(&b.id.as_str()))
                    .collect();
                if let Some(&boss) = rng.pick(&available) {
                    used_bosses.push(&boss.id);
                    path.push(QuestNode {
                        node_type,
                        name: Some(boss.name.clone()),
                        problems: None,
                        challenge: None,
                        boss: Some(boss.clone()),
                        completed: false,
                    });
                }
            }

            NodeType::Reward => path.push(QuestNode {
                node_type,
                name: Some(LocalizedString::new("Claim Your Rewards!", "Hole deine Belohnungen ab!")),
                problems: None,
                challenge: None,
                boss: None,
                completed: false,
            }),
        }
    }
    path
}

/// Later quests earn more rewards, up to three. Duplicate draws are skipped,
/// so a quest may end up with fewer.
fn select_rewards(dictionary: &ThemeDictionary, quest_number: u32, rng: &mut SeededRandom) -> Vec<Reward> {
    let reward_count = (1 + quest_number / 20).min(3);
    let weighted: Vec<(&Reward, u32)> = dictionary
        .rewards
        .iter()
        .map(|r| (r, r.rarity.weight()))
        .collect();

    let mut selected: Vec<Reward> = Vec::new();
    for _ in 0..reward_count {
        if let Some(&reward) = rng.weighted(&weighted) {
            if !selected.iter().any(|r| r.id == reward.id) {
                selected.push(reward.clone());
            }
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_mixes_theme_offset_and_prime_stride() {
        assert_eq!(QuestGenerator::quest_seed(ThemeType::Space, 0), 1000);
        assert_eq!(QuestGenerator::quest_seed(ThemeType::Space, 7), 1000 + 7 * 137);
        assert_eq!(QuestGenerator::quest_seed(ThemeType::Circus, 3), 5000 + 3 * 137);
    }

    #[test]
    fn early_quests_use_only_the_simplest_structure() {
        let mut rng = SeededRandom::new(1);
        for n in [1u32, 2, 3, 4, 6, 7, 8, 9] {
            assert_eq!(quest_structure(n, &mut rng), STRUCTURES[0]);
        }
    }

    #[test]
    fn structure_never_exceeds_complexity_step() {
        let mut rng = SeededRandom::new(99);
        for n in 11u32..20 {
            if n % 5 == 0 {
                continue;
            }
            let s = quest_structure(n, &mut rng);
            assert!(s == STRUCTURES[0] || s == STRUCTURES[1], "quest {n} too complex");
        }
    }

    #[test]
    fn milestone_quest_does_not_consume_a_draw() {
        let mut a = SeededRandom::new(5);
        let mut b = SeededRandom::new(5);
        quest_structure(15, &mut a);
        assert_eq!(a.between(0, 1_000_000), b.between(0, 1_000_000));
    }

    #[test]
    fn reward_count_grows_with_quest_number() {
        let generator = QuestGenerator::new();
        let d = generator.dictionary(ThemeType::Space);
        let mut rng = SeededRandom::new(3);
        assert_eq!(select_rewards(d, 1, &mut rng).len(), 1);
        for n in [40u32, 60, 99] {
            let rewards = select_rewards(d, n, &mut rng);
            assert!((1..=3).contains(&rewards.len()));
        }
    }

    #[test]
    fn preview_stops_at_the_last_quest_number() {
        let generator = QuestGenerator::new();
        let preview = generator.quest_preview(ThemeType::Dino, u32::MAX - 1, 5);
        let numbers: Vec<u32> = preview.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![u32::MAX - 1, u32::MAX]);
        assert!(generator.quest_preview(ThemeType::Dino, 3, 0).is_empty());
    }

    #[test]
    fn exhausted_pool_omits_node() {
        let generator = QuestGenerator::new();
        // Medieval has two challenges; the largest path asks for three.
        let d = generator.dictionary(ThemeType::Medieval);
        let mut rng = SeededRandom::new(10);
        let path = build_path(d, STRUCTURES[3], &mut rng);
        let challenges = path.iter().filter(|n| n.node_type == NodeType::Challenge).count();
        assert_eq!(challenges, 2);
        assert_eq!(path.len(), STRUCTURES[3].len() - 1);
    }
}
