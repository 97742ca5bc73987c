//! Static content pools, one module per theme.
//!
//! Every theme provides locations and action verbs for titles, challenge
//! templates, mini/final boss templates and rewards. Text is written in both
//! languages here; nothing is translated at runtime.
//!
//! The builders below keep the theme files focused on content.

mod circus;
mod dino;
mod medieval;
mod ocean;
mod space;

use crate::quest::models::{
    Boss, Challenge, LocalizedString, Rarity, Reward, SpecialMechanics, SpecialRules,
    ThemeColors, ThemeDictionary, ThemeType,
};

/// Build the content pool for `theme`.
pub fn dictionary(theme: ThemeType) -> ThemeDictionary {
    match theme {
        ThemeType::Space    => space::dictionary(),
        ThemeType::Dino     => dino::dictionary(),
        ThemeType::Medieval => medieval::dictionary(),
        ThemeType::Ocean    => ocean::dictionary(),
        ThemeType::Circus   => circus::dictionary(),
    }
}

fn loc(en: &str, de: &str) -> LocalizedString {
    LocalizedString::new(en, de)
}

fn locs(pairs: &[(&str, &str)]) -> Vec<LocalizedString> {
    pairs.iter().map(|(en, de)| loc(en, de)).collect()
}

fn colors(primary: &str, secondary: &str, accent: &str, background: &str, gradient: &str) -> ThemeColors {
    ThemeColors {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        background: background.into(),
        gradient: gradient.into(),
    }
}

fn challenge(
    id: &str, name: (&str, &str), description: (&str, &str),
    problem_count: u32, difficulty_modifier: f32, special_rules: Option<SpecialRules>,
) -> Challenge {
    Challenge {
        id: id.into(),
        name: loc(name.0, name.1),
        description: loc(description.0, description.1),
        problem_count,
        difficulty_modifier,
        special_rules,
    }
}

fn boss(
    id: &str, name: (&str, &str), health: u32, time_limit: u32,
    difficulty: f32, special_mechanics: Option<SpecialMechanics>, sprite: &str,
) -> Boss {
    Boss {
        id: id.into(),
        name: loc(name.0, name.1),
        health,
        time_limit,
        difficulty,
        special_mechanics,
        sprite: Some(sprite.into()),
    }
}

fn reward(
    id: &str, name: (&str, &str), description: (&str, &str), icon: &str, rarity: Rarity,
) -> Reward {
    Reward {
        id: id.into(),
        name: loc(name.0, name.1),
        description: loc(description.0, description.1),
        icon: icon.into(),
        rarity,
    }
}

fn emojis(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

fn time_bonus() -> Option<SpecialRules> {
    Some(SpecialRules { time_bonus: true, ..SpecialRules::default() })
}

fn no_mistakes() -> Option<SpecialRules> {
    Some(SpecialRules { no_mistakes: true, ..SpecialRules::default() })
}

fn reverse_order() -> Option<SpecialRules> {
    Some(SpecialRules { reverse_order: true, ..SpecialRules::default() })
}

fn mechanics(double_digits: bool, mixed_operations: bool, moving_target: bool, shield_phase: bool) -> Option<SpecialMechanics> {
    Some(SpecialMechanics { double_digits, mixed_operations, moving_target, shield_phase })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_theme_has_content_for_every_structure() {
        // Pools may run short of the largest path; the generator omits those nodes.
        for theme in ThemeType::ALL {
            let d = dictionary(theme);
            assert_eq!(d.theme, theme);
            assert!(!d.locations.is_empty(), "{theme} has no locations");
            assert!(!d.actions.is_empty(), "{theme} has no actions");
            assert!(d.challenges.len() >= 2, "{theme} has too few challenges");
            assert!(!d.mini_bosses.is_empty(), "{theme} has no mini bosses");
            assert!(!d.final_bosses.is_empty(), "{theme} has no final bosses");
            assert!(!d.rewards.is_empty(), "{theme} has no rewards");
            assert!(!d.ambient_emojis.is_empty());
        }
    }

    #[test]
    fn content_ids_are_unique_within_a_theme() {
        for theme in ThemeType::ALL {
            let d = dictionary(theme);
            let mut seen = HashSet::new();
            let ids = d.challenges.iter().map(|c| &c.id)
                .chain(d.mini_bosses.iter().map(|b| &b.id))
                .chain(d.final_bosses.iter().map(|b| &b.id))
                .chain(d.rewards.iter().map(|r| &r.id));
            for id in ids {
                assert!(seen.insert(id.clone()), "duplicate id {id} in {theme}");
            }
        }
    }

    #[test]
    fn challenges_carry_problems_and_both_languages() {
        for theme in ThemeType::ALL {
            for c in dictionary(theme).challenges {
                assert!(c.problem_count > 0, "{} has no problems", c.id);
                assert!(!c.name.en.is_empty() && !c.name.de.is_empty());
            }
        }
    }
}
