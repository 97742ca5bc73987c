use super::*;

pub(super) fn dictionary() -> ThemeDictionary {
    ThemeDictionary {
        theme: ThemeType::Medieval,
        name: loc("Medieval Quest", "Mittelalter-Quest"),
        icon: "🏰".into(),
        colors: colors("#991b1b", "#6b7280", "#eab308", "#450a0a", "from-red-900 via-gray-800 to-yellow-700"),
        locations: locs(&[
            ("Castle Keep", "Burgfried"),
            ("Dragon's Lair", "Drachenhöhle"),
            ("Enchanted Forest", "Verwunschener Wald"),
            ("Knight's Tournament", "Ritterturnier"),
            ("Wizard Tower", "Zaubererturm"),
            ("Royal Treasury", "Königliche Schatzkammer"),
        ]),
        actions: locs(&[
            ("Storm", "Erstürme"),
            ("Defend", "Verteidige"),
            ("Quest through", "Durchquere"),
            ("Conquer", "Erobere"),
            ("Rescue from", "Rette aus"),
            ("Battle in", "Kämpfe in"),
        ]),
        challenges: vec![
            challenge(
                "sword-training",
                ("Sword Training", "Schwerttraining"),
                ("Quick reflexes needed!", "Schnelle Reflexe nötig!"),
                10, 1.1, time_bonus(),
            ),
            challenge(
                "spell-casting",
                ("Spell Casting", "Zaubersprüche"),
                ("Perfect accuracy for magic!", "Perfekte Genauigkeit für Magie!"),
                12, 1.2, no_mistakes(),
            ),
        ],
        mini_bosses: vec![
            boss("black-knight", ("Black Knight", "Schwarzer Ritter"), 4, 30, 1.6, None, "⚔️"),
            boss("evil-wizard", ("Evil Wizard", "Böser Zauberer"), 3, 25, 1.7, mechanics(false, false, true, false), "🧙‍♂️"),
        ],
        final_bosses: vec![
            boss("dragon-king", ("Dragon King", "Drachenkönig"), 6, 45, 2.2, mechanics(true, false, false, true), "🐉"),
            boss("dark-sorcerer", ("Dark Sorcerer", "Dunkler Zauberer"), 5, 40, 2.0, mechanics(false, true, true, false), "🧙‍♂️"),
        ],
        rewards: vec![
            reward("knights-honor", ("Knight's Honor", "Ritterehre"), ("+15% score bonus", "+15% Punktebonus"), "🛡️", Rarity::Rare),
            reward("magic-scroll", ("Magic Scroll", "Magische Schriftrolle"), ("Skip one problem", "Überspringe eine Aufgabe"), "📜", Rarity::Epic),
        ],
        ambient_emojis: emojis(&["⚔️", "🛡️", "🏰", "👑", "🗡️", "🏹", "🎯"]),
    }
}
