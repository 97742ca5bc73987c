use super::*;

pub(super) fn dictionary() -> ThemeDictionary {
    ThemeDictionary {
        theme: ThemeType::Circus,
        name: loc("Circus Spectacular", "Zirkus-Spektakel"),
        icon: "🎪".into(),
        colors: colors("#dc2626", "#facc15", "#a855f7", "#7c2d12", "from-red-700 via-yellow-500 to-purple-700"),
        locations: locs(&[
            ("Big Top Tent", "Zirkuszelt"),
            ("Tightrope", "Hochseil"),
            ("Lion's Ring", "Löwenmanege"),
            ("Clown Car", "Clownauto"),
            ("Trapeze Platform", "Trapez-Plattform"),
            ("Magic Stage", "Zauberbühne"),
        ]),
        actions: locs(&[
            ("Perform at", "Tritt auf in"),
            ("Balance on", "Balanciere auf"),
            ("Jump through", "Springe durch"),
            ("Juggle at", "Jongliere bei"),
            ("Entertain in", "Unterhalte in"),
            ("Master", "Meistere"),
        ]),
        challenges: vec![
            challenge(
                "juggling-numbers",
                ("Juggling Numbers", "Zahlen-Jonglage"),
                ("Keep all balls in the air!", "Halte alle Bälle in der Luft!"),
                10, 1.3, time_bonus(),
            ),
            challenge(
                "tightrope-balance",
                ("Tightrope Balance", "Hochseil-Balance"),
                ("Perfect balance needed!", "Perfekte Balance nötig!"),
                8, 1.4, no_mistakes(),
            ),
        ],
        mini_bosses: vec![
            boss("ringmaster", ("Strict Ringmaster", "Strenger Zirkusdirektor"), 3, 25, 1.6, None, "🎩"),
            boss("strongman", ("Circus Strongman", "Zirkus-Kraftmensch"), 4, 30, 1.5, mechanics(true, false, false, false), "💪"),
        ],
        final_bosses: vec![
            boss("grand-illusionist", ("Grand Illusionist", "Großer Illusionist"), 5, 40, 2.2, mechanics(false, true, true, false), "🎭"),
            boss("circus-master", ("Circus Master", "Zirkusmeister"), 6, 45, 2.0, mechanics(true, false, false, true), "🤹"),
        ],
        rewards: vec![
            reward("golden-ticket", ("Golden Ticket", "Goldenes Ticket"), ("Skip to next checkpoint", "Springe zum nächsten Checkpoint"), "🎫", Rarity::Epic),
            reward("spotlight", ("Spotlight", "Rampenlicht"), ("+20% score for next quest", "+20% Punkte für nächste Quest"), "✨", Rarity::Rare),
        ],
        ambient_emojis: emojis(&["🎪", "🎭", "🤹", "🎨", "🎯", "🎠", "🎡"]),
    }
}
