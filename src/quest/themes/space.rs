use super::*;

pub(super) fn dictionary() -> ThemeDictionary {
    ThemeDictionary {
        theme: ThemeType::Space,
        name: loc("Space Adventure", "Weltraum-Abenteuer"),
        icon: "🚀".into(),
        colors: colors("#1e3a8a", "#7c3aed", "#fbbf24", "#0f172a", "from-blue-900 via-purple-900 to-black"),
        locations: locs(&[
            ("Space Station Alpha", "Raumstation Alpha"),
            ("Asteroid Belt", "Asteroidengürtel"),
            ("Moon Base", "Mondbasis"),
            ("Mars Colony", "Mars-Kolonie"),
            ("Jupiter Orbit", "Jupiter-Orbit"),
            ("Saturn Rings", "Saturnringe"),
            ("Deep Space Outpost", "Tiefraum-Außenposten"),
            ("Nebula Cloud", "Nebelwolke"),
        ]),
        actions: locs(&[
            ("Explore", "Erkunde"),
            ("Defend", "Verteidige"),
            ("Navigate through", "Navigiere durch"),
            ("Repair", "Repariere"),
            ("Launch from", "Starte von"),
            ("Discover", "Entdecke"),
            ("Escape from", "Entkomme aus"),
        ]),
        challenges: vec![
            challenge(
                "meteor-math",
                ("Meteor Math Storm", "Meteor-Mathe-Sturm"),
                ("Calculate quickly to dodge meteors!", "Rechne schnell um Meteoren auszuweichen!"),
                10, 1.2, time_bonus(),
            ),
            challenge(
                "zero-gravity",
                ("Zero Gravity Equations", "Schwerelosigkeits-Gleichungen"),
                ("Solve upside-down problems!", "Löse umgedrehte Aufgaben!"),
                15, 1.0, reverse_order(),
            ),
            challenge(
                "fuel-calculation",
                ("Fuel Calculation Crisis", "Treibstoff-Berechnungs-Krise"),
                ("Perfect accuracy needed!", "Perfekte Genauigkeit erforderlich!"),
                12, 1.1, no_mistakes(),
            ),
        ],
        mini_bosses: vec![
            boss("space-pirate", ("Space Pirate Captain", "Weltraumpiraten-Kapitän"), 3, 30, 1.5, None, "🏴‍☠️"),
            boss("robot-guardian", ("Robot Guardian", "Roboter-Wächter"), 4, 25, 1.6, mechanics(false, false, false, true), "🤖"),
            boss("alien-scout", ("Alien Scout Leader", "Alien-Späher-Anführer"), 3, 20, 1.7, mechanics(false, false, true, false), "👽"),
        ],
        final_bosses: vec![
            boss("galaxy-emperor", ("Galaxy Emperor", "Galaxie-Imperator"), 5, 45, 2.0, mechanics(true, true, false, false), "👾"),
            boss("black-hole", ("Black Hole Master", "Schwarzes-Loch-Meister"), 6, 40, 2.2, mechanics(false, false, true, true), "🌌"),
            boss("quantum-ai", ("Quantum AI Core", "Quanten-KI-Kern"), 5, 35, 2.3, mechanics(true, false, true, false), "🧠"),
        ],
        rewards: vec![
            reward("rocket-boost", ("Rocket Boost", "Raketen-Boost"), ("+10% speed bonus", "+10% Geschwindigkeitsbonus"), "🚀", Rarity::Common),
            reward("star-shield", ("Star Shield", "Sternenschild"), ("One free mistake", "Ein kostenloser Fehler"), "⭐", Rarity::Rare),
            reward("cosmic-calculator", ("Cosmic Calculator", "Kosmischer Rechner"), ("Show hints for 5 problems", "Zeige Hinweise für 5 Aufgaben"), "🌟", Rarity::Epic),
        ],
        ambient_emojis: emojis(&["🌟", "✨", "🌙", "🪐", "☄️", "🛸", "🌠"]),
    }
}
