use super::*;

pub(super) fn dictionary() -> ThemeDictionary {
    ThemeDictionary {
        theme: ThemeType::Ocean,
        name: loc("Ocean Explorer", "Ozean-Erforscher"),
        icon: "🌊".into(),
        colors: colors("#0891b2", "#0e7490", "#06b6d4", "#083344", "from-cyan-900 via-blue-800 to-teal-700"),
        locations: locs(&[
            ("Coral Reef", "Korallenriff"),
            ("Sunken Ship", "Versunkenes Schiff"),
            ("Deep Trench", "Tiefseegraben"),
            ("Kelp Forest", "Tangwald"),
            ("Underwater Cave", "Unterwasserhöhle"),
            ("Atlantis Ruins", "Atlantis-Ruinen"),
        ]),
        actions: locs(&[
            ("Dive into", "Tauche in"),
            ("Explore", "Erforsche"),
            ("Navigate", "Navigiere"),
            ("Discover", "Entdecke"),
            ("Swim through", "Schwimme durch"),
            ("Search", "Durchsuche"),
        ]),
        challenges: vec![
            challenge(
                "current-navigation",
                ("Current Navigation", "Strömungs-Navigation"),
                ("Calculate against the flow!", "Rechne gegen die Strömung!"),
                12, 1.2, reverse_order(),
            ),
            challenge(
                "treasure-hunt",
                ("Treasure Hunt", "Schatzsuche"),
                ("Find hidden math treasures!", "Finde versteckte Mathe-Schätze!"),
                15, 1.0, None,
            ),
        ],
        mini_bosses: vec![
            boss("shark-leader", ("Hammerhead Leader", "Hammerhai-Anführer"), 4, 30, 1.6, None, "🦈"),
            boss("octopus-guardian", ("Giant Octopus", "Riesenkrake"), 3, 25, 1.7, mechanics(false, false, true, false), "🐙"),
        ],
        final_bosses: vec![
            boss("kraken", ("The Kraken", "Der Kraken"), 6, 45, 2.3, mechanics(true, false, true, false), "🦑"),
            boss("poseidon", ("Poseidon's Guardian", "Poseidons Wächter"), 5, 40, 2.1, mechanics(false, true, false, true), "🔱"),
        ],
        rewards: vec![
            reward("bubble-shield", ("Bubble Shield", "Blasenschild"), ("Extra time for problems", "Extra Zeit für Aufgaben"), "🫧", Rarity::Common),
            reward("pearls-wisdom", ("Pearl of Wisdom", "Perle der Weisheit"), ("Double points for perfect streak", "Doppelte Punkte für perfekte Serie"), "🦪", Rarity::Legendary),
        ],
        ambient_emojis: emojis(&["🐠", "🐟", "🐡", "🦀", "🌊", "🐚", "🏊"]),
    }
}
