use super::*;

pub(super) fn dictionary() -> ThemeDictionary {
    ThemeDictionary {
        theme: ThemeType::Dino,
        name: loc("Dino Discovery", "Dino-Entdeckung"),
        icon: "🦕".into(),
        colors: colors("#059669", "#84cc16", "#f59e0b", "#14532d", "from-green-900 via-emerald-800 to-lime-700"),
        locations: locs(&[
            ("Jungle Valley", "Dschungeltal"),
            ("Volcano Crater", "Vulkankrater"),
            ("Ancient Cave", "Uralte Höhle"),
            ("Fossil Site", "Fossilienstätte"),
            ("Tar Pits", "Teergruben"),
            ("Crystal Cavern", "Kristallhöhle"),
            ("Prehistoric Lake", "Prähistorischer See"),
        ]),
        actions: locs(&[
            ("Excavate", "Grabe aus"),
            ("Track", "Verfolge"),
            ("Study", "Erforsche"),
            ("Tame", "Zähme"),
            ("Escape from", "Fliehe vor"),
            ("Discover", "Entdecke"),
            ("Protect", "Beschütze"),
        ]),
        challenges: vec![
            challenge(
                "fossil-hunt",
                ("Fossil Hunt", "Fossilien-Jagd"),
                ("Dig up ancient math problems!", "Grabe uralte Matheaufgaben aus!"),
                12, 1.0, None,
            ),
            challenge(
                "stampede-escape",
                ("Stampede Escape", "Stampeden-Flucht"),
                ("Calculate fast to outrun the herd!", "Rechne schnell um der Herde zu entkommen!"),
                10, 1.3, time_bonus(),
            ),
            challenge(
                "egg-protection",
                ("Egg Protection", "Eier-Schutz"),
                ("No mistakes allowed!", "Keine Fehler erlaubt!"),
                8, 1.2, no_mistakes(),
            ),
        ],
        mini_bosses: vec![
            boss("raptor-pack", ("Raptor Pack Leader", "Raptor-Rudel-Anführer"), 3, 25, 1.5, None, "🦖"),
            boss("pterodactyl", ("Giant Pterodactyl", "Riesen-Pterodaktylus"), 4, 30, 1.6, mechanics(false, false, true, false), "🦅"),
        ],
        final_bosses: vec![
            boss("t-rex", ("Tyrannosaurus Rex", "Tyrannosaurus Rex"), 5, 40, 2.0, mechanics(true, false, false, false), "🦕"),
            boss("mega-raptor", ("Mega Raptor", "Mega-Raptor"), 6, 35, 2.2, mechanics(false, true, true, false), "🦖"),
        ],
        rewards: vec![
            reward("dino-egg", ("Dino Egg", "Dino-Ei"), ("Hatch for bonus points", "Schlüpfe für Bonuspunkte"), "🥚", Rarity::Common),
            reward("fossil-armor", ("Fossil Armor", "Fossilien-Rüstung"), ("Protection from one mistake", "Schutz vor einem Fehler"), "🦴", Rarity::Rare),
        ],
        ambient_emojis: emojis(&["🌿", "🌴", "🦕", "🦖", "🌺", "🍃", "🦴"]),
    }
}
