//! Quest generation and progress tracking.
//!
//! Run with: `cargo run --example quests`
//! `RUST_LOG=math_drill_gen=debug` shows one event per generated quest.
//!
//! 1. **Previews**: the first quests of every theme, showing how the path
//!    grows and how milestones (multiples of 5) get the full structure.
//! 2. **A played run**: one quest walked node by node, answers scored with
//!    the combo bonus, bosses defeated and achievements unlocked.
//! 3. **Snapshots**: progress exported to JSON and imported again.

use math_drill_gen::{
    check_answer, generate_worksheet_problems, NodeAdvance, NodeType, Operation, ProgressTracker, Quest,
    QuestGenerator, ThemeType, WorksheetSettings,
};
use tracing_subscriber::EnvFilter;

fn print_quest(quest: &Quest) {
    let bonuses = QuestGenerator::quest_bonuses(quest.number);
    let star = if QuestGenerator::is_special_quest(quest.number) { "★" } else { " " };
    println!(
        "  {star} #{:<3} {:<40} {:>3} problems  x{:.1}",
        quest.number, quest.title.en, quest.total_problems, bonuses.score_multiplier
    );
    let path: Vec<String> = quest
        .path
        .iter()
        .map(|node| match &node.name {
            Some(name) => format!("{:?}({})", node.node_type, name),
            None => format!("{:?}", node.node_type),
        })
        .collect();
    println!("        {}", path.join(" → "));
    let rewards: Vec<String> = quest.rewards.iter().map(|r| format!("{} {}", r.icon, r.name)).collect();
    println!("        rewards: {}", rewards.join(", "));
}

fn main() -> math_drill_gen::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generator = QuestGenerator::new();

    // ── Previews ───────────────────────────────────────────────────────────
    for theme in ThemeType::ALL {
        let d = generator.dictionary(theme);
        println!("━━ {} {} ━━", d.icon, d.name);
        for quest in generator.quest_preview(theme, 1, 5) {
            print_quest(&quest);
        }
        println!();
    }

    // ── A played run ───────────────────────────────────────────────────────
    let theme: ThemeType = "space".parse()?;
    let quest = generator.generate_quest(theme, 10);
    let mut tracker = ProgressTracker::new("demo-player");
    tracker.set_current_theme(theme);
    tracker.start_quest(&quest);
    println!("━━ Playing {} ━━", quest.id);

    let mut index = 0;
    loop {
        let node = &quest.path[index];
        if let Some(count) = node.problems {
            let problems = generate_worksheet_problems(&WorksheetSettings {
                mixed_operations: true,
                problems_per_page: count as usize,
                rng_seed: Some(quest.seed + index as u64),
                ..WorksheetSettings::new(Operation::Addition)
            });
            let mut points = 0;
            for (i, p) in problems.iter().enumerate() {
                // Every seventh answer is off by one to show the combo reset.
                let answer = if i % 7 == 6 { p.expected_value() + 1 } else { p.expected_value() };
                points += tracker.record_answer(theme, check_answer(p, answer))?;
            }
            println!("  {:?}: {count} problems, {points} points", node.node_type);
        }
        if let Some(boss) = &node.boss {
            tracker.defeat_boss(theme, boss);
            println!("  {:?}: defeated {} {}", node.node_type, boss.sprite.as_deref().unwrap_or(""), boss.name);
        }
        match tracker.complete_node(theme, &quest)? {
            NodeAdvance::Next(next) => index = next,
            NodeAdvance::QuestComplete => break,
        }
    }
    debug_assert_eq!(quest.path.last().map(|n| n.node_type), Some(NodeType::Reward));
    tracker.complete_quest(theme)?;

    let stats = &tracker.progress().statistics;
    println!(
        "  score {}  best combo {}  bosses {}  correct answers {}",
        stats.total_score, stats.best_combo, stats.total_bosses_defeated, stats.total_problems
    );
    for a in tracker.unlocked_achievements() {
        println!("  🏆 {} {} (+{})", a.icon, a.title, a.points);
    }
    println!("  achievement points: {}", tracker.total_achievement_points());
    println!();

    // ── Snapshots ──────────────────────────────────────────────────────────
    let snapshot = tracker.export_json()?;
    let mut restored = ProgressTracker::new("someone-else");
    restored.import_json(&snapshot)?;
    println!(
        "━━ Restored {}: {} quest(s) in {} ━━",
        restored.progress().player_id,
        restored.theme(theme).quests_completed,
        theme
    );
    Ok(())
}
