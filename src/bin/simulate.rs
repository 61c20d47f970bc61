use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use deck_battle::core::{BattleConfig, SimConfig};
use deck_battle::loader::Catalog;
use deck_battle::sim::{ActionStats, Simulator};
use deck_battle::strategy::FirstPlayable;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Run many battles of one deck against one enemy group")]
struct Args {
    /// Directory holding cards.json, enemies.json, decks.json, enemy_groups.json
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Deck id from decks.json
    #[arg(long)]
    deck: String,

    /// Enemy group id from enemy_groups.json
    #[arg(long)]
    group: String,

    /// Number of battles
    #[arg(long, default_value_t = 100)]
    simulations: u32,

    /// RNG base seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Player starting hp
    #[arg(long, default_value_t = 50)]
    hp: i32,

    /// Player energy per turn
    #[arg(long, default_value_t = 3)]
    energy: i32,

    /// Safety cap on rounds per battle
    #[arg(long, default_value_t = 100)]
    max_turns: u32,

    /// Play the first playable card instead of a random one
    #[arg(long, default_value_t = false)]
    first_playable: bool,

    /// Write the JSON report here (defaults to <deck>_vs_<group>.json)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the most common opening plays from winning battles
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = Arc::new(
        Catalog::load_dir(&args.data)
            .with_context(|| format!("loading definitions from {}", args.data.display()))?,
    );

    let config = SimConfig::new()
        .with_simulations(args.simulations)
        .with_seed(args.seed)
        .with_player_hp(args.hp)
        .with_player_energy(args.energy)
        .with_battle(BattleConfig::new().with_max_turns(args.max_turns));

    let mut simulator = Simulator::new(Arc::clone(&catalog), config);
    if args.first_playable {
        simulator = simulator.with_strategy(|| FirstPlayable);
    }

    let report = simulator
        .run(&args.deck, &args.group)
        .with_context(|| format!("simulating {} vs {}", args.deck, args.group))?;

    let out = args.out.clone().unwrap_or_else(|| {
        PathBuf::from(format!("{}_vs_{}.json", report.deck_name, report.enemygroup_name))
    });
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&out, json).with_context(|| format!("writing {}", out.display()))?;

    println!(
        "{} vs {}: {}/{} wins ({:.1}%), {:.1} turns per win",
        report.deck_name,
        report.enemygroup_name,
        report.wins(),
        report.simulations.len(),
        report.win_rate() * 100.0,
        report.avg_turns_to_win()
    );
    println!("Saved report to {}", out.display());

    if args.stats {
        let stats = ActionStats::from_report(&report, true);
        println!("{} distinct situations in winning battles", stats.situations());
        let Some(first_win) = report.simulations.iter().find(|s| s.win) else {
            return Ok(());
        };
        if let Some(opening) = first_win.turns.first() {
            let hand = opening
                .hand
                .iter()
                .map(|id| {
                    catalog
                        .instantiate_card(id)
                        .with_context(|| format!("card {id} missing from catalog"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            for rec in stats.rank(opening.turn, &hand).iter().take(5) {
                println!(
                    "  turn {}: {} -> [{}] x{}",
                    opening.turn,
                    rec.card,
                    rec.targets.join(", "),
                    rec.count
                );
            }
        }
    }

    Ok(())
}
