// Advisor entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries the report)
// 2. Load the embedded player catalog and default draw odds
// 3. Replay a deterministic self-advised draft: each round, offer the first
//    three unseen catalog players that fit the open slots, rank them, and
//    apply the top recommendation (falling back to a pre-round re-arrange
//    when nothing fits)
// 4. Print the final board summary as JSON

use std::collections::HashSet;

use anyhow::Context;
use tracing::info;

use griddy::catalog::{Catalog, Player};
use griddy::config::DraftOdds;
use griddy::engine::chemistry::{connection_details, dot_details};
use griddy::session::DraftSession;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("griddy advisor starting up");

    let catalog = Catalog::load_embedded().context("failed to load player catalog")?;
    info!("Catalog loaded: {} cards", catalog.len());

    let odds = DraftOdds::default();
    let mut session = DraftSession::new();

    while !session.is_complete() {
        let offered = offer_candidates(&session, &catalog);
        if offered.is_empty() {
            info!("no offerable candidates remain, stopping early");
            break;
        }

        let recommendations = session.evaluate(&offered, &catalog, &odds);
        match recommendations.first() {
            Some(top) => {
                let top = top.clone();
                println!(
                    "Round {}: pick {} -> slot {} (total {}, ev {:.1})",
                    session.round,
                    top.candidate.search_name(),
                    top.new_slot,
                    top.immediate.total,
                    top.ev,
                );
                session.confirm_pick(&top, &offered);
            }
            None => {
                // Nothing fits; re-arrange instead and let the round pass.
                let plan = session.pre_round_plan(&catalog, &odds);
                println!(
                    "Round {}: no placement, re-arranging (forward score {:.2})",
                    session.round, plan.score,
                );
                session.accept_pre_round_plan(&plan, &offered);
            }
        }
    }

    let score = session.score();
    println!(
        "Final: talent {} + chemistry {} = {}",
        score.talent, score.chemistry, score.total,
    );

    let summary = serde_json::json!({
        "score": score,
        "picks": session.picks,
        "connections": connection_details(&session.board),
        "dots": dot_details(&session.board),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// The first three unseen catalog players that fit the currently open
/// slots, one per base identity — a deterministic stand-in for the game's
/// random offer.
fn offer_candidates(session: &DraftSession, catalog: &Catalog) -> Vec<Player> {
    let offered_positions = session.board.offered_positions();
    let board_keys: HashSet<String> = session.board.players().map(|p| p.base_key()).collect();

    let mut taken_keys = HashSet::new();
    let mut offered = Vec::new();
    for player in catalog.players() {
        if offered.len() == 3 {
            break;
        }
        let key = player.base_key();
        if !offered_positions.contains(&player.position)
            || session.seen.contains(&key)
            || board_keys.contains(&key)
            || !taken_keys.insert(key)
        {
            continue;
        }
        offered.push(player.clone());
    }
    offered
}

/// Initialize tracing to stderr so the report on stdout stays clean.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("griddy=info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
