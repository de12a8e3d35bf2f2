// Integration tests for the draft advisor.
//
// These tests exercise the full system end-to-end through the library
// crate's public API: the embedded catalog, the chemistry and scoring
// engines, the arrangement search, the expectation estimator, and the
// caller-owned session, all working together over complete drafts.

use std::collections::HashSet;

use griddy::catalog::{Catalog, Player, Position, Rarity, SeenSet};
use griddy::config::{DraftOdds, FINAL_ROUND};
use griddy::engine::chemistry::{
    chemistry_score, connection_color, connection_details, dot_details, LinkColor,
};
use griddy::engine::scoring::total_score;
use griddy::engine::search::{can_fit_with_rearrangement, evaluate_candidates, optimize_arrangement};
use griddy::grid::Board;
use griddy::session::DraftSession;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Offer the first `count` unseen catalog players fitting the open slots,
/// one per base identity — the deterministic stand-in for the game's random
/// offer used across these tests.
fn offer_candidates(session: &DraftSession, catalog: &Catalog, count: usize) -> Vec<Player> {
    let offered_positions = session.board.offered_positions();
    let board_keys: HashSet<String> = session.board.players().map(|p| p.base_key()).collect();

    let mut taken = HashSet::new();
    let mut offered = Vec::new();
    for player in catalog.players() {
        if offered.len() == count {
            break;
        }
        let key = player.base_key();
        if !offered_positions.contains(&player.position)
            || session.seen.contains(&key)
            || board_keys.contains(&key)
            || !taken.insert(key)
        {
            continue;
        }
        offered.push(player.clone());
    }
    offered
}

fn make_player(
    position: Position,
    rarity: Rarity,
    name: &str,
    team: &str,
    division: &str,
    draft_year: u16,
) -> Player {
    Player {
        position,
        rarity,
        initial: "T".into(),
        name: name.into(),
        division: division.into(),
        team: team.into(),
        draft_year,
    }
}

// ===========================================================================
// Full-draft scenarios
// ===========================================================================

#[test]
fn full_draft_runs_to_completion() {
    let catalog = Catalog::load_embedded().expect("embedded catalog");
    let odds = DraftOdds::default();
    let mut session = DraftSession::new();

    let mut last_seen_len = 0;
    while !session.is_complete() {
        let round = session.round;
        let offered = offer_candidates(&session, &catalog, 3);
        assert!(
            !offered.is_empty(),
            "catalog ran dry in round {round}, which must not happen"
        );

        let recommendations = session.evaluate(&offered, &catalog, &odds);
        assert!(
            !recommendations.is_empty(),
            "round {round}: at least one offered candidate must be placeable"
        );

        // Ranked output is sorted non-increasing by ev, and every surfaced
        // board is legal.
        for pair in recommendations.windows(2) {
            assert!(pair[0].ev >= pair[1].ev);
        }
        for rec in &recommendations {
            assert!(rec.board.is_valid());
        }

        let top = recommendations[0].clone();
        session.confirm_pick(&top, &offered);

        // The seen-set grows monotonically: all offered identities join it.
        assert!(session.seen.len() >= last_seen_len + offered.len());
        last_seen_len = session.seen.len();
        assert_eq!(session.round, round + 1);
    }

    assert_eq!(session.round, FINAL_ROUND + 1);
    assert_eq!(session.picks.len(), FINAL_ROUND as usize);
    assert_eq!(session.board.occupant_count(), FINAL_ROUND as usize);
    assert!(session.board.is_full());
    assert!(session.board.is_valid());

    // With nine picks on nine slots, talent alone is at least 9 * bronze.
    let score = session.score();
    assert!(score.talent >= 9 * Rarity::Bronze.talent());
    assert_eq!(score.total, score.talent + score.chemistry);
}

#[test]
fn draft_with_pre_round_arrangement_between_rounds() {
    let catalog = Catalog::load_embedded().unwrap();
    let odds = DraftOdds::default();
    let mut session = DraftSession::new();

    // Three picks, re-arranging the roster after each one.
    for _ in 0..3 {
        let offered = offer_candidates(&session, &catalog, 3);
        let recommendations = session.evaluate(&offered, &catalog, &odds);
        let top = recommendations[0].clone();
        session.confirm_pick(&top, &offered);

        let plan = session.pre_round_plan(&catalog, &odds);
        assert!(plan.board.is_valid());
        assert_eq!(
            plan.board.occupant_count(),
            session.board.occupant_count(),
            "re-arrangement must not add or drop players"
        );
        // Adopting the board directly (without consuming a round) keeps the
        // same roster, possibly re-seated.
        session.board = plan.board;
    }

    assert_eq!(session.round, 4);
    assert_eq!(session.board.occupant_count(), 3);
}

#[test]
fn offered_identities_never_reappear() {
    let catalog = Catalog::load_embedded().unwrap();
    let odds = DraftOdds::default();
    let mut session = DraftSession::new();

    let first_offer = offer_candidates(&session, &catalog, 3);
    let first_keys: HashSet<String> = first_offer.iter().map(|p| p.base_key()).collect();
    let recommendations = session.evaluate(&first_offer, &catalog, &odds);
    let top = recommendations[0].clone();
    session.confirm_pick(&top, &first_offer);

    // No future offer may contain any rarity variant of a seen identity.
    for _ in 0..4 {
        let offered = offer_candidates(&session, &catalog, 3);
        for candidate in &offered {
            assert!(
                !first_keys.contains(&candidate.base_key()),
                "{} reappeared after being seen",
                candidate.search_name()
            );
        }
        let recommendations = session.evaluate(&offered, &catalog, &odds);
        if let Some(top) = recommendations.first().cloned() {
            session.confirm_pick(&top, &offered);
        }
    }
}

// ===========================================================================
// Scoring and search properties through the public API
// ===========================================================================

#[test]
fn chemistry_total_decomposes_for_real_rosters() {
    let catalog = Catalog::load_embedded().unwrap();
    // Seat a handful of real catalog players.
    let mut board = Board::new();
    for player in catalog.players() {
        if board.is_full() {
            break;
        }
        for slot in board.valid_slots(player) {
            board = board.place(slot, player.clone());
            break;
        }
    }
    assert!(board.is_full());

    let chem = chemistry_score(&board);
    assert_eq!(chem.total, chem.connection_score + chem.dot_score);

    let score = total_score(&board);
    assert_eq!(score.total, score.talent + score.chemistry);
    assert_eq!(score.chem_connections, chem.connection_score);
    assert_eq!(score.chem_dots, chem.dot_score);
}

#[test]
fn connection_examples_from_the_rulebook() {
    // Shared team is green no matter what else differs.
    let a = make_player(Position::TightEnd, Rarity::Hero, "kelce", "KC", "AW", 13);
    let b = make_player(Position::WideReceiver, Rarity::Gold, "rice", "KC", "NW", 23);
    assert_eq!(connection_color(&a, &b), LinkColor::Green);

    // Shared division with different teams and years is yellow.
    let c = make_player(Position::Quarterback, Rarity::Gold, "allen", "BUF", "AE", 18);
    let d = make_player(Position::RunningBack, Rarity::Gold, "achane", "MIA", "AE", 23);
    assert_eq!(connection_color(&c, &d), LinkColor::Yellow);

    // Unrelated pair is red.
    let e = make_player(Position::WideReceiver, Rarity::Gold, "nacua", "LAR", "NW", 23);
    assert_eq!(connection_color(&c, &e), LinkColor::Red);
}

#[test]
fn display_details_cover_every_edge_and_slot() {
    let board = Board::new().place(
        3,
        make_player(Position::Quarterback, Rarity::Hero, "allen", "BUF", "AE", 18),
    );
    let connections = connection_details(&board);
    assert_eq!(connections.len(), 15);
    let dots = dot_details(&board);
    assert_eq!(dots.len(), 9);
    assert_eq!(dots[3].color, Some(LinkColor::Red));
    assert!(dots[0].color.is_none());
}

#[test]
fn feasibility_probe_agrees_with_search_on_small_rosters() {
    let catalog = Catalog::load_embedded().unwrap();
    let odds = DraftOdds::default();
    let seen = SeenSet::new();

    // A board with both QB cells taken and an open FLX.
    let board = Board::new()
        .place(3, make_player(Position::Quarterback, Rarity::Gold, "a", "KC", "AW", 17))
        .place(4, make_player(Position::Quarterback, Rarity::Gold, "b", "BUF", "AE", 18));

    let stuck_qb = make_player(Position::Quarterback, Rarity::Hero, "c", "CIN", "AN", 20);
    let rb = make_player(Position::RunningBack, Rarity::Gold, "d", "SEA", "NW", 22);

    assert!(!can_fit_with_rearrangement(&board, &stuck_qb));
    assert!(can_fit_with_rearrangement(&board, &rb));

    let results = evaluate_candidates(
        &board,
        &[stuck_qb.clone(), rb.clone()],
        FINAL_ROUND,
        &seen,
        &catalog,
        &odds,
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate, rb);
}

#[test]
fn repacking_a_scrambled_roster_recovers_chemistry() {
    // Four Lions teammates seated with no adjacency: the repack must find a
    // connected arrangement and strictly raise the chemistry score.
    let board = Board::new()
        .place(0, make_player(Position::RunningBack, Rarity::Gold, "gibbs", "DET", "NN", 23))
        .place(1, make_player(Position::WideReceiver, Rarity::Gold, "st brown", "DET", "NN", 21))
        .place(7, make_player(Position::TightEnd, Rarity::Gold, "laporta", "DET", "NN", 23))
        .place(4, make_player(Position::Quarterback, Rarity::Gold, "goff", "DET", "NN", 16));

    let before = total_score(&board);
    let result = optimize_arrangement(&board);
    assert!(result.board.is_valid());
    assert_eq!(result.board.occupant_count(), 4);
    assert!(
        result.score.chemistry > before.chemistry,
        "repack must connect the teammates: {} -> {}",
        before.chemistry,
        result.score.chemistry
    );
    // Talent is invariant under re-seating.
    assert_eq!(result.score.talent, before.talent);
}
