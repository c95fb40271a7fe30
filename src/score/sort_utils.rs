use ahash::RandomState;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{LeaderboardRow, Standing};

#[must_use]
pub fn sort_groups<K: Ord, V>(grouped: HashMap<K, V, RandomState>) -> Vec<(K, V)> {
    let mut sorted_groups: Vec<(K, V)> = grouped.into_iter().collect();

    sorted_groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    sorted_groups
}

/// Net to par, then gross to par, then display name, then entity id. Lower is better.
#[must_use]
pub fn compare_rows(a: &LeaderboardRow, b: &LeaderboardRow) -> Ordering {
    a.net_relative_to_par
        .cmp(&b.net_relative_to_par)
        .then_with(|| a.gross_relative_to_par.cmp(&b.gross_relative_to_par))
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.entity_id.cmp(&b.entity_id))
}

#[must_use]
pub fn rank_leaderboard(mut rows: Vec<LeaderboardRow>) -> Vec<LeaderboardRow> {
    rows.sort_by(compare_rows);
    rows
}

/// Finishing positions for already ranked rows. Equal net scores share a position,
/// and the next score down takes its place in the field (1, T2, T2, 4).
#[must_use]
pub fn assign_positions(ranked: &[LeaderboardRow]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = Vec::with_capacity(ranked.len());

    for (i, row) in ranked.iter().enumerate() {
        let position = match standings.last() {
            Some(prev) if prev.row.net_relative_to_par == row.net_relative_to_par => prev.position,
            _ => i + 1,
        };
        standings.push(Standing {
            position,
            tied: false,
            row: row.clone(),
        });
    }

    // shared positions are contiguous
    let positions: Vec<usize> = standings.iter().map(|s| s.position).collect();
    for (i, standing) in standings.iter_mut().enumerate() {
        standing.tied = (i > 0 && positions[i - 1] == positions[i])
            || positions.get(i + 1) == Some(&positions[i]);
    }

    standings
}
