//! Leaderboard with fixed sample rivals and the current user.

use crate::progression::TierTable;
use serde::Serialize;

/// Rank shown for the user when they are outside the listed top entries
pub const DEFAULT_USER_RANK: u32 = 42;

const SAMPLE_ENTRIES: &[(&str, u64)] = &[
    ("Nguyen Van A", 3500),
    ("Tran Thi B", 2800),
    ("Le Van C", 2200),
    ("Pham Thi D", 1800),
    ("Hoang Van E", 1500),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u64,
    pub tier: String,
    pub is_you: bool,
}

/// Build the board for `user_points`.
///
/// The user's row is appended last with `DEFAULT_USER_RANK`, unless the
/// user outscores a listed rival; then they take that position and
/// everyone below shifts down one rank.
pub fn build(user_name: &str, user_points: u64, table: &TierTable) -> Vec<LeaderboardEntry> {
    let tier_name = |points: u64| table.resolve(points).current_tier.display_name.clone();

    let mut rows: Vec<LeaderboardEntry> = SAMPLE_ENTRIES
        .iter()
        .map(|&(name, points)| LeaderboardEntry {
            rank: 0,
            name: name.to_string(),
            points,
            tier: tier_name(points),
            is_you: false,
        })
        .collect();

    let you = LeaderboardEntry {
        rank: DEFAULT_USER_RANK,
        name: format!("{} (You)", user_name),
        points: user_points,
        tier: tier_name(user_points),
        is_you: true,
    };

    match rows.iter().position(|r| user_points > r.points) {
        Some(pos) => {
            rows.insert(pos, you);
            for (i, row) in rows.iter_mut().enumerate() {
                row.rank = i as u32 + 1;
            }
        }
        None => {
            for (i, row) in rows.iter_mut().enumerate() {
                row.rank = i as u32 + 1;
            }
            rows.push(you);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_outside_top() {
        let table = TierTable::default_table();
        let board = build("Minh Anh", 1250, &table);

        assert_eq!(board.len(), 6);
        let you = board.last().unwrap();
        assert!(you.is_you);
        assert_eq!(you.rank, DEFAULT_USER_RANK);
        assert_eq!(you.tier, "Focuser");
        assert_eq!(board[0].tier, "Master");
    }

    #[test]
    fn test_user_climbs() {
        let table = TierTable::default_table();
        let board = build("Minh Anh", 3000, &table);

        let you = board.iter().find(|r| r.is_you).unwrap();
        assert_eq!(you.rank, 2);
        assert_eq!(board[2].name, "Tran Thi B");
        assert_eq!(board[2].rank, 3);
        assert!(board.windows(2).all(|w| w[0].points >= w[1].points));
    }
}
