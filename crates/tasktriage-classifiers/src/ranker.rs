//! Category ranking

use crate::scorer::ScoreBoard;
use serde::{Deserialize, Serialize};

/// Maximum number of secondary categories reported
pub const MAX_SECONDARY: usize = 2;

/// Which runner-up categories are reported as secondaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryMode {
    /// Ranks 2 and 3 whatever their score, including zero
    #[default]
    IncludeZero,
    /// Ranks 2 and 3, dropping categories that scored zero
    NonZero,
}

/// Ranked view over a score board
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Card indices ordered by score, highest first
    pub order: Vec<usize>,
    /// Card indices of the reported secondaries
    pub secondary: Vec<usize>,
    /// Primary raw score clamped to [0, 1]
    pub confidence: f32,
}

impl Ranking {
    /// Card index of the winning category
    pub fn primary(&self) -> usize {
        self.order[0]
    }
}

/// Rank categories by score, highest first
///
/// The sort is stable, so equal scores keep declaration order. With every
/// score at zero the first declared category still wins.
///
/// The board must not be empty; boards built from a compiled
/// [`RuleTable`](crate::rules::RuleTable) never are.
pub fn rank(board: &ScoreBoard<'_>, mode: SecondaryMode) -> Ranking {
    let mut order: Vec<usize> = (0..board.cards.len()).collect();
    order.sort_by(|&a, &b| board.cards[b].score.total_cmp(&board.cards[a].score));

    let secondary = order
        .iter()
        .skip(1)
        .take(MAX_SECONDARY)
        .copied()
        .filter(|&i| match mode {
            SecondaryMode::IncludeZero => true,
            SecondaryMode::NonZero => board.cards[i].score > 0.0,
        })
        .collect();

    let confidence = order
        .first()
        .map(|&i| board.cards[i].score.clamp(0.0, 1.0))
        .unwrap_or(0.0);

    Ranking {
        order,
        secondary,
        confidence,
    }
}
