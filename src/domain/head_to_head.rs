use super::matches::MatchRecord;

/// Win counts over all matches two players took part in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub total_matches: usize,
}

impl HeadToHead {
    pub fn tally<'a>(
        matches: impl IntoIterator<Item = &'a MatchRecord>,
        player1: &str,
        player2: &str,
    ) -> Self {
        let mut record = Self::default();

        for played in matches {
            if !(played.involves(player1) && played.involves(player2)) {
                continue;
            }
            record.total_matches += 1;
            match played.winner_name() {
                Some(winner) if winner == player1 => record.player1_wins += 1,
                Some(winner) if winner == player2 => record.player2_wins += 1,
                _ => {}
            }
        }

        record
    }
}
