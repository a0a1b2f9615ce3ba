/// Picks the winning proposal id from vote counts listed in id order.
///
/// The leader is replaced only on a strictly greater count, so the lowest
/// id wins a tie. An empty ballot, or one where nobody voted, yields 0.
pub fn leading_proposal<I>(vote_counts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut leader_id = 0u64;
    let mut leader_count = 0u64;
    for (proposal_id, vote_count) in (0u64..).zip(vote_counts) {
        if vote_count > leader_count {
            leader_id = proposal_id;
            leader_count = vote_count;
        }
    }
    leader_id
}

#[cfg(test)]
mod tests {
    use super::leading_proposal;

    #[test]
    fn strictly_greatest_count_wins() {
        assert_eq!(leading_proposal([0, 1, 2]), 2);
        assert_eq!(leading_proposal([0, 5, 2, 4]), 1);
    }

    #[test]
    fn lowest_id_wins_a_tie() {
        assert_eq!(leading_proposal([0, 2, 2]), 1);
        assert_eq!(leading_proposal([1, 3, 0, 3, 3]), 1);
    }

    #[test]
    fn genesis_can_win() {
        assert_eq!(leading_proposal([3, 1, 2]), 0);
        assert_eq!(leading_proposal([2, 2]), 0);
    }

    #[test]
    fn defaults_to_zero_without_votes() {
        assert_eq!(leading_proposal([0, 0, 0]), 0);
        assert_eq!(leading_proposal(core::iter::empty()), 0);
    }
}
