/// Returns the threshold hit by `total`, if any. The comparison is strict
/// equality against the post-insert total: a count that jumps past a
/// threshold (bulk seeding, imports) never fires it. Counts only grow, so
/// each threshold can match at most once.
pub fn milestone_reached(thresholds: &[i64], total: i64) -> Option<i64> {
    thresholds.iter().copied().find(|&t| t == total)
}
