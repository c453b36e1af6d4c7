use super::UrlStats;

/// The `n` URLs with the greatest total time contribution, descending.
/// The sort is stable, so ties keep their input order.
pub fn top_n(stats: &[UrlStats], n: usize) -> Vec<UrlStats> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.time_sum.partial_cmp(&a.time_sum).unwrap());
    ranked.truncate(n);
    ranked
}
