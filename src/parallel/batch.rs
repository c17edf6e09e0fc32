//! Batch distribution for parallel candidate evaluation.
//!
//! Splits work into batches for parallel execution or progress reporting.
//! The Monte Carlo runner uses one candidate per parallel task; this module
//! provides batch boundaries and a pool-scoped batch entry point.

use crate::engine::simulate::{
    evaluate_candidates_parallel, EvaluationResult, ShotCandidate, SimulationConfig,
    SituationContext,
};
use crate::parallel::pool::WorkerPool;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use caddy::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run the parallel candidate evaluation on a sized worker pool. Results
/// preserve candidate order.
pub fn run_evaluation_batches(
    candidates: &[ShotCandidate],
    ctx: &SituationContext,
    config: SimulationConfig,
    pool: &WorkerPool,
) -> Vec<EvaluationResult> {
    pool.install(|| evaluate_candidates_parallel(candidates, ctx, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::curves::Surface;
    use crate::engine::dispersion::ClubCategory;
    use crate::engine::green::TroubleLabel;

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_with_remainder() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 10);
        assert_eq!(r.len(), 3);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn pooled_evaluation_preserves_order() {
        let ctx = SituationContext {
            start_distance: 160.0,
            start_surface: Surface::Fairway,
            target_distance: 160.0,
            front_yards: None,
            back_yards: None,
            trouble_short: TroubleLabel::None,
            trouble_long: TroubleLabel::None,
            skill_factor: 1.0,
        };
        let candidates: Vec<ShotCandidate> = (0..8)
            .map(|i| ShotCandidate {
                total: 140.0 + 5.0 * i as f64,
                long_sigma: 9.0,
                category: ClubCategory::ShortIron,
            })
            .collect();
        let pool = WorkerPool::with_workers(2);
        let results = run_evaluation_batches(
            &candidates,
            &ctx,
            SimulationConfig::default(),
            &pool,
        );
        assert_eq!(results.len(), candidates.len());
        for (result, candidate) in results.iter().zip(candidates.iter()) {
            assert_eq!(result.candidate.total, candidate.total);
        }
    }
}
