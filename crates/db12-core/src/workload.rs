//! The DB12 statistical workload kernel.

use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

/// Running sums accumulated by the workload.
///
/// Two independent (sum, sum-of-squares) pairs, carried across
/// iterations. The values are never interpreted; the accumulation only
/// exists to keep the floating-point and PRNG pipelines busy in a
/// CPU-bound, memory-light, branch-light way.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Accumulators {
    pub m1: f64,
    pub m2: f64,
    pub p1: f64,
    pub p2: f64,
}

/// Run one workload iteration: `draws` normal draws folded into `acc`.
pub(crate) fn run_iteration(
    rng: &mut SmallRng,
    normal: &Normal<f64>,
    draws: u64,
    acc: &mut Accumulators,
) {
    for _ in 0..draws {
        let t = normal.sample(rng);
        acc.m1 += t;
        acc.m2 += t * t;
        acc.p1 += t;
        acc.p2 += t * t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DRAW_MEAN, DRAW_STDDEV};
    use rand::SeedableRng;

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn sums_track_the_distribution() {
        let mut rng = SmallRng::seed_from_u64(42);
        let normal = Normal::new(DRAW_MEAN, DRAW_STDDEV).unwrap();
        let mut acc = Accumulators::default();
        let draws = 10_000u64;

        run_iteration(&mut rng, &normal, draws, &mut acc);

        let mean = acc.m1 / draws as f64;
        // E[t^2] = mean^2 + stddev^2 = 101 for Normal(10, 1)
        let mean_sq = acc.m2 / draws as f64;
        assert!((mean - DRAW_MEAN).abs() < 0.1, "mean was {mean}");
        assert!((mean_sq - 101.0).abs() < 2.0, "mean square was {mean_sq}");
        // The two accumulator pairs see the same draws
        assert!((acc.m1 - acc.p1).abs() < f64::EPSILON);
        assert!((acc.m2 - acc.p2).abs() < f64::EPSILON);
    }

    #[test]
    fn accumulates_across_calls() {
        let mut rng = SmallRng::seed_from_u64(7);
        let normal = Normal::new(DRAW_MEAN, DRAW_STDDEV).unwrap();
        let mut acc = Accumulators::default();

        run_iteration(&mut rng, &normal, 100, &mut acc);
        let after_first = acc.m1;
        run_iteration(&mut rng, &normal, 100, &mut acc);
        assert!(acc.m1 > after_first);
    }

    #[test]
    fn zero_draws_is_a_no_op() {
        let mut rng = SmallRng::seed_from_u64(0);
        let normal = Normal::new(DRAW_MEAN, DRAW_STDDEV).unwrap();
        let mut acc = Accumulators::default();
        run_iteration(&mut rng, &normal, 0, &mut acc);
        assert!(acc.m1.abs() < f64::EPSILON);
    }
}
