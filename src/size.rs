//! Choice of how many coordinates a run draws.

use rand::Rng;

use crate::config::{MIN_INPUTS, RunConfig};

/// Return the number of draws for this run.
///
/// A non-zero `fixed_size` is used as-is, even outside
/// `[MIN_INPUTS, max_size]`. Otherwise the count is uniform over
/// `[MIN_INPUTS, max_size]` inclusive; `RunConfig::resolve` guarantees that
/// range is non-empty.
pub fn pick_size<R: Rng + ?Sized>(cfg: &RunConfig, rng: &mut R) -> u64 {
    if cfg.fixed_size != 0 {
        return cfg.fixed_size;
    }
    rng.gen_range(MIN_INPUTS..=cfg.max_size.max(MIN_INPUTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_size_bypasses_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let cfg = RunConfig::resolve(10_000, 5000, 3).unwrap();
        assert_eq!(pick_size(&cfg, &mut rng), 3);

        let cfg = RunConfig::resolve(10_000, 5000, -90_000).unwrap();
        assert_eq!(pick_size(&cfg, &mut rng), 90_000);
    }

    #[test]
    fn random_size_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = RunConfig::resolve(10_000, 40, 0).unwrap();
        for _ in 0..1000 {
            let n = pick_size(&cfg, &mut rng);
            assert!((MIN_INPUTS..=40).contains(&n), "size {n} out of range");
        }
    }

    #[test]
    fn max_size_ten_always_ten() {
        let mut rng = StdRng::seed_from_u64(99);
        let cfg = RunConfig::resolve(10_000, 10, 0).unwrap();
        for _ in 0..100 {
            assert_eq!(pick_size(&cfg, &mut rng), 10);
        }
    }

    #[test]
    fn same_seed_same_size() {
        let cfg = RunConfig::default();
        let a = pick_size(&cfg, &mut StdRng::seed_from_u64(42));
        let b = pick_size(&cfg, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
