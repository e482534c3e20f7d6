use rand::Rng;

/// Uniform sample in `[min, max)`.
///
/// An empty or inverted range does not panic: it falls back to
/// `min + U[0, 1) * (max - min)`, which yields `min` for an empty range and
/// a value in `(max, min]` for an inverted one.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max {
        return rng.random_range(min..max);
    }
    rng.random::<f64>() * (max - min) + min
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Generator stuck at the top of its output range.
    pub(crate) struct Saturated;

    impl RngCore for Saturated {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -3.0, 5.0);
            assert!((-3.0..5.0).contains(&v));
        }
    }

    #[test]
    fn test_uniform_excludes_upper_bound() {
        let v = uniform(&mut Saturated, 1.0, 2.0);
        assert!((1.0..2.0).contains(&v), "got {v}, expected value in [1, 2)");
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 2.0, 2.0), 2.0);
        let v = uniform(&mut rng, 5.0, 1.0);
        assert!(v > 1.0 && v <= 5.0);
    }
}
