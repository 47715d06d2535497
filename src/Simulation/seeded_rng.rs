//! String-seeded pseudo random stream: FNV-1a fold of the seed, xorshift32 steps.
//!
//! The stream only depends on the seed string, so the same input always produces the same
//! layout jitter on every platform. All arithmetic is wrapping `u32`.

/// FNV-1a offset basis (32 bit)
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// FNV-1a prime (32 bit)
pub const FNV_PRIME: u32 = 16_777_619;

const DRAW_MODULUS: u32 = 1_000_000;

/// Folds a string into 32 bits, FNV-1a style, over its UTF-16 code units.
pub fn fnv1a_fold(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ unit as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Deterministic generator owned by the computation that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self {
            state: fnv1a_fold(seed),
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next draw in [0, 1), with a resolution of 1e-6.
    pub fn next(&mut self) -> f64 {
        (self.step() % DRAW_MODULUS) as f64 / DRAW_MODULUS as f64
    }

    /// Next draw mapped linearly onto [lo, hi).
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next()
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(SeededRng::next(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_constants() {
        assert_eq!(fnv1a_fold(""), 0x811c_9dc5);
        // well known FNV-1a 32 bit test vector
        assert_eq!(fnv1a_fold("a"), 0xe40c_292c);
        assert_eq!(fnv1a_fold("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_fold_uses_utf16_units() {
        // 'é' is one UTF-16 unit (0xE9) but two UTF-8 bytes
        let expected = (FNV_OFFSET_BASIS ^ 0xE9).wrapping_mul(FNV_PRIME);
        assert_eq!(fnv1a_fold("é"), expected);
    }

    #[test]
    fn test_first_draw_by_hand() {
        let mut x = fnv1a_fold("CCO");
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        let expected = (x % 1_000_000) as f64 / 1_000_000.0;
        let mut rng = SeededRng::new("CCO");
        assert_eq!(rng.next(), expected);
        assert_eq!(rng.state(), x);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<f64> = SeededRng::new("ClCCl|water").take(1000).collect();
        let b: Vec<f64> = SeededRng::new("ClCCl|water").take(1000).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a: Vec<f64> = SeededRng::new("CCO").take(16).collect();
        let b: Vec<f64> = SeededRng::new("CCN").take(16).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_draws_in_unit_interval() {
        for seed in ["", "C", "Br", "a much longer seed string with spaces"] {
            for v in SeededRng::new(seed).take(1000) {
                assert!((0.0..1.0).contains(&v), "draw {v} out of range");
            }
        }
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new("range");
        for _ in 0..200 {
            let v = rng.next_range(-0.5, 0.5);
            assert!((-0.5..0.5).contains(&v));
        }
    }
}
