use rand::Rng;

/// Source of randomness handed to the scorer instead of ambient RNG state,
/// so tests can substitute a deterministic implementation.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in [0, 1).
    fn uniform(&self) -> f64;

    /// Uniform integer in the inclusive range [low, high].
    fn int_in_range(&self, low: u32, high: u32) -> u32;
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&self) -> f64 {
        rand::thread_rng().gen()
    }

    fn int_in_range(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic source returning fixed values, for tests.
pub struct FixedSource {
    uniform: f64,
    id: u32,
}

impl FixedSource {
    pub fn new(uniform: f64, id: u32) -> Self {
        FixedSource { uniform, id }
    }
}

impl RandomSource for FixedSource {
    fn uniform(&self) -> f64 {
        self.uniform
    }

    fn int_in_range(&self, low: u32, high: u32) -> u32 {
        self.id.clamp(low, high)
    }
}
