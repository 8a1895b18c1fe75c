use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the title pick. The only non-deterministic input to the script
/// assembler.
pub trait TitleSelector {
    /// Returns an index in `0..candidates`. `candidates` is never zero.
    fn select(&mut self, candidates: usize) -> usize;
}

/// Uniform pick backed by any `rand` generator.
pub struct RngSelector<R> {
    rng: R,
}

impl<R: Rng> RngSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSelector<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TitleSelector for RngSelector<R> {
    fn select(&mut self, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Always picks the same slot, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl TitleSelector for FixedSelector {
    fn select(&mut self, candidates: usize) -> usize {
        self.0 % candidates
    }
}
