//! Random source threaded through the sweep.
//!
//! The sweep only ever asks two questions: an unbiased coin flip (traversal
//! direction, diagonal and lateral order) and "did an event with probability
//! `p` fire" (evaporation, steam decay). Any `rand::Rng` answers both.

use rand_xoshiro::Xoshiro256StarStar;

/// Generator owned by [`crate::simulation::Simulation`], seeded once.
pub type SimulationRng = Xoshiro256StarStar;

pub trait SimRng {
    /// 50/50 coin flip.
    fn coin(&mut self) -> bool;

    /// Uniform f64 in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// True with probability `p`. `p <= 0` never fires, `p >= 1` always does.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

impl<T: ?Sized + rand::Rng> SimRng for T {
    fn coin(&mut self) -> bool {
        self.gen()
    }

    fn unit(&mut self) -> f64 {
        self.gen()
    }
}
