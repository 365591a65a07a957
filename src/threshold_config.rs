use crate::player::Player;
use rand::seq::IteratorRandom;
use rand_core::{CryptoRng, RngCore};
use std::fmt::{Display, Formatter};

/// Encodes the *threshold configuration* for the committee: the reconstruction threshold $t$ and
/// the total number of parties $n$ such that any $t$ or more parties can jointly decrypt, but any
/// $t - 1$ or fewer learn nothing.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdConfig {
    /// The reconstruction threshold $t$: $t$ or more partial decryptions are needed.
    t: usize,
    /// The total number of parties $n$ in the committee.
    n: usize,
}

impl ThresholdConfig {
    /// Creates a new $t$-out-of-$n$ configuration where any subset of $t$ or more parties can
    /// jointly decrypt.
    pub fn new(t: usize, n: usize) -> Self {
        assert!(t >= 1, "threshold must be at least 1");
        assert!(t <= n, "threshold cannot exceed the number of parties");
        ThresholdConfig { t, n }
    }

    /// Returns the threshold $t$. Recall that $\ge t$ partial decryptions are needed to reconstruct.
    pub fn get_threshold(&self) -> usize {
        self.t
    }

    /// Returns the total number of parties $n$.
    pub fn get_total_num_players(&self) -> usize {
        self.n
    }

    /// Samples a uniformly random subset of exactly $t$ distinct players capable of jointly
    /// decrypting. Useful for tests and simulations.
    pub fn get_random_capable_subset<R>(&self, mut rng: &mut R) -> Vec<Player>
    where
        R: RngCore + CryptoRng,
    {
        (0..self.n)
            .choose_multiple(&mut rng, self.t)
            .into_iter()
            .map(Player::new)
            .collect::<Vec<Player>>()
    }
}

impl Display for ThresholdConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-out-of-{} threshold", self.t, self.n)
    }
}
