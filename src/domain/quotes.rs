use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// The affirmations shown next to the completion message.
pub const QUOTES: [&str; 10] = [
    "Believe in yourself and all that you are.",
    "You are capable of amazing things.",
    "Every day is a second chance.",
    "Push yourself, because no one else is going to do it for you.",
    "Don't watch the clock; do what it does. Keep going.",
    "You don’t have to be great to start, but you have to start to be great.",
    "Small steps every day lead to big results.",
    "You are stronger than you think.",
    "Success is the sum of small efforts, repeated day in and day out.",
    "Dream it. Wish it. Do it.",
];

/// Random-pick capability for quotes.
///
/// Injected into the command executor so tests can substitute a seeded
/// source and assert on the exact quote chosen.
pub trait QuoteSource: Send {
    /// Pick one quote, uniformly at random over [`QUOTES`].
    fn pick(&mut self) -> &'static str;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl QuoteSource for ThreadRngSource {
    fn pick(&mut self) -> &'static str {
        QUOTES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(QUOTES[0])
    }
}

/// Deterministic source for tests and reproducible runs.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl QuoteSource for SeededSource {
    fn pick(&mut self) -> &'static str {
        QUOTES.choose(&mut self.rng).copied().unwrap_or(QUOTES[0])
    }
}
