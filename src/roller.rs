use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
///
/// Dice never own their randomness; every roll borrows a `Roller`, so
/// tests can script results and applications can share or seed one.
pub trait Roller {
    /// Returns an integer uniformly distributed in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn roll_below(&mut self, n: u32) -> u32;
}

impl<R: Roller + ?Sized> Roller for Box<R> {
    fn roll_below(&mut self, n: u32) -> u32 {
        (**self).roll_below(n)
    }
}

impl<R: Roller + ?Sized> Roller for &mut R {
    fn roll_below(&mut self, n: u32) -> u32 {
        (**self).roll_below(n)
    }
}

fn draw(rng: &mut impl Rng, n: u32) -> u32 {
    assert!(n > 0, "cannot roll a die with no faces");
    rng.random_range(0..n)
}

/// Rolls with the thread-local, OS-seeded generator.
pub struct ThreadRngRoller {
    rng: ThreadRng,
}

impl ThreadRngRoller {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl Roller for ThreadRngRoller {
    fn roll_below(&mut self, n: u32) -> u32 {
        draw(&mut self.rng, n)
    }
}

/// Rolls with a generator seeded from a fixed value. Two rollers built
/// from the same seed produce the same sequence.
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Roller for SeededRoller {
    fn roll_below(&mut self, n: u32) -> u32 {
        draw(&mut self.rng, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_roller_roll_below() {
        let mut roller = ThreadRngRoller::new();

        // Every value lands in [0, n)
        for _ in 0..100 {
            let roll = roller.roll_below(10);
            assert!(roll < 10);
        }

        // A single face always yields zero
        let roll = roller.roll_below(1);
        assert_eq!(roll, 0);
    }

    #[test]
    fn test_seeded_rollers_repeat_sequence() {
        let mut a = SeededRoller::new(42);
        let mut b = SeededRoller::new(42);

        let first: Vec<u32> = (0..50).map(|_| a.roll_below(100)).collect();
        let second: Vec<u32> = (0..50).map(|_| b.roll_below(100)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|&r| r < 100));
    }

    #[test]
    fn test_boxed_roller_forwards() {
        let mut roller: Box<dyn Roller> = Box::new(SeededRoller::new(7));
        let mut reference = SeededRoller::new(7);

        for _ in 0..20 {
            assert_eq!(roller.roll_below(6), reference.roll_below(6));
        }
    }

    #[test]
    #[should_panic(expected = "cannot roll a die with no faces")]
    fn test_roll_below_zero_panics() {
        ThreadRngRoller::new().roll_below(0);
    }
}
