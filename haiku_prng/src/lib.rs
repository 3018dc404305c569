// Seedable pseudo-random number generator for haiku composition.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding,
// plus the `RandomSource` trait through which `haiku_lang` draws all of its
// randomness. The composer never touches ambient or global RNG state: callers
// hand it a `&mut impl RandomSource`, so tests can pass a seeded `HaikuRng`
// or a scripted source that returns chosen values.
//
// One `HaikuRng` is seeded once at startup (from `--seed` or the clock in
// the CLI) and reused for every haiku in the session.
//
// Determinism: every method must produce identical output given the same
// prior state, on every platform. No floating-point arithmetic in the core
// generator and no stdlib randomness.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed integers.
///
/// Only `next_u64` is required; the range helpers are derived from it with
/// rejection sampling. Implementors that want to script exact outcomes (in
/// tests) can override `range_u64` directly.
pub trait RandomSource {
    /// Generate the next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Pick a uniformly random element of a slice, or `None` if it is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, items.len());
        items.get(idx)
    }
}

/// Xoshiro256++ PRNG, the default `RandomSource`.
///
/// The state is serializable so a session can be snapshotted and resumed
/// with the same upcoming haiku.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HaikuRng {
    s: [u64; 4],
}

impl HaikuRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    /// Two `HaikuRng` instances created with the same seed will produce
    /// identical output sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }
}

impl RandomSource for HaikuRng {
    fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

/// SplitMix64, used only for expanding a `u64` seed into xoshiro state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
