// Scripted randomness for unit tests.

use haiku_prng::RandomSource;

/// Returns scripted offsets into each requested range, in order, then 0s.
///
/// `range_u64(low, high)` yields `low + script[i] % (high - low)`, so a test
/// can say "pick the second element" without knowing the generator's output.
pub(crate) struct ScriptedRng {
    script: Vec<u64>,
    pos: usize,
    /// Every `(low, high)` range requested, for asserting on draw order.
    pub(crate) requests: Vec<(u64, u64)>,
}

impl ScriptedRng {
    pub(crate) fn new(script: &[u64]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
            requests: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u64(&mut self) -> u64 {
        let v = self.script.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        v
    }

    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        self.requests.push((low, high));
        low + self.next_u64() % (high - low)
    }
}
