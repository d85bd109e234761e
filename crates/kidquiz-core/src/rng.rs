// Copyright 2026 The kidquiz Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A minimal, zero-dependency, completely insecure PRNG. Every random choice
/// the quiz makes (round composition, option order, distractors) goes through
/// one of these, so a fixed seed reproduces a whole session.
#[derive(Clone, Debug)]
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    // Generate random number in range [0, max).
    pub fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random number in the inclusive range [lo, hi].
    pub fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u32;
        lo + self.generate(span) as i64
    }

    pub fn coin(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(v: Vec<T>, rng: &mut TinyRng) -> Vec<T> {
    let mut v = v;
    let len = v.len();
    for i in (1..len).rev() {
        let j = rng.generate(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TinyRng::from_seed(42);
        let mut b = TinyRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = TinyRng::from_seed(7);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let n = rng.range_inclusive(1, 3);
            assert!((1..=3).contains(&n));
            seen[(n - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_coin_takes_both_sides() {
        let mut rng = TinyRng::from_seed(3);
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!(heads > 0 && heads < 1000);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = TinyRng::from_seed(1234);
        let original: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle(original.clone(), &mut rng);
        assert_ne!(shuffled, original);
        shuffled.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = TinyRng::from_seed(0);
        assert_eq!(shuffle(Vec::<u8>::new(), &mut rng), Vec::<u8>::new());
        assert_eq!(shuffle(vec![9], &mut rng), vec![9]);
    }
}
