//! Shuffling and uniform picks.

use rand::Rng;

/// Shuffle a slice in place with Fisher-Yates: walking from the last index
/// down to 1, swap each element with a uniformly chosen one at or below it.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

/// Pick one element uniformly at random, or `None` if the slice is empty.
pub fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<u32> = (0..50).collect();
        let mut out = shuffled(&original, &mut rng);
        assert_eq!(out.len(), original.len());
        out.sort_unstable();
        assert_eq!(out, original);
    }

    #[test]
    fn shuffle_deterministic_with_seed() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffled(&items, &mut StdRng::seed_from_u64(7));
        let b = shuffled(&items, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        // Each of 3 elements should land in the first slot at some point.
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let out = shuffled(&[0usize, 1, 2], &mut rng);
            seen[out[0]] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn pick_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        assert!(pick(&empty, &mut rng).is_none());
    }

    #[test]
    fn pick_returns_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for _ in 0..20 {
            let p = pick(&items, &mut rng).unwrap();
            assert!(items.contains(p));
        }
    }
}
