use rand::Rng;

/// Fisher-Yates shuffle of `items` in place, driven by `rng`.
///
/// Used for both the per-question option order and the session draw, so a
/// seeded RNG reproduces the whole run.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle `items` and keep the first `n`. Returns fewer than `n` only when
/// `items` is shorter; callers check the size beforehand.
pub fn draw_without_replacement<T, R: Rng>(mut items: Vec<T>, n: usize, rng: &mut R) -> Vec<T> {
    shuffle_in_place(&mut items, rng);
    items.truncate(n);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..52).collect();
        shuffle_in_place(&mut items, &mut rng);

        let mut seen = std::collections::HashSet::new();
        for x in &items {
            assert!(seen.insert(*x), "Duplicate item: {}", x);
        }
        assert_eq!(items.len(), 52);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items: Vec<u32> = (0..20).collect();
            shuffle_in_place(&mut items, &mut rng);
            items
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn draw_keeps_n_distinct_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = draw_without_replacement((0..10u32).collect(), 4, &mut rng);
        assert_eq!(drawn.len(), 4);
        let unique: std::collections::HashSet<_> = drawn.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle_in_place(&mut empty, &mut rng);
        assert!(empty.is_empty());
        let mut one = vec![5u8];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, vec![5]);
    }
}
