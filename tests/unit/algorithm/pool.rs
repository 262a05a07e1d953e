//! Tests for `PixelPool` removal and uniform sampling

#[cfg(test)]
mod tests {
    use markovpaint::algorithm::pool::PixelPool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests that a full pool holds every index
    // Verified by starting the member range at 1
    #[test]
    fn test_full_pool_contains_all() {
        let pool = PixelPool::full(5);
        assert_eq!(pool.len(), 5);
        assert!((0..5).all(|i| pool.contains(i)));
        assert!(!pool.contains(5));
    }

    // Tests removal bookkeeping including the swapped member
    // Verified by skipping the slot fixup of the moved member
    #[test]
    fn test_remove_keeps_slots_consistent() {
        let mut pool = PixelPool::full(5);
        assert!(pool.remove(1));
        assert!(!pool.remove(1));
        assert!(!pool.contains(1));

        // Index 4 was moved into slot 1; removing it must still work
        assert!(pool.remove(4));
        assert!(!pool.contains(4));
        assert_eq!(pool.len(), 3);
        assert!(pool.contains(0) && pool.contains(2) && pool.contains(3));
    }

    // Tests that sampling never returns removed members
    // Verified by sampling from the full index range instead of members
    #[test]
    fn test_choose_only_members() {
        let mut pool = PixelPool::full(10);
        for i in [0, 3, 5, 7, 9] {
            pool.remove(i);
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let Some(chosen) = pool.choose(&mut rng) else {
                panic!("pool is not empty");
            };
            assert!([1, 2, 4, 6, 8].contains(&chosen));
        }
    }

    // Tests that an exhausted pool yields nothing
    // Verified by returning index 0 for empty pools
    #[test]
    fn test_empty_pool() {
        let mut pool = PixelPool::full(2);
        pool.remove(0);
        pool.remove(1);

        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.is_empty());
        assert_eq!(pool.choose(&mut rng), None);
        assert!(PixelPool::full(0).is_empty());
    }
}
