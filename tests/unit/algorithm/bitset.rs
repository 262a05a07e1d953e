//! Tests for `PixelMask` membership tracking

#[cfg(test)]
mod tests {
    use markovpaint::algorithm::bitset::PixelMask;

    // Verifies a new mask is empty with count 0
    // Verified by initializing mask with all bits set to 1
    #[test]
    fn test_new_mask() {
        let mask = PixelMask::new(10);
        assert_eq!(mask.count(), 0);
        assert!(mask.is_empty());
        assert!(!mask.is_full());
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert method
    #[test]
    fn test_insert_and_contains() {
        let mut mask = PixelMask::new(10);
        assert!(mask.insert(5));
        assert!(mask.contains(5));
        assert!(!mask.contains(3));
        assert_eq!(mask.count(), 1);
    }

    // Tests that inserting twice does not double count
    // Verified by incrementing count unconditionally
    #[test]
    fn test_duplicate_insert_counted_once() {
        let mut mask = PixelMask::new(4);
        assert!(mask.insert(2));
        assert!(!mask.insert(2));
        assert_eq!(mask.count(), 1);
    }

    // Tests that out-of-range indices are ignored
    // Verified by removing the length guard in insert
    #[test]
    fn test_out_of_range_ignored() {
        let mut mask = PixelMask::new(4);
        assert!(!mask.insert(4));
        assert!(!mask.contains(100));
        assert!(mask.is_empty());
    }

    // Tests full detection and the coverage summary
    // Verified by comparing count against zero in is_full
    #[test]
    fn test_full_and_display() {
        let mut mask = PixelMask::new(3);
        mask.insert(2);
        mask.insert(0);
        assert!(!mask.is_full());
        assert_eq!(mask.to_string(), "PixelMask(2/3 pixels)");

        mask.insert(1);
        assert!(mask.is_full());
        assert_eq!(mask.to_string(), "PixelMask(3/3 pixels)");
    }
}
