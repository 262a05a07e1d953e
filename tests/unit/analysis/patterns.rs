//! Tests for palette loading and sample-count resizing

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use markovpaint::PaintError;
    use markovpaint::analysis::patterns::{
        load_palette_image, resize_to_sample_count, sample_dimensions,
    };

    // Tests that dimensions scale by the square root of the area ratio
    // Verified by scaling by the plain area ratio
    #[test]
    fn test_sample_dimensions() {
        assert_eq!(sample_dimensions(100, 100, 2500), (50, 50));
        assert_eq!(sample_dimensions(200, 50, 2500), (100, 25));
        assert_eq!(sample_dimensions(10, 10, 2500), (50, 50));
    }

    // Tests that no side shrinks below one pixel
    // Verified by removing the max(1.0) clamp
    #[test]
    fn test_sample_dimensions_minimum_one() {
        assert_eq!(sample_dimensions(1000, 1, 4), (63, 1));
        assert_eq!(sample_dimensions(50, 50, 0), (1, 1));
    }

    // Tests nearest-neighbor resizing keeps only original colors
    // Verified by switching the filter to Triangle
    #[test]
    fn test_resize_keeps_original_colors() {
        let img = RgbImage::from_fn(20, 20, |x, _| {
            if x < 10 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        let resized = resize_to_sample_count(&img, 25);

        assert_eq!(resized.dimensions(), (5, 5));
        for pixel in resized.pixels() {
            assert!(pixel.0 == [255, 0, 0] || pixel.0 == [0, 0, 255]);
        }
    }

    // Tests that an already-sized image is returned unchanged
    // Verified by always resizing with a smoothing filter
    #[test]
    fn test_resize_same_size_is_identity() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let resized = resize_to_sample_count(&img, 6);
        assert_eq!(resized, img);
    }

    // Tests loading drops alpha and resizes
    // Verified by returning the image at its original size
    #[test]
    fn test_load_palette_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.png");
        RgbaImage::from_pixel(40, 10, Rgba([1, 2, 3, 0]))
            .save(&path)
            .unwrap();

        let img = load_palette_image(&path, 100).unwrap();
        assert_eq!(img.dimensions(), (20, 5));
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
    }

    // Tests that a missing file reports an image load error with its path
    // Verified by mapping open errors to FileSystem
    #[test]
    fn test_load_missing_palette() {
        let result = load_palette_image("no/such/palette.png", 100);
        match result {
            Err(PaintError::ImageLoad { path, .. }) => {
                assert!(path.ends_with("palette.png"));
            }
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }
}
