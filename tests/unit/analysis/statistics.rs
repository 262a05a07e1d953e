//! Tests for per-channel adjacency statistics and palette training

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use markovpaint::PaintError;
    use markovpaint::analysis::statistics::{ChannelModel, ColorModel, TrainingConfig};
    use markovpaint::io::configuration::MAX_REGION_SIZE;
    use markovpaint::spatial::region::Region;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    fn gray_image() -> RgbImage {
        let values = [[10, 20], [30, 40]];
        RgbImage::from_fn(2, 2, |x, y| {
            let v = values[y as usize][x as usize];
            Rgb([v, v, v])
        })
    }

    fn sorted(entry: &[u8]) -> Vec<u8> {
        let mut values = entry.to_vec();
        values.sort_unstable();
        values
    }

    // Tests the adjacency multisets learned from a 2x2 image
    // Verified by swapping the x and y offsets in train_image
    #[test]
    fn test_train_image_two_by_two() {
        let mut model = ColorModel::new();
        model.train_image(&gray_image(), Region::Surrounding, 1);

        assert_eq!(sorted(model.red.entry(10)), vec![20, 30]);
        assert_eq!(sorted(model.red.entry(20)), vec![10, 40]);
        assert_eq!(sorted(model.red.entry(30)), vec![10, 40]);
        assert_eq!(sorted(model.red.entry(40)), vec![20, 30]);
        assert_eq!(model.red.keys(), vec![10, 20, 30, 40]);
        assert_eq!(model.green.observation_count(), 8);
    }

    // Tests that observations keep scan order: +x, +y, -y, -x per pixel
    // Verified by iterating rows before columns
    #[test]
    fn test_train_image_insertion_order() {
        let mut model = ColorModel::new();
        model.train_image(&gray_image(), Region::Surrounding, 1);

        assert_eq!(model.blue.entry(30), &[40, 10]);
        assert_eq!(model.blue.entry(20), &[40, 10]);
    }

    // Tests that quadrant regions only look in their direction
    // Verified by using surrounding offsets for every region
    #[test]
    fn test_train_image_lower_right_region() {
        let mut model = ColorModel::new();
        model.train_image(&gray_image(), Region::LowerRight, 1);

        assert_eq!(sorted(model.red.entry(10)), vec![20, 30]);
        assert!(!model.red.contains_key(40));
    }

    // Tests nearest key lookup on both sides with lower key preferred on ties
    // Verified by searching upward before downward
    #[test]
    fn test_nearest_key() {
        let mut channel = ChannelModel::new();
        channel.record(10, 1);
        channel.record(20, 2);
        assert_eq!(channel.nearest_key(14), Some(10));
        assert_eq!(channel.nearest_key(16), Some(20));
        assert_eq!(channel.nearest_key(15), Some(10));
        assert_eq!(channel.nearest_key(20), Some(20));
        assert_eq!(channel.nearest_key(255), Some(20));

        let mut tie = ChannelModel::new();
        tie.record(5, 0);
        tie.record(15, 0);
        assert_eq!(tie.nearest_key(10), Some(5));

        assert_eq!(ChannelModel::new().nearest_key(10), None);
    }

    // Tests that prediction samples from the nearest key's entry
    // Verified by sampling from the exact key only
    #[test]
    fn test_predict_uses_nearest_entry() {
        let mut channel = ChannelModel::new();
        channel.record(100, 7);
        channel.record(100, 9);

        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let Some(value) = channel.predict(90, &mut rng) else {
                panic!("non-empty channel must predict");
            };
            assert!(value == 7 || value == 9);
        }
    }

    // Tests random key and color selection from observed keys
    // Verified by drawing uniformly from all 256 values
    #[test]
    fn test_random_color_uses_observed_keys() {
        let mut model = ColorModel::new();
        model.train_image(&gray_image(), Region::Surrounding, 1);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let Some(color) = model.random_color(&mut rng) else {
                panic!("trained model must yield a color");
            };
            assert!(color.iter().all(|c| [10, 20, 30, 40].contains(c)));
        }
        assert_eq!(ColorModel::new().random_color(&mut rng), None);
    }

    // Tests that channels are predicted independently
    // Verified by predicting green from the red value
    #[test]
    fn test_predict_neighbor_color_per_channel() {
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([0, 100, 200]) } else { Rgb([50, 150, 250]) }
        });
        let mut model = ColorModel::new();
        model.train_image(&img, Region::Surrounding, 1);

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            model.predict_neighbor_color([0, 100, 200], &mut rng),
            Some([50, 150, 250])
        );
        assert_eq!(
            model.predict_neighbor_color([50, 150, 250], &mut rng),
            Some([0, 100, 200])
        );
    }

    // Tests that unreadable palettes are skipped and an empty result is fatal
    // Verified by returning an empty model instead of an error
    #[test]
    fn test_train_missing_files_is_empty_palette() {
        let config = TrainingConfig {
            region: Region::Surrounding,
            region_size: 1,
            sample_count: 4,
        };
        let paths = vec![PathBuf::from("does/not/exist.png")];

        let mut reported = Vec::new();
        let result = ColorModel::train_observed(&paths, &config, |path, trained| {
            reported.push((path.to_path_buf(), trained));
        });

        assert!(matches!(result, Err(PaintError::EmptyPalette { attempted: 1 })));
        assert_eq!(reported, vec![(PathBuf::from("does/not/exist.png"), false)]);
    }

    // Tests training from palette files mixed with a missing one
    // Verified by aborting on the first unreadable file
    #[test]
    fn test_train_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let palette = dir.path().join("gray.png");
        gray_image().save(&palette).unwrap();

        let config = TrainingConfig {
            region: Region::Surrounding,
            region_size: 1,
            sample_count: 4,
        };
        let paths = vec![dir.path().join("missing.png"), palette];
        let model = ColorModel::train(&paths, &config).unwrap();

        assert_eq!(sorted(model.red.entry(10)), vec![20, 30]);
        assert!(!model.is_empty());
    }

    // Tests training configuration validation
    // Verified by removing the zero region size check
    #[test]
    fn test_training_config_validate() {
        let valid = TrainingConfig {
            region: Region::UpperLeft,
            region_size: 2,
            sample_count: 2500,
        };
        assert!(valid.validate().is_ok());
        assert!(TrainingConfig { region_size: 0, ..valid }.validate().is_err());
        assert!(TrainingConfig { sample_count: 0, ..valid }.validate().is_err());
    }

    // Tests training region radii are bounded above
    // Verified by accepting any non-zero radius
    #[test]
    fn test_training_region_size_upper_bound() {
        let max = usize::from(MAX_REGION_SIZE);
        let valid = TrainingConfig {
            region: Region::Surrounding,
            region_size: max,
            sample_count: 2500,
        };
        assert!(valid.validate().is_ok());

        for size in [max + 1, usize::MAX] {
            assert!(matches!(
                TrainingConfig { region_size: size, ..valid }.validate(),
                Err(PaintError::InvalidParameter { parameter: "train_region_size", .. })
            ));
        }
    }
}
