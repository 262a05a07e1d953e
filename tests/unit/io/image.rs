//! Tests for PNG export and output file naming

#[cfg(test)]
mod tests {
    use markovpaint::io::image::{OutputDescriptor, export_canvas, sibling_path};
    use markovpaint::spatial::grid::Canvas;
    use markovpaint::spatial::shape::ShapeField;
    use std::path::{Path, PathBuf};

    // Tests PNG export creates missing directories and keeps pixel colors
    // Verified by disabling parent directory creation
    #[test]
    fn test_export_canvas_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("nested/deeper/result.png");

        let mut canvas = Canvas::new(3, 2);
        canvas.set([2, 1], [9, 8, 7]);

        export_canvas(&canvas, &output_path).unwrap();
        assert!(output_path.exists(), "PNG file should be created");

        let img = image::open(&output_path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [9, 8, 7]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    // Tests export into an unsupported format is reported
    // Verified by ignoring the save result
    #[test]
    fn test_export_canvas_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("result.unknown");

        let result = export_canvas(&Canvas::new(2, 2), &output_path);
        assert!(result.is_err());
    }

    // Tests output names encode parameters and palette stems
    // Verified by joining palette names with underscores
    #[test]
    fn test_output_descriptor_naming() {
        let palettes = vec![PathBuf::from("pal/sunset.png"), PathBuf::from("forest.jpg")];
        let descriptor = OutputDescriptor {
            shape: ShapeField::Circle,
            train_region_size: 2,
            gen_region_size: 3,
            sample_count: 2500,
            palettes: &palettes,
        };

        assert_eq!(
            descriptor.stem(),
            "circle_train2_gen3_samples2500_sunset-forest"
        );
        assert_eq!(
            descriptor.output_path(Path::new("output")),
            PathBuf::from("output/circle_train2_gen3_samples2500_sunset-forest_result.png")
        );
    }

    // Tests multi-word shapes use their command line names
    // Verified by formatting the shape with Debug
    #[test]
    fn test_output_descriptor_shape_name() {
        let palettes = vec![PathBuf::from("a.png")];
        let descriptor = OutputDescriptor {
            shape: ShapeField::Figure8,
            train_region_size: 1,
            gen_region_size: 1,
            sample_count: 100,
            palettes: &palettes,
        };

        assert!(descriptor.stem().starts_with("figure-8_"));
    }

    // Tests sibling paths keep the directory and swap the extension
    // Verified by dropping the parent directory
    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("out/a_result.png"), "_fill", "gif"),
            PathBuf::from("out/a_result_fill.gif")
        );
        assert_eq!(
            sibling_path(Path::new("a.png"), "_field", "png"),
            PathBuf::from("a_field.png")
        );
    }
}
